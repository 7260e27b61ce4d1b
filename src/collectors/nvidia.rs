use crate::error::GpuError;
use crate::models::GpuInfo;
use log::debug;
use std::io::ErrorKind;
use std::time::Instant;
use tokio::process::Command;

const QUERY: &str =
    "--query-gpu=name,utilization.gpu,temperature.gpu,memory.used,memory.total,driver_version";

// nvidia-smi is installed but there is nothing it can talk to.
const NO_DEVICE_MARKERS: [&str; 2] = [
    "No devices were found",
    "couldn't communicate with the NVIDIA driver",
];

pub async fn collect() -> Result<Vec<GpuInfo>, GpuError> {
    let start = Instant::now();

    let cmd_start = Instant::now();
    let output = Command::new("nvidia-smi")
        .args([QUERY, "--format=csv,noheader,nounits"])
        .output()
        .await
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound | ErrorKind::PermissionDenied => GpuError::Unavailable,
            _ => GpuError::Query(e.to_string()),
        })?;
    debug!(
        "nvidia-smi command execution took: {} ms",
        cmd_start.elapsed().as_millis()
    );

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        if NO_DEVICE_MARKERS
            .iter()
            .any(|marker| stdout.contains(marker) || stderr.contains(marker))
        {
            return Err(GpuError::Unavailable);
        }
        return Err(GpuError::Query(format!(
            "exit status {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    let result = parse(&String::from_utf8_lossy(&output.stdout));
    debug!(
        "collect (total Nvidia GPU info collection) took: {} ms",
        start.elapsed().as_millis()
    );
    result
}

/// Parses `nvidia-smi` CSV output, one GPU per line. Malformed lines are
/// skipped; output with lines but no parsable GPU is an error.
pub fn parse(output: &str) -> Result<Vec<GpuInfo>, GpuError> {
    let lines: Vec<&str> = output.lines().filter(|l| !l.trim().is_empty()).collect();
    let gpus: Vec<GpuInfo> = lines.iter().filter_map(|line| parse_line(line)).collect();

    if gpus.is_empty() && !lines.is_empty() {
        return Err(GpuError::Parse(lines[0].to_string()));
    }
    Ok(gpus)
}

fn parse_line(line: &str) -> Option<GpuInfo> {
    let values: Vec<&str> = line.split(',').map(|s| s.trim()).collect();
    if values.len() != 6 {
        debug!("Skipping nvidia-smi line with {} fields", values.len());
        return None;
    }

    Some(GpuInfo {
        name: values[0].to_string(),
        load: reading(values[1])?.map(|load| load.clamp(0.0, 100.0)),
        temperature: reading(values[2])?,
        memory_used: values[3].parse::<f32>().ok()? as u64,
        memory_total: values[4].parse::<f32>().ok()? as u64,
        driver: values[5].to_string(),
    })
}

/// A field the card does not report (`[N/A]`, `[Not Supported]`) is
/// `Some(None)`; anything else that is not a number makes the line malformed.
fn reading(value: &str) -> Option<Option<f32>> {
    if value.starts_with('[') && value.ends_with(']') {
        return Some(None);
    }
    value.parse::<f32>().ok().map(Some)
}
