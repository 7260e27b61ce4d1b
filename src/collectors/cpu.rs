use crate::error::MonitorError;
use crate::models::{CoreInfo, CpuInfo};
use log::debug;
use std::time::{Duration, Instant};
use sysinfo::System as SysInfo;

/// Usage is averaged over this window.
pub const SAMPLE_WINDOW: Duration = Duration::from_secs(1);

pub async fn collect(sys: &mut SysInfo) -> Result<CpuInfo, MonitorError> {
    let start = Instant::now();

    sys.refresh_cpu_usage();
    tokio::time::sleep(SAMPLE_WINDOW.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL)).await;
    sys.refresh_cpu_usage();
    sys.refresh_cpu_frequency();

    let cpus = sys.cpus();
    if cpus.is_empty() {
        return Err(MonitorError::collect("cpu", "no processors reported"));
    }

    let frequency = cpus[0].frequency();
    let usages: Vec<f32> = cpus.iter().map(|cpu| cpu.cpu_usage()).collect();
    let temperatures = collect_temperatures();

    let result = CpuInfo {
        cores: with_temperatures(&usages, temperatures.as_deref()),
        frequency,
    };
    debug!("collect (cpu) took: {} ms", start.elapsed().as_millis());
    Ok(result)
}

/// Pairs core `i` with temperature reading `i`; cores past the end of the
/// readings (or all of them, without readings) get `None`.
pub fn with_temperatures(usages: &[f32], temperatures: Option<&[f32]>) -> Vec<CoreInfo> {
    usages
        .iter()
        .enumerate()
        .map(|(i, &usage)| CoreInfo {
            usage,
            temperature: temperatures.and_then(|temps| temps.get(i).copied()),
        })
        .collect()
}

#[cfg(target_os = "linux")]
fn collect_temperatures() -> Option<Vec<f32>> {
    let start = Instant::now();
    let result = crate::utils::hwmon::coretemp_readings(std::path::Path::new(
        crate::utils::hwmon::HWMON_ROOT,
    ));
    if result.is_none() {
        debug!("No coretemp sensors, per-core temperature unavailable");
    }
    debug!("collect_temperatures took: {} ms", start.elapsed().as_millis());
    result
}

#[cfg(not(target_os = "linux"))]
fn collect_temperatures() -> Option<Vec<f32>> {
    use crate::utils::hwmon::parse_core_label;

    let start = Instant::now();
    let components = sysinfo::Components::new_with_refreshed_list();
    let mut cores: Vec<(u32, f32)> = components
        .list()
        .iter()
        .filter_map(|component| {
            let label = component.label();
            let core = label
                .find("Core ")
                .and_then(|idx| parse_core_label(&label[idx..]))?;
            Some((core, component.temperature()?))
        })
        .collect();
    debug!("collect_temperatures took: {} ms", start.elapsed().as_millis());

    if cores.is_empty() {
        debug!("No per-core temperature sensors reported");
        return None;
    }
    cores.sort_by_key(|(core, _)| *core);
    Some(cores.into_iter().map(|(_, temp)| temp).collect())
}
