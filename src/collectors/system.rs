use crate::error::MonitorError;
use crate::models::HostInfo;
use chrono::{DateTime, Local};
use log::debug;
use std::time::Instant;
use sysinfo::System as SysInfo;

pub fn collect_host_info(sys: &mut SysInfo) -> Result<HostInfo, MonitorError> {
    let start = Instant::now();
    sys.refresh_cpu_all();

    let os_name = SysInfo::long_os_version()
        .or_else(SysInfo::name)
        .unwrap_or_else(|| std::env::consts::OS.to_string());
    let processor = sys
        .cpus()
        .first()
        .map(|cpu| cpu.brand().trim().to_string())
        .filter(|brand| !brand.is_empty())
        .unwrap_or_else(|| std::env::consts::ARCH.to_string());
    let boot_time = boot_time(SysInfo::boot_time())?;

    let result = HostInfo {
        os_name,
        processor,
        boot_time,
    };
    debug!("collect_host_info took: {} ms", start.elapsed().as_millis());
    Ok(result)
}

fn boot_time(seconds: u64) -> Result<DateTime<Local>, MonitorError> {
    i64::try_from(seconds)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|utc| utc.with_timezone(&Local))
        .ok_or_else(|| MonitorError::collect("boot time", format!("invalid timestamp {}", seconds)))
}
