use crate::models::DiskInfo;
use log::debug;
use std::time::Instant;
use sysinfo::Disks as SysInfoDisks;

pub fn collect() -> Vec<DiskInfo> {
    let start = Instant::now();
    let disks = SysInfoDisks::new_with_refreshed_list();

    let result = partitions(disks.list().iter().map(|disk| {
        (
            disk.name().to_string_lossy().into_owned(),
            disk.mount_point().to_string_lossy().into_owned(),
            disk.total_space(),
            disk.available_space(),
        )
    }));
    debug!("collect (disk) took: {} ms", start.elapsed().as_millis());
    result
}

/// Usage rows for `(device, mount point, total, available)` entries, in the
/// order given. Entries that cannot be statted are dropped.
pub fn partitions<I>(entries: I) -> Vec<DiskInfo>
where
    I: IntoIterator<Item = (String, String, u64, u64)>,
{
    entries
        .into_iter()
        .filter_map(|(device, mount_point, total, available)| {
            usage(&device, &mount_point, total, available)
        })
        .collect()
}

/// A partition reporting no capacity could not be statted and is left out.
pub fn usage(device: &str, mount_point: &str, total: u64, available: u64) -> Option<DiskInfo> {
    if total == 0 {
        debug!("Skipping {} on {}: no capacity reported", device, mount_point);
        return None;
    }
    Some(DiskInfo {
        device: device.to_string(),
        mount_point: mount_point.to_string(),
        used: total.saturating_sub(available),
        total,
    })
}
