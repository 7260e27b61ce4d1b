use crate::models::{MemoryInfo, MemoryUsage};
use log::debug;
use std::time::Instant;
use sysinfo::System as SysInfo;

pub fn collect(sys: &mut SysInfo) -> MemoryInfo {
    let start = Instant::now();
    sys.refresh_memory();

    let result = MemoryInfo {
        ram: MemoryUsage::new(sys.used_memory(), sys.total_memory()),
        swap: MemoryUsage::new(sys.used_swap(), sys.total_swap()),
    };
    debug!("collect (memory) took: {} ms", start.elapsed().as_millis());
    result
}
