pub mod cpu;
pub mod disk;
pub mod gpu;
pub mod memory;
pub mod network;
pub mod system;

pub use cpu::{CoreInfo, CpuInfo};
pub use disk::DiskInfo;
pub use gpu::GpuInfo;
pub use memory::{MemoryInfo, MemoryUsage};
pub use network::NetworkInfo;
pub use system::HostInfo;

/// Every reading taken during one refresh cycle.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub cpu: CpuInfo,
    pub memory: MemoryInfo,
    pub disks: Vec<DiskInfo>,
    pub network: NetworkInfo,
    pub gpus: Vec<GpuInfo>,
}
