//! Metric sources. [`MetricsProvider`] is the seam the monitor loop reads
//! through; [`SysinfoProvider`] backs it with `sysinfo`, hwmon and nvidia-smi.

pub(crate) mod collector;
pub(crate) mod cpu;
pub(crate) mod disk;
pub(crate) mod memory;
pub(crate) mod network;
pub(crate) mod nvidia;
pub(crate) mod system;

pub use collector::Collector;

use crate::error::{GpuError, MonitorError};
use crate::models::{CpuInfo, DiskInfo, GpuInfo, HostInfo, MemoryInfo, NetworkInfo};
use sysinfo::System as SysInfo;

#[allow(async_fn_in_trait)]
pub trait MetricsProvider {
    fn host_info(&mut self) -> Result<HostInfo, MonitorError>;

    /// Per-core usage sampled over a short window.
    async fn cpu(&mut self) -> Result<CpuInfo, MonitorError>;

    fn memory(&mut self) -> Result<MemoryInfo, MonitorError>;

    /// Partitions that cannot be read are left out.
    fn disks(&mut self) -> Vec<DiskInfo>;

    fn network(&mut self) -> Result<NetworkInfo, MonitorError>;

    async fn gpus(&mut self) -> Result<Vec<GpuInfo>, GpuError>;
}

pub struct SysinfoProvider {
    sys: SysInfo,
}

impl SysinfoProvider {
    pub fn new() -> Self {
        Self { sys: SysInfo::new() }
    }
}

impl Default for SysinfoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsProvider for SysinfoProvider {
    fn host_info(&mut self) -> Result<HostInfo, MonitorError> {
        system::collect_host_info(&mut self.sys)
    }

    async fn cpu(&mut self) -> Result<CpuInfo, MonitorError> {
        cpu::collect(&mut self.sys).await
    }

    fn memory(&mut self) -> Result<MemoryInfo, MonitorError> {
        Ok(memory::collect(&mut self.sys))
    }

    fn disks(&mut self) -> Vec<DiskInfo> {
        disk::collect()
    }

    fn network(&mut self) -> Result<NetworkInfo, MonitorError> {
        Ok(network::collect())
    }

    async fn gpus(&mut self) -> Result<Vec<GpuInfo>, GpuError> {
        nvidia::collect().await
    }
}
