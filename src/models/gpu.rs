#[derive(Debug, Clone, PartialEq, Default)]
pub struct GpuInfo {
    pub name: String,
    /// Utilisation in percent, 0-100. `None` when the card does not report it.
    pub load: Option<f32>,
    pub temperature: Option<f32>,
    /// MiB, as reported by nvidia-smi.
    pub memory_used: u64,
    pub memory_total: u64,
    pub driver: String,
}
