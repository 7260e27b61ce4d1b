#[derive(Debug, Clone, PartialEq)]
pub struct CoreInfo {
    pub usage: f32,
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CpuInfo {
    pub cores: Vec<CoreInfo>,
    /// Current clock in MHz, shared by all cores.
    pub frequency: u64,
}

impl Default for CpuInfo {
    fn default() -> Self {
        Self {
            cores: Vec::new(),
            frequency: 0,
        }
    }
}
