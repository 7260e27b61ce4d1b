#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MemoryUsage {
    pub used: u64,
    pub total: u64,
}

impl MemoryUsage {
    pub fn new(used: u64, total: u64) -> Self {
        Self { used, total }
    }

    pub fn percent(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        (self.used as f64 / self.total as f64 * 100.0) as f32
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MemoryInfo {
    pub ram: MemoryUsage,
    pub swap: MemoryUsage,
}
