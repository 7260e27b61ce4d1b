#[derive(Debug, Clone, PartialEq)]
pub struct DiskInfo {
    pub device: String,
    pub mount_point: String,
    pub used: u64,
    pub total: u64,
}

impl DiskInfo {
    pub fn percent(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        (self.used as f64 / self.total as f64 * 100.0) as f32
    }
}

impl Default for DiskInfo {
    fn default() -> Self {
        Self {
            device: String::new(),
            mount_point: String::new(),
            used: 0,
            total: 0,
        }
    }
}
