use chrono::{DateTime, Local};

/// Read once at startup and kept for the lifetime of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct HostInfo {
    pub os_name: String,
    pub processor: String,
    pub boot_time: DateTime<Local>,
}

impl HostInfo {
    pub fn uptime(&self, now: DateTime<Local>) -> chrono::Duration {
        now.signed_duration_since(self.boot_time)
    }
}
