//! Turns raw readings into the strings and status tags shown on the dashboard.

use std::fmt;

/// Usage and load readings at or above this percentage are flagged.
pub const USAGE_THRESHOLD: f32 = 80.0;

/// Temperatures at or above this many degrees Celsius are flagged.
pub const TEMPERATURE_THRESHOLD: f32 = 75.0;

const BYTE_UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Normal,
    Warning,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Normal => "normal",
            Status::Warning => "warning",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn classify(value: f32, threshold: f32) -> Status {
    if value >= threshold {
        Status::Warning
    } else {
        Status::Normal
    }
}

/// Scales a byte count by powers of 1024, e.g. `1536` becomes `"1.50KB"`.
///
/// Counts of 1024 PB and more stay in PB.
pub fn scale_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2}{}", value, BYTE_UNITS[unit])
}

/// Formats an uptime as `"2d 3h 4m 5s"`, leaving out zero parts.
pub fn format_uptime(uptime: chrono::Duration) -> String {
    let duration = uptime.num_seconds().max(0) as u64;
    let days = duration / (24 * 3600);
    let hours = (duration % (24 * 3600)) / 3600;
    let minutes = (duration % 3600) / 60;
    let seconds = duration % 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{}d", days));
    }
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(format!("{}s", seconds));
    }
    parts.join(" ")
}
