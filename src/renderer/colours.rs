use crate::utils::format::Status;
use colored::Color;

pub(crate) struct Colours {
    pub title: Color,
    pub header: Color,
    pub label: Color,
    pub bytes: Color,
    pub info: Color,
    pub normal: Color,
    pub warning: Color,
}

impl Default for Colours {
    fn default() -> Self {
        Self {
            title: Color::Magenta,  // section banners
            header: Color::White,   // table column headers
            label: Color::Cyan,     // names, devices, counters
            bytes: Color::Yellow,   // byte quantities
            info: Color::Blue,      // frequencies, mountpoints, drivers
            normal: Color::Green,
            warning: Color::Red,
        }
    }
}

impl Colours {
    pub fn status(&self, status: Status) -> Color {
        match status {
            Status::Normal => self.normal,
            Status::Warning => self.warning,
        }
    }
}
