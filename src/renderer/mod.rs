pub(crate) mod colours;
pub mod table;
pub mod widgets;

use crate::models::HostInfo;
use crate::renderer::colours::Colours;
use crate::renderer::table::{border, row_line, Table, Tone};
use crate::utils::format::format_uptime;
use chrono::{DateTime, Local};
use colored::{Color, Colorize};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

/// Draws the dashboard. Console setup happens once in [`Renderer::new`]; the
/// renderer itself keeps no per-cycle state.
pub struct Renderer {
    colours: Colours,
    color: bool,
}

impl Renderer {
    pub fn new() -> Self {
        #[cfg(windows)]
        let vt_enabled = colored::control::set_virtual_terminal(true).is_ok();
        #[cfg(not(windows))]
        let vt_enabled = true;

        Self {
            colours: Colours::default(),
            color: vt_enabled && colored::control::SHOULD_COLORIZE.should_colorize(),
        }
    }

    /// A renderer that never emits color codes.
    pub fn plain() -> Self {
        Self {
            colours: Colours::default(),
            color: false,
        }
    }

    fn paint(&self, text: &str, colour: Color) -> String {
        if self.color {
            text.color(colour).to_string()
        } else {
            text.to_string()
        }
    }

    fn tone_colour(&self, tone: Tone) -> Option<Color> {
        match tone {
            Tone::Status(status) => Some(self.colours.status(status)),
            Tone::Label => Some(self.colours.label),
            Tone::Bytes => Some(self.colours.bytes),
            Tone::Info => Some(self.colours.info),
            Tone::Plain => None,
        }
    }

    pub fn clear<W: Write>(&self, out: &mut W) -> io::Result<()> {
        queue!(out, Clear(ClearType::Purge), Clear(ClearType::All), MoveTo(0, 0))
    }

    fn title<W: Write>(&self, out: &mut W, title: &str) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", self.paint(&format!("=== {} ===", title), self.colours.title))
    }

    fn field<W: Write>(&self, out: &mut W, name: &str, value: &str) -> io::Result<()> {
        writeln!(out, "{} {}", self.paint(name, self.colours.label), value)
    }

    pub fn header<W: Write>(&self, out: &mut W, host: &HostInfo, now: DateTime<Local>) -> io::Result<()> {
        self.title(out, "System Information")?;
        self.field(out, "OS:", &host.os_name)?;
        self.field(out, "CPU Model:", &host.processor)?;
        self.field(out, "System Uptime:", &format_uptime(host.uptime(now)))
    }

    pub fn table<W: Write>(&self, out: &mut W, table: &Table) -> io::Result<()> {
        self.title(out, table.title)?;

        let widths = table.column_widths();
        let rule = border(&widths, '-');

        writeln!(out, "{}", rule)?;
        let headers = table
            .headers
            .iter()
            .map(|h| (self.paint(h, self.colours.header), h.width()));
        writeln!(out, "{}", row_line(&widths, headers))?;
        writeln!(out, "{}", border(&widths, '='))?;

        for row in &table.rows {
            let cells = row.iter().map(|cell| {
                let text = match self.tone_colour(cell.tone) {
                    Some(colour) => self.paint(&cell.text, colour),
                    None => cell.text.clone(),
                };
                (text, cell.text.width())
            });
            writeln!(out, "{}", row_line(&widths, cells))?;
            writeln!(out, "{}", rule)?;
        }
        Ok(())
    }

    pub fn footer<W: Write>(&self, out: &mut W, now: DateTime<Local>) -> io::Result<()> {
        writeln!(out)?;
        self.field(out, "Last updated:", &now.format("%Y-%m-%d %H:%M:%S").to_string())?;
        writeln!(out)?;
        writeln!(out, "{}", self.paint("Press Ctrl+C to exit", self.colours.bytes))
    }

    pub fn goodbye<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", self.paint("Monitoring stopped.", self.colours.normal))?;
        out.flush()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
