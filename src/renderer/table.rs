//! Grid tables in the `+---+` / `+===+` layout.

use crate::utils::format::Status;
use unicode_width::UnicodeWidthStr;

/// How a cell is colored. Only `Status` carries a reading's classification,
/// the others are fixed accents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Status(Status),
    Label,
    Bytes,
    Info,
    Plain,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub text: String,
    pub tone: Tone,
}

impl Cell {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn status(&self) -> Option<Status> {
        match self.tone {
            Tone::Status(status) => Some(status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub title: &'static str,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let width = cell.text.width();
                match widths.get_mut(i) {
                    Some(w) => *w = (*w).max(width),
                    None => widths.push(width),
                }
            }
        }
        widths
    }
}

pub fn border(widths: &[usize], fill: char) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.extend(std::iter::repeat(fill).take(width + 2));
        line.push('+');
    }
    line
}

/// Joins already painted cells into a `| a | b |` line. `cells` pairs the
/// painted text with its visible width so escape codes do not skew padding.
pub fn row_line(widths: &[usize], cells: impl IntoIterator<Item = (String, usize)>) -> String {
    let mut line = String::from("|");
    let mut cells = cells.into_iter();
    for width in widths {
        let (text, visible) = cells.next().unwrap_or((String::new(), 0));
        line.push(' ');
        line.push_str(&text);
        line.push_str(&" ".repeat(width.saturating_sub(visible)));
        line.push_str(" |");
    }
    line
}
