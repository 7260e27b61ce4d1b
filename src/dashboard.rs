use std::io::{self, Write};

use chrono::{DateTime, Local};

use crate::models::{HostInfo, Snapshot};
use crate::renderer::{widgets, Renderer};

// Draw one full screen: header, metric tables, footer
pub fn render_cycle<W: Write>(
    renderer: &Renderer,
    out: &mut W,
    host: &HostInfo,
    snapshot: &Snapshot,
    now: DateTime<Local>,
) -> io::Result<()> {
    renderer.clear(out)?;
    renderer.header(out, host, now)?;

    for table in widgets::build_tables(snapshot) {
        renderer.table(out, &table)?;
    }

    renderer.footer(out, now)?;
    out.flush()
}
