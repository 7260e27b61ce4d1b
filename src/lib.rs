pub mod collectors;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod monitor;
pub mod renderer;
pub mod utils;

use crate::collectors::SysinfoProvider;
use crate::error::MissingCapability;
use crate::monitor::Monitor;
use crate::renderer::Renderer;
use anyhow::Context;
use log::{debug, error, info};
use std::io;

/// Verifies what the dashboard needs before the first refresh.
pub fn check_capabilities() -> Result<(), MissingCapability> {
    if !sysinfo::IS_SUPPORTED_SYSTEM {
        return Err(MissingCapability::MetricsProvider);
    }

    if let Err(e) = crossterm::terminal::size() {
        debug!("Terminal size query failed: {}", e);
        return Err(MissingCapability::Terminal);
    }

    Ok(())
}

pub async fn run() -> anyhow::Result<()> {
    info!("Starting application");

    match main_loop().await {
        Ok(_) => info!("Application completed successfully"),
        Err(e) => {
            error!("Application error: {e:#}");
            // Print chain of error causes
            for cause in e.chain().skip(1) {
                error!("Caused by: {cause}");
            }
            return Err(e).context("Application failed to run");
        }
    }

    Ok(())
}

async fn main_loop() -> anyhow::Result<()> {
    debug!("Reading static host information");
    let mut monitor = Monitor::new(SysinfoProvider::new(), Renderer::new())
        .context("Failed to read host information")?;

    let mut stdout = io::stdout().lock();
    monitor
        .run(&mut stdout, shutdown_signal())
        .await
        .context("Monitor loop failed")?;

    Ok(())
}

async fn shutdown_signal() -> io::Result<()> {
    tokio::signal::ctrl_c().await
}
