use colored::Colorize;
use env_logger::{Builder, WriteStyle};
use hoststat::config::AppConfig;
use log::error;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    // Load configuration first (without logging)
    let config = AppConfig::new().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {:#}", e);
        // Fall back to default configuration
        AppConfig::default()
    });

    // Initialise logger with a configured log level
    Builder::new()
        .filter_level(config.get_log_level())
        .write_style(WriteStyle::Always)
        .format_timestamp_secs()
        .init();

    if let Err(missing) = hoststat::check_capabilities() {
        eprintln!("{} {}", "Cannot start:".red().bold(), missing);
        eprintln!("{}", missing.remediation());
        return Ok(ExitCode::FAILURE);
    }

    if let Err(e) = hoststat::run().await {
        error!("Application error: {}", e);
        return Err(e);
    }
    Ok(ExitCode::SUCCESS)
}
