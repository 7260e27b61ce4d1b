use anyhow::{Context, Result};
use config::{Config, File, FileFormat};
use log::LevelFilter;
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_FILE: &str = "config.ini";

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Log lines go to stderr next to a full-screen dashboard, keep them rare.
fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(alias = "LOGGING", default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Loads `config.ini` from the working directory; a missing file gives
    /// the defaults.
    pub fn new() -> Result<Self> {
        Self::from_file(CONFIG_FILE)
    }

    pub fn get_log_level(&self) -> LevelFilter {
        match self.logging.level.to_lowercase().as_str() {
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            "off" => LevelFilter::Off,
            _ => LevelFilter::Warn,
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config_path = path.as_ref();

        let config = Config::builder()
            .add_source(
                File::from(config_path)
                    .format(FileFormat::Ini)
                    .required(false),
            )
            .build()
            .context(format!("Failed to load config from {}", config_path.display()))?;

        let app_config: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize config")?;

        Ok(app_config)
    }
}
