use std::io;
use thiserror::Error;

/// Failures that end the monitor loop.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("failed to collect {metric}: {reason}")]
    Collect {
        metric: &'static str,
        reason: String,
    },

    #[error("failed to write to terminal: {0}")]
    Output(#[from] io::Error),

    #[error("failed to listen for shutdown signal: {0}")]
    Signal(#[source] io::Error),
}

impl MonitorError {
    pub fn collect(metric: &'static str, reason: impl Into<String>) -> Self {
        Self::Collect {
            metric,
            reason: reason.into(),
        }
    }
}

/// GPU readings are optional: `Unavailable` means the host has no supported
/// GPU tooling, everything else is an unexpected failure.
#[derive(Debug, Error)]
pub enum GpuError {
    #[error("no supported GPU tooling found")]
    Unavailable,

    #[error("nvidia-smi failed: {0}")]
    Query(String),

    #[error("unexpected nvidia-smi output: {0}")]
    Parse(String),
}

/// A capability the dashboard cannot run without.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MissingCapability {
    #[error("system metrics are not supported on this operating system")]
    MetricsProvider,

    #[error("no terminal is attached to the process")]
    Terminal,
}

impl MissingCapability {
    pub fn remediation(&self) -> &'static str {
        match self {
            Self::MetricsProvider => {
                "hoststat reads metrics through sysinfo, which supports Linux, macOS, Windows, FreeBSD and Android. Run it on one of those systems."
            }
            Self::Terminal => {
                "Run hoststat from an interactive terminal so the tables can be drawn and refreshed."
            }
        }
    }
}
