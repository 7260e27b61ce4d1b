use crate::collectors::MetricsProvider;
use crate::error::{GpuError, MonitorError};
use crate::models::Snapshot;
use log::{debug, log, Level};
use std::time::Instant;

/// Builds snapshots across cycles. A GPU failure that keeps repeating is
/// logged at warn once, then at debug until the GPU reads again.
#[derive(Debug, Default)]
pub struct Collector {
    gpu_failure_reported: bool,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads every category once. GPU failures degrade to an empty list; any
    /// other error is returned.
    pub async fn snapshot<P: MetricsProvider>(&mut self, provider: &mut P) -> Result<Snapshot, MonitorError> {
        let start = Instant::now();

        let gpus = match provider.gpus().await {
            Ok(gpus) => {
                self.gpu_failure_reported = false;
                gpus
            }
            Err(GpuError::Unavailable) => {
                debug!("GPU metrics unavailable on this host");
                Vec::new()
            }
            Err(e) => {
                log!(self.gpu_failure_level(), "Skipping GPU metrics: {}", e);
                Vec::new()
            }
        };
        let cpu = provider.cpu().await?;
        let memory = provider.memory()?;
        let disks = provider.disks();
        let network = provider.network()?;

        let snapshot = Snapshot {
            cpu,
            memory,
            disks,
            network,
            gpus,
        };
        debug!("snapshot took: {} ms", start.elapsed().as_millis());
        debug!("{:?}", snapshot);
        Ok(snapshot)
    }

    fn gpu_failure_level(&mut self) -> Level {
        if self.gpu_failure_reported {
            Level::Debug
        } else {
            self.gpu_failure_reported = true;
            Level::Warn
        }
    }
}
