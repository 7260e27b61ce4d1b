//! The refresh loop: collect, draw, wait, until shutdown is requested.

use std::future::Future;
use std::io::{self, Write};
use std::time::Duration;

use chrono::Local;
use log::{debug, info};

use crate::collectors::{Collector, MetricsProvider};
use crate::dashboard::render_cycle;
use crate::error::MonitorError;
use crate::models::HostInfo;
use crate::renderer::Renderer;

/// Time between two screen refreshes.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    Running,
    Stopped,
}

pub struct Monitor<P> {
    provider: P,
    collector: Collector,
    renderer: Renderer,
    host: HostInfo,
    interval: Duration,
    state: MonitorState,
}

impl<P: MetricsProvider> Monitor<P> {
    /// Reads the static host info once; the monitor starts out `Running`.
    pub fn new(mut provider: P, renderer: Renderer) -> Result<Self, MonitorError> {
        let host = provider.host_info()?;
        debug!("Host: {:?}", host);
        Ok(Self {
            provider,
            collector: Collector::new(),
            renderer,
            host,
            interval: REFRESH_INTERVAL,
            state: MonitorState::Running,
        })
    }

    pub fn state(&self) -> MonitorState {
        self.state
    }

    pub fn host(&self) -> &HostInfo {
        &self.host
    }

    /// One refresh: snapshot, draw, then wait out the interval.
    pub async fn tick<W: Write>(&mut self, out: &mut W) -> Result<(), MonitorError> {
        let snapshot = self.collector.snapshot(&mut self.provider).await?;
        render_cycle(&self.renderer, out, &self.host, &snapshot, Local::now())?;
        tokio::time::sleep(self.interval).await;
        Ok(())
    }

    /// Refreshes until `shutdown` resolves. The shutdown future is raced
    /// against the whole tick, so a request during the wait is served at once.
    /// A shutdown future that fails ends the loop with [`MonitorError::Signal`].
    pub async fn run<W, S>(&mut self, out: &mut W, shutdown: S) -> Result<(), MonitorError>
    where
        W: Write,
        S: Future<Output = io::Result<()>>,
    {
        tokio::pin!(shutdown);

        let mut state = self.state;
        while state == MonitorState::Running {
            state = tokio::select! {
                biased;
                signal = &mut shutdown => {
                    signal.map_err(MonitorError::Signal)?;
                    info!("Shutdown requested");
                    MonitorState::Stopped
                }
                result = self.tick(out) => {
                    result?;
                    MonitorState::Running
                }
            };
        }
        self.state = state;

        self.renderer.goodbye(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GpuError;
    use crate::models::{
        CoreInfo, CpuInfo, DiskInfo, GpuInfo, MemoryInfo, MemoryUsage, NetworkInfo, Snapshot,
    };
    use crate::renderer::widgets::build_tables;
    use crate::utils::format::Status;
    use chrono::TimeZone;
    use std::time::Instant;
    use tokio::sync::oneshot;

    const GIB: u64 = 1024 * 1024 * 1024;

    struct StubProvider {
        gpus: fn() -> Result<Vec<GpuInfo>, GpuError>,
        cpu_fails: bool,
    }

    impl StubProvider {
        fn new() -> Self {
            Self {
                gpus: || Err(GpuError::Unavailable),
                cpu_fails: false,
            }
        }
    }

    impl MetricsProvider for StubProvider {
        fn host_info(&mut self) -> Result<HostInfo, MonitorError> {
            Ok(HostInfo {
                os_name: "Linux".to_string(),
                processor: "Stub CPU".to_string(),
                boot_time: Local.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
            })
        }

        async fn cpu(&mut self) -> Result<CpuInfo, MonitorError> {
            if self.cpu_fails {
                return Err(MonitorError::collect("cpu", "stub failure"));
            }
            Ok(CpuInfo {
                cores: vec![
                    CoreInfo {
                        usage: 45.0,
                        temperature: Some(50.0),
                    },
                    CoreInfo {
                        usage: 95.0,
                        temperature: None,
                    },
                ],
                frequency: 3600,
            })
        }

        fn memory(&mut self) -> Result<MemoryInfo, MonitorError> {
            Ok(MemoryInfo {
                ram: MemoryUsage::new(8 * GIB, 16 * GIB),
                swap: MemoryUsage::new(0, 2 * GIB),
            })
        }

        fn disks(&mut self) -> Vec<DiskInfo> {
            vec![DiskInfo {
                device: "/dev/nvme0n1p2".to_string(),
                mount_point: "/".to_string(),
                used: 900 * GIB,
                total: 1000 * GIB,
            }]
        }

        fn network(&mut self) -> Result<NetworkInfo, MonitorError> {
            Ok(NetworkInfo {
                bytes_sent: 1536,
                bytes_recv: GIB,
                packets_sent: 10,
                packets_recv: 20,
            })
        }

        async fn gpus(&mut self) -> Result<Vec<GpuInfo>, GpuError> {
            (self.gpus)()
        }
    }

    fn statuses(snapshot: &Snapshot, title: &str) -> Vec<Vec<Status>> {
        build_tables(snapshot)
            .into_iter()
            .find(|table| table.title == title)
            .map(|table| {
                table
                    .rows
                    .iter()
                    .map(|row| row.iter().filter_map(|cell| cell.status()).collect())
                    .collect()
            })
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_cycle_classifies_readings() {
        let mut provider = StubProvider::new();
        let snapshot = Collector::new().snapshot(&mut provider).await.unwrap();

        assert!(snapshot.gpus.is_empty());
        assert_eq!(
            statuses(&snapshot, "Memory Information"),
            vec![vec![Status::Normal, Status::Normal]]
        );
        // core 0: usage and temperature, core 1: usage only
        assert_eq!(
            statuses(&snapshot, "CPU Information"),
            vec![vec![Status::Normal, Status::Normal], vec![Status::Warning]]
        );
        assert_eq!(
            statuses(&snapshot, "Disk Information"),
            vec![vec![Status::Warning]]
        );
    }

    #[tokio::test]
    async fn test_cycle_output_without_gpu() {
        let mut provider = StubProvider::new();
        let host = provider.host_info().unwrap();
        let snapshot = Collector::new().snapshot(&mut provider).await.unwrap();
        let now = Local.with_ymd_and_hms(2026, 1, 1, 0, 0, 30).unwrap();

        let mut out = Vec::new();
        render_cycle(&Renderer::plain(), &mut out, &host, &snapshot, now).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(!output.contains("GPU Information"));
        assert!(output.contains("=== CPU Information ==="));
        assert!(output.contains("| Core 1 | 95.0% | 3600.00MHz | N/A"));
        assert!(output.contains("| 50.0%     | 8.00GB   | 16.00GB   |"));
        assert!(output.contains("| /dev/nvme0n1p2 | / "));
        assert!(output.contains("System Uptime: 30s"));
        assert!(output.contains("Last updated: 2026-01-01 00:00:30"));
    }

    #[tokio::test]
    async fn test_gpu_failure_degrades_to_empty() {
        let mut provider = StubProvider::new();
        provider.gpus = || Err(GpuError::Query("exit status 9".to_string()));
        let mut collector = Collector::new();
        for _ in 0..3 {
            let snapshot = collector.snapshot(&mut provider).await.unwrap();
            assert!(snapshot.gpus.is_empty());
            assert_eq!(snapshot.disks.len(), 1);
        }
    }

    #[tokio::test]
    async fn test_gpu_section_rendered_when_present() {
        let mut provider = StubProvider::new();
        provider.gpus = || {
            Ok(vec![GpuInfo {
                name: "Tesla T4".to_string(),
                load: Some(99.0),
                temperature: Some(60.0),
                memory_used: 100,
                memory_total: 15360,
                driver: "535.129.03".to_string(),
            }])
        };
        let snapshot = Collector::new().snapshot(&mut provider).await.unwrap();
        assert_eq!(
            statuses(&snapshot, "GPU Information"),
            vec![vec![Status::Warning, Status::Normal]]
        );
    }

    #[tokio::test]
    async fn test_shutdown_during_wait_is_prompt() {
        let mut monitor = Monitor::new(StubProvider::new(), Renderer::plain()).unwrap();
        assert_eq!(monitor.state(), MonitorState::Running);

        let (tx, rx) = oneshot::channel::<()>();
        let stopper = async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            let _ = tx.send(());
            Instant::now()
        };

        let mut out = Vec::new();
        let (result, sent_at) = tokio::join!(
            monitor.run(&mut out, async {
                let _ = rx.await;
                Ok(())
            }),
            stopper
        );
        result.unwrap();

        assert!(sent_at.elapsed() < Duration::from_millis(100));
        assert_eq!(monitor.state(), MonitorState::Stopped);

        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.matches("=== CPU Information ===").count(), 1);
        assert!(output.ends_with("Monitoring stopped.\n"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_refreshes_every_interval() {
        let mut monitor = Monitor::new(StubProvider::new(), Renderer::plain()).unwrap();

        let mut out = Vec::new();
        let shutdown = async {
            tokio::time::sleep(REFRESH_INTERVAL * 2 + Duration::from_secs(1)).await;
            Ok(())
        };
        monitor.run(&mut out, shutdown).await.unwrap();

        // cycles at 0s, 2s and 4s, stopped at 5s
        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.matches("=== CPU Information ===").count(), 3);
    }

    #[tokio::test]
    async fn test_collection_failure_ends_loop() {
        let mut provider = StubProvider::new();
        provider.cpu_fails = true;
        let mut monitor = Monitor::new(provider, Renderer::plain()).unwrap();

        let mut out = Vec::new();
        let result = monitor.run(&mut out, std::future::pending()).await;
        assert!(matches!(result, Err(MonitorError::Collect { metric: "cpu", .. })));
        assert_eq!(monitor.state(), MonitorState::Running);
    }

    #[tokio::test]
    async fn test_failed_shutdown_listener_is_an_error() {
        let mut monitor = Monitor::new(StubProvider::new(), Renderer::plain()).unwrap();

        let mut out = Vec::new();
        let shutdown = async { Err(io::Error::new(io::ErrorKind::Other, "no signal handler")) };
        let result = monitor.run(&mut out, shutdown).await;

        assert!(matches!(result, Err(MonitorError::Signal(_))));
        assert_eq!(monitor.state(), MonitorState::Running);
        let output = String::from_utf8(out).unwrap();
        assert!(!output.contains("Monitoring stopped."));
    }
}
