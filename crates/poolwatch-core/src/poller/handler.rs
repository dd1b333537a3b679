use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::errors::PoolwatchError;
use crate::status::client::StatusClient;
use crate::status::types::MetricsSnapshot;

/// Repeating snapshot producer for the dashboard.
///
/// Fires once immediately on start, then on a fixed period. There is no
/// backoff, no jitter, and no pause-on-failure: every tick is unconditional
/// regardless of prior outcome, and the poll cadence itself is the only
/// retry policy.
pub struct Poller {
    client: Arc<StatusClient>,
    interval: Duration,
}

impl Poller {
    /// `poll_interval_ms` must be greater than zero (enforced by config
    /// validation).
    pub fn new(client: StatusClient, poll_interval_ms: u64) -> Self {
        Self {
            client: Arc::new(client),
            interval: Duration::from_millis(poll_interval_ms),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Produce one snapshot, absorbing any failure into the zero snapshot.
    ///
    /// Transport failures, non-2xx responses, and malformed bodies are all
    /// collapsed into a single logged "fetch failed" outcome; the caller
    /// always gets something to render.
    pub async fn fetch_snapshot(&self) -> MetricsSnapshot {
        fetch_or_zero(&self.client).await
    }

    /// Start the poll loop: an immediate first tick, then one tick per
    /// interval, each delivering a snapshot to `on_tick`.
    ///
    /// Ticks are scheduled from the previous tick's start, not its
    /// completion; each fetch runs on its own task, so a fetch slower than
    /// the interval yields overlapping in-flight requests and the last one
    /// to complete wins. Dropping the returned handle stops the loop.
    pub fn start<F>(&self, on_tick: F) -> PollerHandle
    where
        F: Fn(MetricsSnapshot) + Send + Sync + 'static,
    {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let client = Arc::clone(&self.client);
        let period = self.interval;
        let on_tick = Arc::new(on_tick);

        info!(
            event = "core.poller.started",
            endpoint = client.endpoint(),
            interval_ms = period.as_millis() as u64
        );

        let join = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let client = Arc::clone(&client);
                        let on_tick = Arc::clone(&on_tick);
                        tokio::spawn(async move {
                            let snapshot = fetch_or_zero(&client).await;
                            on_tick(snapshot);
                        });
                    }
                    changed = shutdown_rx.changed() => {
                        if changed.is_err() || *shutdown_rx.borrow() {
                            break;
                        }
                    }
                }
            }
            info!(event = "core.poller.stopped");
        });

        PollerHandle {
            shutdown: shutdown_tx,
            join,
        }
    }
}

/// Absorb every fetch failure into the zero snapshot, logging the failure
/// to the diagnostic channel.
async fn fetch_or_zero(client: &StatusClient) -> MetricsSnapshot {
    match client.fetch_status().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!(
                event = "core.poller.fetch_failed",
                endpoint = client.endpoint(),
                error = %e,
                error_code = e.error_code()
            );
            MetricsSnapshot::default()
        }
    }
}

/// Cancellation handle for a running poll loop.
///
/// In-flight fetches are detached on stop rather than awaited; their
/// results are discarded.
pub struct PollerHandle {
    shutdown: watch::Sender<bool>,
    join: JoinHandle<()>,
}

impl PollerHandle {
    /// Stop the poll loop and wait for it to wind down.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.join.await;
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }
}
