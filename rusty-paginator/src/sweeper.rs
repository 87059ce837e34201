//! Background eviction of idle paginator sessions.
//!
//! Eviction only drops the registry entry. The message that was sent for the
//! session keeps its buttons; a later press finds no session and clears them.

use std::time::Duration;

use tokio::{
    sync::oneshot,
    task::JoinHandle,
    time::{Instant, MissedTickBehavior},
};
use tracing::{debug, warn};

use crate::registry::Registry;

/// Shortest interval the background loop will tick at.
pub const MIN_CLEANUP_INTERVAL: Duration = Duration::from_secs(1);

/// Evicts sessions idle for longer than `timeout`.
#[derive(Clone)]
pub struct Sweeper {
    registry: Registry,
    timeout: Duration,
}

impl Sweeper {
    pub fn new(registry: Registry, timeout: Duration) -> Self {
        Self { registry, timeout }
    }

    /// Run one sweep at `now` and return the number of evicted sessions.
    ///
    /// Each session is judged by its own expiry mode: last accepted press or
    /// creation time.
    pub async fn sweep(&self, now: Instant) -> usize {
        let timeout = self.timeout;
        let evicted = self
            .registry
            .retain(|session| !session.is_idle(now, timeout))
            .await;

        for session_id in &evicted {
            debug!(%session_id, "evicted idle paginator session");
        }

        evicted.len()
    }
}

/// Handle to a running sweeper loop.
///
/// Dropping the handle also stops the loop.
#[must_use = "dropping the handle stops the sweeper"]
pub struct SweeperHandle {
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl SweeperHandle {
    /// Stop the loop and wait for it to exit.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(());
        if let Err(source) = self.task.await {
            warn!(?source, "paginator sweeper task ended abnormally");
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Spawn a loop sweeping `registry` every `interval`.
///
/// Must be called from within a tokio runtime.
pub fn spawn_sweeper(registry: Registry, timeout: Duration, interval: Duration) -> SweeperHandle {
    let sweeper = Sweeper::new(registry, timeout);
    let period = interval.max(MIN_CLEANUP_INTERVAL);
    let (shutdown, mut shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                // Fires on an explicit shutdown and when the handle is dropped.
                _ = &mut shutdown_rx => break,
                now = ticker.tick() => {
                    let evicted = sweeper.sweep(now).await;
                    if evicted > 0 {
                        debug!(evicted, "paginator sweep finished");
                    }
                }
            }
        }

        debug!("paginator sweeper stopped");
    });

    SweeperHandle { shutdown, task }
}
