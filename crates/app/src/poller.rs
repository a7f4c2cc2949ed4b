//! Fixed-period driver for the [`StatusPoller`].
//!
//! The timer keeps its cadence regardless of how individual requests end.
//! Each tick runs as its own task, so a slow device can have several status
//! requests in flight at once. Stopping the driver cancels the timer and every
//! request still in flight, so nothing renders after teardown.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{Instant, MissedTickBehavior};

use crate::ports::{PanelApi, ReadoutView};
use crate::services::status_poller::StatusPoller;

/// Default period between two status requests.
pub const DEFAULT_POLL_PERIOD: Duration = Duration::from_millis(1000);

/// Handle to a running poll loop.
///
/// Dropping the handle stops the loop, same as calling [`stop`](Self::stop).
#[must_use = "dropping the handle stops the poller"]
pub struct PollerHandle {
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Stop the timer and cancel any request still in flight.
    pub fn stop(self) {
        drop(self);
    }

    /// Whether the poll loop is still scheduled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.task.abort();
        tracing::debug!("status poller stopped");
    }
}

/// Start polling on the current tokio runtime.
///
/// The first request goes out one `period` after the call, then every
/// `period` until the returned handle is stopped or dropped.
///
/// # Panics
///
/// Panics if `period` is zero, or when called outside a tokio runtime.
pub fn spawn_poller<A, V>(poller: Arc<StatusPoller<A, V>>, period: Duration) -> PollerHandle
where
    A: PanelApi + 'static,
    V: ReadoutView + 'static,
{
    assert!(!period.is_zero(), "poll period must be non-zero");
    tracing::info!(?period, "status poller started");
    PollerHandle {
        task: tokio::spawn(run(poller, period)),
    }
}

async fn run<A, V>(poller: Arc<StatusPoller<A, V>>, period: Duration)
where
    A: PanelApi + 'static,
    V: ReadoutView + 'static,
{
    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    // Owned by this task: aborting the loop drops the set, which aborts
    // every request that has not completed yet.
    let mut in_flight = JoinSet::new();

    loop {
        ticker.tick().await;
        while in_flight.try_join_next().is_some() {}

        let poller = Arc::clone(&poller);
        in_flight.spawn(async move {
            // Failures are logged by the poller and must not stop the cadence.
            let _ = poller.tick().await;
        });
    }
}
