//! Periodic status recomputation.
//!
//! A displayed itinerary keeps its status fresh by registering a
//! ticker: an owned task that rederives the status on an interval and
//! hands each snapshot to a callback. Registrations are independent of
//! each other and cancelable at any point; each tick is a pure
//! recomputation, so cancellation has no side effects to undo.

use std::time::Duration;

use tokio::task::JoinHandle;

use crate::domain::TimetableTime;

use super::{Clock, LiveStatus, derive_status};

/// How often a registered status is recomputed.
pub const STATUS_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Handle to a periodic status recomputation.
///
/// The task stops when [`StatusTicker::cancel`] is called or the handle
/// is dropped.
#[derive(Debug)]
pub struct StatusTicker {
    handle: JoinHandle<()>,
}

impl StatusTicker {
    /// Register a periodic recomputation for one itinerary.
    ///
    /// The first tick fires immediately, then every `period`. Each tick
    /// reads the clock, derives the status and passes it to
    /// `on_update`.
    pub fn register<C, F>(
        clock: C,
        departure: TimetableTime,
        arrival: TimetableTime,
        period: Duration,
        mut on_update: F,
    ) -> Self
    where
        C: Clock + 'static,
        F: FnMut(LiveStatus) + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                on_update(derive_status(departure, arrival, clock.now()));
            }
        });

        Self { handle }
    }

    /// Stop the recomputation.
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for StatusTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
