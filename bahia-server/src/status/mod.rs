//! Live service status.
//!
//! For a displayed itinerary, where is the train right now? Purely a
//! function of the clock and the itinerary's departure/arrival times:
//! recomputing with the same `now` always yields the same answer, and
//! nothing external ever drives a transition.

mod clock;
mod ticker;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::TimetableTime;

pub use clock::{Clock, FixedClock, SystemClock};
pub use ticker::{STATUS_REFRESH_INTERVAL, StatusTicker};

/// Where a service is relative to `now`.
///
/// Transitions are one-directional and time-driven:
/// `Upcoming` → `InTransit` → `Passed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ServiceState {
    /// Has not departed yet.
    Upcoming,
    /// Between departure and arrival.
    InTransit,
    /// Arrived.
    Passed,
}

/// Status snapshot for one service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStatus {
    /// Current state.
    pub state: ServiceState,
    /// 0 while upcoming, 100 once passed, linear in between.
    pub progress_percent: f64,
}

/// Derive the live status of a service at `now`.
///
/// Departure and arrival are interpreted on `now`'s calendar day. An
/// arrival that is clock-earlier than the departure falls on the next
/// day (overnight trips), the same rule the query engine applies to
/// durations.
///
/// # Examples
///
/// ```
/// use bahia_server::domain::TimetableTime;
/// use bahia_server::status::{ServiceState, derive_status};
/// use chrono::NaiveDate;
///
/// let dep = TimetableTime::parse("08:00").unwrap();
/// let arr = TimetableTime::parse("08:20").unwrap();
/// let now = NaiveDate::from_ymd_opt(2025, 6, 1)
///     .unwrap()
///     .and_hms_opt(8, 10, 0)
///     .unwrap();
///
/// let status = derive_status(dep, arr, now);
/// assert_eq!(status.state, ServiceState::InTransit);
/// assert_eq!(status.progress_percent, 50.0);
/// ```
pub fn derive_status(
    departure: TimetableTime,
    arrival: TimetableTime,
    now: NaiveDateTime,
) -> LiveStatus {
    let today = now.date();
    let departs_at = departure.on_date(today);
    let mut arrives_at = arrival.on_date(today);

    // Overnight guard: arrival clock-before-departure means next day
    if arrives_at < departs_at {
        arrives_at += chrono::Duration::days(1);
    }

    if now < departs_at {
        return LiveStatus {
            state: ServiceState::Upcoming,
            progress_percent: 0.0,
        };
    }

    if now > arrives_at {
        return LiveStatus {
            state: ServiceState::Passed,
            progress_percent: 100.0,
        };
    }

    let total = (arrives_at - departs_at).num_seconds();
    let elapsed = (now - departs_at).num_seconds();
    let progress_percent = if total == 0 {
        // Departure and arrival coincide; the window is a point
        100.0
    } else {
        elapsed as f64 / total as f64 * 100.0
    };

    LiveStatus {
        state: ServiceState::InTransit,
        progress_percent,
    }
}
