//! Domain types for the schedule service.
//!
//! These types represent validated schedule data. All of them enforce
//! their invariants at construction time, so code that receives a
//! `StationId` or `TimetableTime` can trust its validity.

mod line;
mod service;
mod station;
mod time;

pub use line::{BRANCH_MARKER, Line};
pub use service::{Service, Stop};
pub use station::{InvalidStationId, StationId};
pub use time::{TimeError, TimetableTime};
