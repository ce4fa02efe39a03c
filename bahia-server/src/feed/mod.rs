//! Feed ingestion.
//!
//! Turns the upstream tabular GTFS feed (`trips.txt`, `stop_times.txt`)
//! into the published schedule dataset. Parsing and normalization are
//! pure functions over readers and record slices, so the batch job's
//! file handling stays at the edge and tests run against inline
//! fixtures.

mod dataset;
mod error;
mod normalize;
mod records;

pub use dataset::Dataset;
pub use error::{DatasetError, FeedError};
pub use normalize::normalize;
pub use records::{StopTimeRecord, TripRecord, read_stop_times, read_trips};
