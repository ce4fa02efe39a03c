//! Raw feed record parsing.
//!
//! The feed tables are comma-delimited with a header row and optionally
//! quoted values. Parsing is best-effort: a row that fails to
//! deserialize is logged and skipped, while file-level failures
//! (I/O, broken framing) are errors.

use std::io::Read;

use serde::Deserialize;
use tracing::{debug, warn};

use super::FeedError;

/// A row of `trips.txt`. Extra columns are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TripRecord {
    /// Trip identifier, referenced by stop-time rows.
    pub trip_id: String,
    /// Route identifier; carries the line's branch marker.
    pub route_id: String,
}

/// A row of `stop_times.txt`. Extra columns are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StopTimeRecord {
    /// Trip this stop belongs to.
    pub trip_id: String,
    /// Stop identifier; matched against the station registry.
    pub stop_id: String,
    /// Departure time as "HH:MM:SS" (may exceed 24:00).
    pub departure_time: String,
    /// Order of this stop within the trip. Increasing, not necessarily
    /// consecutive.
    pub stop_sequence: u32,
}

/// Read `trips.txt` rows from a reader.
pub fn read_trips<R: Read>(reader: R) -> Result<Vec<TripRecord>, FeedError> {
    read_table(reader, "trips")
}

/// Read `stop_times.txt` rows from a reader.
pub fn read_stop_times<R: Read>(reader: R) -> Result<Vec<StopTimeRecord>, FeedError> {
    read_table(reader, "stop_times")
}

/// Deserialize all rows of one table, skipping rows that don't fit the
/// record shape.
fn read_table<R, T>(reader: R, table: &str) -> Result<Vec<T>, FeedError>
where
    R: Read,
    T: for<'de> Deserialize<'de>,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for result in csv_reader.deserialize() {
        match result {
            Ok(row) => rows.push(row),
            Err(err) if matches!(err.kind(), csv::ErrorKind::Deserialize { .. }) => {
                skipped += 1;
                debug!(table, %err, "skipping malformed feed row");
            }
            Err(err) => return Err(err.into()),
        }
    }

    if skipped > 0 {
        warn!(table, skipped, kept = rows.len(), "feed rows failed to parse");
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_trips_basic() {
        let csv = "\
route_id,service_id,trip_id
20C1,LAB,T1
20C1A,LAB,T2
";
        let trips = read_trips(csv.as_bytes()).unwrap();
        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].trip_id, "T1");
        assert_eq!(trips[0].route_id, "20C1");
        assert_eq!(trips[1].route_id, "20C1A");
    }

    #[test]
    fn read_stop_times_basic() {
        let csv = "\
trip_id,arrival_time,departure_time,stop_id,stop_sequence
T1,08:00:00,08:00:30,51405,1
T1,08:03:00,08:03:00,51404,2
";
        let rows = read_stop_times(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].trip_id, "T1");
        assert_eq!(rows[0].stop_id, "51405");
        assert_eq!(rows[0].departure_time, "08:00:30");
        assert_eq!(rows[0].stop_sequence, 1);
    }

    #[test]
    fn quoted_values_are_unwrapped() {
        let csv = "\
route_id,trip_id
\"20C1\",\"T1\"
";
        let trips = read_trips(csv.as_bytes()).unwrap();
        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].route_id, "20C1");
        assert_eq!(trips[0].trip_id, "T1");
    }

    #[test]
    fn extra_columns_are_ignored() {
        let csv = "\
trip_id,departure_time,stop_id,stop_sequence,pickup_type,drop_off_type
T1,08:00:00,51405,1,0,0
";
        let rows = read_stop_times(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn malformed_rows_are_skipped() {
        // Second row has a non-numeric stop_sequence, third is truncated
        let csv = "\
trip_id,departure_time,stop_id,stop_sequence
T1,08:00:00,51405,1
T1,08:03:00,51404,abc
T1,08:05:00
T1,08:07:00,51403,3
";
        let rows = read_stop_times(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].stop_sequence, 1);
        assert_eq!(rows[1].stop_sequence, 3);
    }

    #[test]
    fn empty_table_is_empty_not_error() {
        let csv = "trip_id,departure_time,stop_id,stop_sequence\n";
        let rows = read_stop_times(csv.as_bytes()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn missing_required_column_skips_all_rows() {
        // No stop_id column at all: every row fails the record shape
        let csv = "\
trip_id,departure_time,stop_sequence
T1,08:00:00,1
T1,08:03:00,2
";
        let rows = read_stop_times(csv.as_bytes()).unwrap();
        assert!(rows.is_empty());
    }
}
