//! Feed normalization.
//!
//! Reduces raw stop-time rows to per-trip ordered stop sequences
//! restricted to the registry's station set. Pure: the same records and
//! registry always produce the same services.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::domain::{Line, Service, StationId, Stop, TimetableTime};
use crate::registry::StationRegistry;

use super::records::{StopTimeRecord, TripRecord};

/// Normalize raw feed records into zone services.
///
/// Per trip: keep only stops whose id is in the registry, sort by
/// `stop_sequence` ascending (ties keep original row order), truncate
/// times to minute precision, and drop the trip entirely if fewer than
/// 2 stops remain, since a single call in the zone is not a usable
/// segment. The line label comes from the trip's route id; a trip with
/// no matching trip record defaults to the main line.
///
/// Rows with an unparseable stop id or time are excluded without
/// failing the run.
pub fn normalize(
    trips: &[TripRecord],
    stop_times: &[StopTimeRecord],
    registry: &StationRegistry,
) -> Vec<Service> {
    let routes: HashMap<&str, &str> = trips
        .iter()
        .map(|t| (t.trip_id.as_str(), t.route_id.as_str()))
        .collect();

    // Group qualifying stops by trip, preserving original row order so
    // the later sort can tie-break on it.
    let mut grouped: HashMap<&str, Vec<(u32, Stop)>> = HashMap::new();
    let mut excluded = 0usize;

    for row in stop_times {
        let station = match StationId::parse(&row.stop_id) {
            Ok(id) => id,
            Err(err) => {
                excluded += 1;
                debug!(trip = %row.trip_id, stop = %row.stop_id, %err, "excluding row");
                continue;
            }
        };

        if !registry.contains(station) {
            continue;
        }

        let time = match TimetableTime::parse(&row.departure_time) {
            Ok(t) => t,
            Err(err) => {
                excluded += 1;
                debug!(trip = %row.trip_id, time = %row.departure_time, %err, "excluding row");
                continue;
            }
        };

        grouped
            .entry(row.trip_id.as_str())
            .or_default()
            .push((row.stop_sequence, Stop { station, time }));
    }

    let mut services: Vec<Service> = grouped
        .into_iter()
        .filter_map(|(trip_id, mut stops)| {
            stops.sort_by_key(|&(seq, _)| seq);

            if stops.len() < 2 {
                return None;
            }

            let line = routes
                .get(trip_id)
                .map(|route_id| Line::from_route_id(route_id))
                .unwrap_or(Line::C1);

            Some(Service {
                id: trip_id.to_string(),
                line,
                stops: stops.into_iter().map(|(_, stop)| stop).collect(),
            })
        })
        .collect();

    // Deterministic output: grouping order is arbitrary
    services.sort_by(|a, b| a.id.cmp(&b.id));

    info!(
        services = services.len(),
        excluded_rows = excluded,
        "normalized feed"
    );

    services
}
