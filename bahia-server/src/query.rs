//! Point-to-point schedule queries.
//!
//! Given an origin and a destination station, find every trip that
//! serves both in that order and slice out the sub-itinerary between
//! them. Direction is decided per trip from the trip's own stop order;
//! registry order plays no part in it, which is what keeps opposite-
//! direction and branch trips classified correctly.

use chrono::NaiveDate;

use crate::domain::{Line, StationId, TimetableTime};
use crate::index::ScheduleIndex;
use crate::registry::StationRegistry;

/// One stop of a query result, with its display name resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryStop {
    /// Station served.
    pub station: StationId,
    /// Display name from the registry.
    pub name: String,
    /// Departure time at this station.
    pub time: TimetableTime,
}

/// A qualifying trip, sliced to the queried origin and destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    /// Trip id of the underlying service.
    pub service_id: String,
    /// Line the service runs on.
    pub line: Line,
    /// Departure time at the origin.
    pub departure: TimetableTime,
    /// Arrival time at the destination.
    pub arrival: TimetableTime,
    /// Travel time in minutes; clock-wrapped for overnight trips, so
    /// never negative.
    pub duration_minutes: u32,
    /// Stops from origin to destination, inclusive.
    pub stops: Vec<ItineraryStop>,
}

/// Find all services from `origin` to `destination`, ordered by
/// departure time.
///
/// An unknown origin or destination yields an empty result, not an
/// error: "no service for this pair" and "no such station" look the
/// same to a caller picking stations from the registry.
///
/// `date` is part of the contract for calendar filtering but is not yet
/// consulted; the feed currently publishes a single service day.
///
/// Pure and deterministic: identical inputs over an unchanged index
/// produce identical results.
pub fn find_schedules(
    index: &ScheduleIndex,
    registry: &StationRegistry,
    origin: StationId,
    destination: StationId,
    _date: NaiveDate,
) -> Vec<Itinerary> {
    if registry.position(origin).is_none() || registry.position(destination).is_none() {
        return Vec::new();
    }

    let mut results: Vec<Itinerary> = index
        .services()
        .iter()
        .filter_map(|service| {
            let from = service.position_of(origin)?;
            let to = service.position_of(destination)?;

            // Origin must precede destination in this trip's own order;
            // trips running the opposite way fail this test.
            if from >= to {
                return None;
            }

            let stops: Vec<ItineraryStop> = service.stops[from..=to]
                .iter()
                .map(|stop| ItineraryStop {
                    station: stop.station,
                    name: registry
                        .name(stop.station)
                        .unwrap_or("Unknown")
                        .to_string(),
                    time: stop.time,
                })
                .collect();

            let departure = stops[0].time;
            let arrival = stops[stops.len() - 1].time;

            Some(Itinerary {
                service_id: service.id.clone(),
                line: service.line,
                departure,
                arrival,
                duration_minutes: departure.minutes_until(arrival),
                stops,
            })
        })
        .collect();

    results.sort_by(|a, b| a.departure.cmp(&b.departure));
    results
}
