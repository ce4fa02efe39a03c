//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Line;
use crate::query::Itinerary;
use crate::registry::Station;
use crate::status::LiveStatus;

/// Request to search schedules between two stations.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Origin station code
    pub origin: String,

    /// Destination station code
    pub destination: String,

    /// Travel date as YYYY-MM-DD (defaults to today)
    pub date: Option<String>,
}

/// A stop within a search result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopResult {
    /// Station code
    pub station_id: String,

    /// Station display name
    pub station_name: String,

    /// Departure time at this station, "HH:MM"
    pub time: String,
}

/// One qualifying service in search results.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResult {
    /// Trip id
    pub id: String,

    /// Line label ("C1" or "C1a")
    pub line: Line,

    /// Departure time at the origin, "HH:MM"
    pub departure_time: String,

    /// Arrival time at the destination, "HH:MM"
    pub arrival_time: String,

    /// Travel time in minutes
    pub duration_minutes: u32,

    /// Stops from origin to destination, inclusive
    pub stops: Vec<StopResult>,

    /// Live status snapshot at response time
    pub status: LiveStatus,
}

impl ServiceResult {
    /// Build a result from an itinerary and its status snapshot.
    pub fn new(itinerary: Itinerary, status: LiveStatus) -> Self {
        Self {
            id: itinerary.service_id,
            line: itinerary.line,
            departure_time: itinerary.departure.to_string(),
            arrival_time: itinerary.arrival.to_string(),
            duration_minutes: itinerary.duration_minutes,
            stops: itinerary
                .stops
                .into_iter()
                .map(|stop| StopResult {
                    station_id: stop.station.to_string(),
                    station_name: stop.name,
                    time: stop.time.to_string(),
                })
                .collect(),
            status,
        }
    }
}

/// Response for schedule search.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Qualifying services, ordered by departure time
    pub services: Vec<ServiceResult>,
}

/// A station in the registry listing.
#[derive(Debug, Serialize)]
pub struct StationResult {
    /// Station code
    pub id: String,

    /// Display name
    pub name: String,
}

impl From<&Station> for StationResult {
    fn from(station: &Station) -> Self {
        Self {
            id: station.id.to_string(),
            name: station.name.clone(),
        }
    }
}

/// Response for the station listing.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    /// Stations in registry order
    pub stations: Vec<StationResult>,
}
