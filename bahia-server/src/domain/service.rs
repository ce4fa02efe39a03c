//! Scheduled service types.
//!
//! A `Service` is one scheduled run of a train: a trip id, the line it
//! runs on, and its ordered stops within the Bahía zone. Services are
//! built once by feed normalization and never mutated afterwards.

use serde::{Deserialize, Serialize};

use super::{Line, StationId, TimetableTime};

/// One stop of a service: a station and the departure time there.
///
/// Serialized in the compact dataset shape `{"id": "51405", "t": "08:15"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    /// Station served.
    #[serde(rename = "id")]
    pub station: StationId,
    /// Departure time at this station, minute precision.
    #[serde(rename = "t")]
    pub time: TimetableTime,
}

/// A scheduled trip with its ordered stops.
///
/// Stops are in the trip's own running order, which is the only order
/// that determines direction: a Cádiz-bound and a Jerez-bound trip
/// visit the same stations in opposite sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Trip id from the upstream feed.
    pub id: String,
    /// Line label derived from the trip's route id.
    pub line: Line,
    /// Ordered stops within the zone. At least 2 after normalization.
    pub stops: Vec<Stop>,
}

impl Service {
    /// Position of a station within this trip's own stop order.
    ///
    /// Returns the first occurrence, or `None` if the trip does not
    /// call there.
    pub fn position_of(&self, station: StationId) -> Option<usize> {
        self.stops.iter().position(|s| s.station == station)
    }

    /// Departure time from the trip's first stop in the zone.
    pub fn departure(&self) -> Option<TimetableTime> {
        self.stops.first().map(|s| s.time)
    }

    /// Arrival time at the trip's last stop in the zone.
    pub fn arrival(&self) -> Option<TimetableTime> {
        self.stops.last().map(|s| s.time)
    }

    /// Returns the number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns true if there are no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    fn time(s: &str) -> TimetableTime {
        TimetableTime::parse(s).unwrap()
    }

    fn stop(id: &str, t: &str) -> Stop {
        Stop {
            station: station(id),
            time: time(t),
        }
    }

    fn make_service() -> Service {
        Service {
            id: "T123".into(),
            line: Line::C1,
            stops: vec![
                stop("51405", "08:00"),
                stop("51404", "08:03"),
                stop("51306", "08:12"),
                stop("51201", "08:40"),
            ],
        }
    }

    #[test]
    fn position_of_finds_first_occurrence() {
        let service = make_service();

        assert_eq!(service.position_of(station("51405")), Some(0));
        assert_eq!(service.position_of(station("51306")), Some(2));
        assert_eq!(service.position_of(station("51201")), Some(3));
        assert_eq!(service.position_of(station("99999")), None);
    }

    #[test]
    fn departure_and_arrival() {
        let service = make_service();

        assert_eq!(service.departure(), Some(time("08:00")));
        assert_eq!(service.arrival(), Some(time("08:40")));
    }

    #[test]
    fn empty_service() {
        let empty = Service {
            id: "T0".into(),
            line: Line::C1,
            stops: vec![],
        };

        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
        assert!(empty.departure().is_none());
        assert!(empty.arrival().is_none());
        assert!(empty.position_of(station("51405")).is_none());
    }

    #[test]
    fn serde_dataset_shape() {
        let service = Service {
            id: "T123".into(),
            line: Line::C1a,
            stops: vec![stop("51303", "09:10")],
        };

        let json = serde_json::to_value(&service).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "T123",
                "line": "C1a",
                "stops": [{"id": "51303", "t": "09:10"}]
            })
        );

        let back: Service = serde_json::from_value(json).unwrap();
        assert_eq!(back, service);
    }
}
