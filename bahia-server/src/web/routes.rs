//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use chrono::{Local, NaiveDate};
use tower_http::services::ServeDir;

use crate::domain::StationId;
use crate::query::find_schedules;
use crate::status::{Clock, SystemClock, derive_status};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// `data_dir` is the directory holding the published dataset, served
/// as-is under `/data` for clients that read the document directly.
pub fn create_router(state: AppState, data_dir: &str) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .route("/search", get(search))
        .nest_service("/data", ServeDir::new(data_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List the station registry in line order.
async fn list_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    let stations = state
        .registry
        .stations()
        .iter()
        .map(StationResult::from)
        .collect();

    Json(StationsResponse { stations })
}

/// Search schedules between two stations.
///
/// Unknown or malformed station codes yield an empty service list, the
/// same as a pair with no service. A malformed `date` falls back to
/// today; the date is reserved for calendar filtering and does not yet
/// affect results.
async fn search(
    State(state): State<AppState>,
    Query(req): Query<SearchRequest>,
) -> Json<SearchResponse> {
    let (Ok(origin), Ok(destination)) = (
        StationId::parse(&req.origin),
        StationId::parse(&req.destination),
    ) else {
        return Json(SearchResponse { services: vec![] });
    };

    let date = req
        .date
        .as_deref()
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .unwrap_or_else(|| Local::now().date_naive());

    let itineraries = find_schedules(&state.index, &state.registry, origin, destination, date);

    let now = SystemClock.now();
    let services = itineraries
        .into_iter()
        .map(|itinerary| {
            let status = derive_status(itinerary.departure, itinerary.arrival, now);
            ServiceResult::new(itinerary, status)
        })
        .collect();

    Json(SearchResponse { services })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Line, Service, Stop, TimetableTime};
    use crate::index::ScheduleIndex;
    use crate::registry::StationRegistry;

    fn stop(id: &str, t: &str) -> Stop {
        Stop {
            station: StationId::parse(id).unwrap(),
            time: TimetableTime::parse(t).unwrap(),
        }
    }

    fn state() -> AppState {
        let index = ScheduleIndex::new(vec![Service {
            id: "T1".into(),
            line: Line::C1,
            stops: vec![stop("51405", "08:00"), stop("51201", "08:45")],
        }]);
        AppState::new(index, StationRegistry::bahia())
    }

    fn request(origin: &str, destination: &str) -> SearchRequest {
        SearchRequest {
            origin: origin.into(),
            destination: destination.into(),
            date: None,
        }
    }

    #[tokio::test]
    async fn search_returns_qualifying_services() {
        let response = search(State(state()), Query(request("51405", "51201"))).await;

        assert_eq!(response.0.services.len(), 1);
        let service = &response.0.services[0];
        assert_eq!(service.id, "T1");
        assert_eq!(service.departure_time, "08:00");
        assert_eq!(service.arrival_time, "08:45");
        assert_eq!(service.duration_minutes, 45);
        assert_eq!(service.stops.len(), 2);
    }

    #[tokio::test]
    async fn search_wrong_direction_is_empty() {
        let response = search(State(state()), Query(request("51201", "51405"))).await;
        assert!(response.0.services.is_empty());
    }

    #[tokio::test]
    async fn search_unknown_station_is_empty_not_error() {
        let response = search(State(state()), Query(request("99999", "51201"))).await;
        assert!(response.0.services.is_empty());

        let response = search(State(state()), Query(request("garbage", "51201"))).await;
        assert!(response.0.services.is_empty());
    }

    #[tokio::test]
    async fn search_accepts_explicit_date() {
        let response = search(
            State(state()),
            Query(SearchRequest {
                origin: "51405".into(),
                destination: "51201".into(),
                date: Some("2025-06-01".into()),
            }),
        )
        .await;
        assert_eq!(response.0.services.len(), 1);
    }

    #[tokio::test]
    async fn stations_listed_in_registry_order() {
        let response = list_stations(State(state())).await;

        let stations = &response.0.stations;
        assert_eq!(stations.len(), 14);
        assert_eq!(stations[0].name, "Cádiz");
        assert_eq!(stations[13].name, "Campus de Puerto Real");
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }
}
