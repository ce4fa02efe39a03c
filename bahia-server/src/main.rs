use std::net::SocketAddr;
use std::path::Path;

use tracing_subscriber::EnvFilter;

use bahia_server::feed::Dataset;
use bahia_server::index::ScheduleIndex;
use bahia_server::registry::StationRegistry;
use bahia_server::web::{AppState, create_router};

/// Default location of the published dataset.
const DEFAULT_DATASET: &str = "data/schedules_cadiz.json";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let dataset_path =
        std::env::var("SCHEDULE_DATA").unwrap_or_else(|_| DEFAULT_DATASET.to_string());

    // Fail fast: a server without schedules has nothing to answer
    let dataset =
        Dataset::load(Path::new(&dataset_path)).expect("failed to load schedule dataset");
    tracing::info!(
        path = %dataset_path,
        last_update = %dataset.last_update,
        services = dataset.services.len(),
        "loaded schedule dataset"
    );

    let data_dir = Path::new(&dataset_path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| ".".to_string());

    let registry = StationRegistry::bahia();
    let state = AppState::new(ScheduleIndex::from(dataset), registry);
    let app = create_router(state, &data_dir);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    tracing::info!(%addr, "bahia-server listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app).await.expect("server error");
}
