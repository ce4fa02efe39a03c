//! Shared application state.

use std::sync::Arc;

use crate::index::ScheduleIndex;
use crate::registry::StationRegistry;

/// State shared by all request handlers.
///
/// Both parts are read-only after startup, so cloning per request is a
/// pair of `Arc` bumps and handlers need no locking.
#[derive(Clone)]
pub struct AppState {
    /// The schedule index built from the published dataset.
    pub index: Arc<ScheduleIndex>,
    /// The station registry.
    pub registry: Arc<StationRegistry>,
}

impl AppState {
    /// Creates the application state.
    pub fn new(index: ScheduleIndex, registry: StationRegistry) -> Self {
        Self {
            index: Arc::new(index),
            registry: Arc::new(registry),
        }
    }
}
