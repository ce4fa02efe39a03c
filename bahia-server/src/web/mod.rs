//! HTTP surface.
//!
//! A thin JSON API over the read-only schedule index, plus static
//! service of the published dataset directory. The graphical front end
//! lives elsewhere; nothing here renders HTML.

mod dto;
mod routes;
mod state;

pub use dto::{
    SearchRequest, SearchResponse, ServiceResult, StationResult, StationsResponse, StopResult,
};
pub use routes::create_router;
pub use state::AppState;
