use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use roster_store::RecordStore;
use tower_http::trace::TraceLayer;

use crate::handler;

/// HTTP endpoint paths.
pub mod endpoints {
    pub const HEALTH: &str = "/health";
    pub const INFO: &str = "/info";
    pub const RECORDS: &str = "/records";
    pub const RECORD: &str = "/records/:id";
}

/// Shared handler state: a handle to the one record store.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
}

/// Build the axum router with all Roster endpoints.
pub fn build_router(store: Arc<dyn RecordStore>) -> Router {
    Router::new()
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(endpoints::INFO, get(handler::info_handler))
        .route(
            endpoints::RECORDS,
            get(handler::list_records).post(handler::create_record),
        )
        .route(
            endpoints::RECORD,
            get(handler::get_record)
                .put(handler::update_record)
                .delete(handler::delete_record),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { store })
}
