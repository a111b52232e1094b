use std::sync::Arc;

use axum::Router;
use tower_http::services::ServeDir;

use admin_cell::router::admin_routes;
use booking_cell::router::booking_routes;
use shared_store::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // Anything the API does not claim falls through to the static frontend
    // (index.html at `/`, assets by name, 404 when absent).
    let assets = ServeDir::new(&state.config.public_dir);

    Router::new()
        .merge(booking_routes(state.clone()))
        .merge(admin_routes(state))
        .fallback_service(assets)
}
