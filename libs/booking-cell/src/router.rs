// libs/booking-cell/src/router.rs
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_store::AppState;

use crate::handlers;

pub fn booking_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/available-slots", get(handlers::available_slots))
        .route("/appointment", post(handlers::create_appointment))
        .with_state(state)
}
