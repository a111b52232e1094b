// libs/admin-cell/src/router.rs
use std::sync::Arc;

use axum::{routing::get, Router};

use shared_store::AppState;

use crate::handlers;

pub fn admin_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/appointments", get(handlers::list_appointments))
        .with_state(state)
}
