// libs/admin-cell/src/handlers.rs
use std::sync::Arc;

use axum::{extract::State, Json};
use axum_extra::TypedHeader;
use headers::{authorization::Basic, Authorization};

use shared_models::appointment::Appointment;
use shared_models::error::AppError;
use shared_store::AppState;

use crate::services::listing::ListingService;

/// `GET /appointments` — Basic-auth gated dump of every booking. A missing
/// header gets the same 401 challenge as a wrong pair, so browsers prompt
/// for credentials instead of showing a bare error.
pub async fn list_appointments(
    State(state): State<Arc<AppState>>,
    auth: Option<TypedHeader<Authorization<Basic>>>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let TypedHeader(auth) =
        auth.ok_or_else(|| AppError::Auth("credentials required".to_string()))?;

    let listing = ListingService::new(&state);
    let appointments = listing
        .list_appointments(auth.username(), auth.password())
        .await?;

    Ok(Json(appointments))
}
