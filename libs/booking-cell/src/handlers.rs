// libs/booking-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::{json, Value};

use shared_models::appointment::wall_clock;
use shared_models::error::AppError;
use shared_store::AppState;

use crate::models::{
    AvailableSlotsQuery, AvailableSlotsResponse, BookingError, CreateAppointmentRequest,
};
use crate::services::availability::AvailabilityService;
use crate::services::booking::BookingService;

pub async fn available_slots(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AvailableSlotsQuery>,
) -> Result<Json<AvailableSlotsResponse>, AppError> {
    let availability = AvailabilityService::new(&state).map_err(into_app_error)?;

    let slots = availability
        .available_slots(params.date.as_deref())
        .await
        .map_err(into_app_error)?;

    let slots = slots
        .iter()
        .map(|slot| slot.format(wall_clock::FORMAT).to_string())
        .collect();

    Ok(Json(AvailableSlotsResponse { slots }))
}

pub async fn create_appointment(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let booking = BookingService::new(&state);

    let appointment = booking
        .create_appointment(request)
        .await
        .map_err(into_app_error)?;

    Ok(Json(json!({
        "message": "Appointment created successfully",
        "appointment": appointment,
    })))
}

fn into_app_error(error: BookingError) -> AppError {
    match error {
        BookingError::MissingFields | BookingError::MissingDate => {
            AppError::Validation(error.to_string())
        }
        BookingError::SlotTaken => AppError::Conflict(error.to_string()),
        BookingError::MalformedDate { .. }
        | BookingError::MalformedTime { .. }
        | BookingError::InvalidInterval(_) => AppError::Format(error.to_string()),
        BookingError::Store(store_error) => AppError::Store(store_error.to_string()),
    }
}
