// libs/booking-cell/src/models.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_store::StoreError;

/// Body of `POST /appointment`. Every field is optional at the wire level so
/// that a missing field surfaces as the domain "not all fields filled"
/// validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAppointmentRequest {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub specialist: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(rename = "strizhkaType", default)]
    pub strizhka_type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AvailableSlotsQuery {
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AvailableSlotsResponse {
    pub slots: Vec<String>,
}

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("not all fields filled")]
    MissingFields,

    #[error("date not provided")]
    MissingDate,

    #[error("slot already taken")]
    SlotTaken,

    #[error("malformed date {value:?}")]
    MalformedDate { value: String },

    #[error("malformed time {value:?}")]
    MalformedTime { value: String },

    #[error("invalid slot interval: {0}")]
    InvalidInterval(u32),

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for BookingError {
    fn from(error: StoreError) -> Self {
        match error {
            // The store's uniqueness constraint is the authoritative conflict
            // signal; normalize it into the domain error here.
            StoreError::SlotTaken => BookingError::SlotTaken,
            other => BookingError::Store(other),
        }
    }
}
