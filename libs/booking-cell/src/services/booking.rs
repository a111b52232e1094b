use std::sync::Arc;

use tracing::{debug, info};

use shared_models::appointment::{Appointment, NewAppointment};
use shared_store::{AppState, AppointmentStore};

use crate::models::{BookingError, CreateAppointmentRequest};
use crate::services::slots::{parse_date, parse_time};

pub struct BookingService {
    store: Arc<dyn AppointmentStore>,
}

impl BookingService {
    pub fn new(state: &AppState) -> Self {
        Self::with_store(Arc::clone(&state.store))
    }

    pub fn with_store(store: Arc<dyn AppointmentStore>) -> Self {
        Self { store }
    }

    /// Validate the request and persist the appointment, enforcing single
    /// occupancy per `(date, time)` slot.
    pub async fn create_appointment(
        &self,
        request: CreateAppointmentRequest,
    ) -> Result<Appointment, BookingError> {
        let new_appointment = validate(request)?;

        debug!(
            "Booking request for {} {}",
            new_appointment.date,
            new_appointment.time.format("%H:%M")
        );

        // Pre-check for the friendlier error message in the common case; the
        // store's unique index remains authoritative when two bookings race.
        if self
            .store
            .find_by_slot(new_appointment.date, new_appointment.time)
            .await?
            .is_some()
        {
            return Err(BookingError::SlotTaken);
        }

        let appointment = self.store.insert_appointment(new_appointment).await?;
        info!(
            "Appointment {} created for {} {} with {}",
            appointment.id,
            appointment.date,
            appointment.time.format("%H:%M"),
            appointment.specialist
        );
        Ok(appointment)
    }
}

fn validate(request: CreateAppointmentRequest) -> Result<NewAppointment, BookingError> {
    let date = required(request.date)?;
    let time = required(request.time)?;
    let specialist = required(request.specialist)?;
    let service = required(request.service)?;
    let name = required(request.name)?;
    let phone = required(request.phone)?;

    Ok(NewAppointment {
        date: parse_date(&date)?,
        time: parse_time(&time)?,
        specialist,
        service,
        strizhka_type: request.strizhka_type.unwrap_or_default(),
        name,
        phone,
    })
}

fn required(value: Option<String>) -> Result<String, BookingError> {
    value
        .filter(|value| !value.is_empty())
        .ok_or(BookingError::MissingFields)
}
