use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveTime;
use tracing::debug;

use shared_store::{AppState, AppointmentStore};

use crate::models::BookingError;
use crate::services::slots::{parse_date, BusinessWindow};

/// Read-only view over the day's slot sequence minus what is already booked.
pub struct AvailabilityService {
    store: Arc<dyn AppointmentStore>,
    window: BusinessWindow,
}

impl AvailabilityService {
    pub fn new(state: &AppState) -> Result<Self, BookingError> {
        let window = BusinessWindow::parse(
            &state.config.open_time,
            &state.config.close_time,
            state.config.slot_interval_minutes,
        )?;
        Ok(Self::with_window(Arc::clone(&state.store), window))
    }

    pub fn with_window(store: Arc<dyn AppointmentStore>, window: BusinessWindow) -> Self {
        Self { store, window }
    }

    /// Free slots for `date`, in chronological order. A missing or empty
    /// date is the caller's validation error, not an empty day.
    pub async fn available_slots(
        &self,
        date: Option<&str>,
    ) -> Result<Vec<NaiveTime>, BookingError> {
        let date = match date {
            Some(value) if !value.is_empty() => value,
            _ => return Err(BookingError::MissingDate),
        };
        let date = parse_date(date)?;

        let booked: HashSet<NaiveTime> =
            self.store.booked_times(date).await?.into_iter().collect();
        debug!("{} booked slots on {}", booked.len(), date);

        Ok(self
            .window
            .slots()
            .into_iter()
            .filter(|slot| !booked.contains(slot))
            .collect())
    }
}
