use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};

use shared_models::appointment::{Appointment, NewAppointment};
use shared_models::credential::Credential;

use crate::{AppointmentStore, StoreError};

/// In-memory store with the same single-occupancy semantics as
/// [`crate::SqliteStore`]. The mutex makes the check-then-insert atomic, so
/// concurrent bookings for one slot resolve to exactly one winner.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    appointments: Vec<Appointment>,
    credentials: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AppointmentStore for MemoryStore {
    async fn find_by_slot(
        &self,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<Option<Appointment>, StoreError> {
        let inner = self.inner.lock().expect("memory store lock poisoned");
        Ok(inner
            .appointments
            .iter()
            .find(|appointment| appointment.date == date && appointment.time == time)
            .cloned())
    }

    async fn booked_times(&self, date: NaiveDate) -> Result<Vec<NaiveTime>, StoreError> {
        let inner = self.inner.lock().expect("memory store lock poisoned");
        Ok(inner
            .appointments
            .iter()
            .filter(|appointment| appointment.date == date)
            .map(|appointment| appointment.time)
            .collect())
    }

    async fn insert_appointment(
        &self,
        appointment: NewAppointment,
    ) -> Result<Appointment, StoreError> {
        let mut inner = self.inner.lock().expect("memory store lock poisoned");
        let occupied = inner
            .appointments
            .iter()
            .any(|existing| existing.date == appointment.date && existing.time == appointment.time);
        if occupied {
            return Err(StoreError::SlotTaken);
        }

        inner.next_id += 1;
        let stored = appointment.into_appointment(inner.next_id);
        inner.appointments.push(stored.clone());
        Ok(stored)
    }

    async fn list_appointments(&self) -> Result<Vec<Appointment>, StoreError> {
        let inner = self.inner.lock().expect("memory store lock poisoned");
        Ok(inner.appointments.clone())
    }

    async fn find_credential(&self, username: &str) -> Result<Option<Credential>, StoreError> {
        let inner = self.inner.lock().expect("memory store lock poisoned");
        Ok(inner
            .credentials
            .get(username)
            .map(|password| Credential::new(username, password.clone())))
    }

    async fn upsert_credential(&self, credential: Credential) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().expect("memory store lock poisoned");
        inner
            .credentials
            .entry(credential.username)
            .or_insert(credential.password);
        Ok(())
    }
}
