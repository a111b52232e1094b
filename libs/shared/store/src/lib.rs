use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use shared_config::AppConfig;
use shared_models::appointment::{Appointment, NewAppointment};
use shared_models::credential::Credential;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("slot already taken")]
    SlotTaken,

    #[error("database error: {0}")]
    Database(String),
}

/// Durable record of appointments and the admin credential.
///
/// `insert_appointment` is the authoritative single-occupancy guard: the
/// implementation must reject a second appointment for an occupied
/// `(date, time)` pair with [`StoreError::SlotTaken`] even under concurrent
/// writers.
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    async fn find_by_slot(
        &self,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<Option<Appointment>, StoreError>;

    async fn booked_times(&self, date: NaiveDate) -> Result<Vec<NaiveTime>, StoreError>;

    async fn insert_appointment(
        &self,
        appointment: NewAppointment,
    ) -> Result<Appointment, StoreError>;

    async fn list_appointments(&self) -> Result<Vec<Appointment>, StoreError>;

    async fn find_credential(&self, username: &str) -> Result<Option<Credential>, StoreError>;

    /// Insert-if-absent: an existing row for the username is left untouched.
    async fn upsert_credential(&self, credential: Credential) -> Result<(), StoreError>;
}

/// Shared state handed to every cell router.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub store: Arc<dyn AppointmentStore>,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn AppointmentStore>) -> Self {
        Self { config, store }
    }
}
