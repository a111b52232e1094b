use std::sync::Arc;

use tracing::debug;

use shared_models::appointment::Appointment;
use shared_models::error::AppError;
use shared_store::{AppState, AppointmentStore};

use crate::services::credentials::CredentialService;

/// Credential-gated listing of every appointment in the store.
pub struct ListingService {
    store: Arc<dyn AppointmentStore>,
    credentials: CredentialService,
}

impl ListingService {
    pub fn new(state: &AppState) -> Self {
        Self::with_store(Arc::clone(&state.store))
    }

    pub fn with_store(store: Arc<dyn AppointmentStore>) -> Self {
        Self {
            credentials: CredentialService::with_store(Arc::clone(&store)),
            store,
        }
    }

    /// All appointments in store order. Nothing is returned without a
    /// matching credential pair.
    pub async fn list_appointments(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Vec<Appointment>, AppError> {
        self.credentials.verify(username, password).await?;

        let appointments = self
            .store
            .list_appointments()
            .await
            .map_err(|e| AppError::Store(e.to_string()))?;

        debug!("Listing {} appointments", appointments.len());
        Ok(appointments)
    }
}
