use std::sync::Arc;

use tracing::{debug, info};

use shared_models::credential::Credential;
use shared_models::error::AppError;
use shared_store::{AppState, AppointmentStore};

/// Lookup and comparison against the single seeded admin credential. A
/// deliberate plain-equality check: no sessions, no tokens, no hashing.
pub struct CredentialService {
    store: Arc<dyn AppointmentStore>,
}

impl CredentialService {
    pub fn new(state: &AppState) -> Self {
        Self::with_store(Arc::clone(&state.store))
    }

    pub fn with_store(store: Arc<dyn AppointmentStore>) -> Self {
        Self { store }
    }

    pub async fn verify(&self, username: &str, password: &str) -> Result<(), AppError> {
        debug!("Verifying credentials for {}", username);

        let stored = self
            .store
            .find_credential(username)
            .await
            .map_err(|e| AppError::Store(e.to_string()))?;

        match stored {
            Some(credential) if credential.password == password => Ok(()),
            _ => Err(AppError::Auth("invalid username or password".to_string())),
        }
    }

    /// Startup bootstrap. Insert-if-absent: a credential already stored for
    /// the username survives restarts with a changed configuration.
    pub async fn seed(&self, username: &str, password: &str) -> Result<(), AppError> {
        self.store
            .upsert_credential(Credential::new(username, password))
            .await
            .map_err(|e| AppError::Store(e.to_string()))?;
        info!("Admin credential seeded for {}", username);
        Ok(())
    }
}
