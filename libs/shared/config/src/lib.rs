use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub admin_username: String,
    pub admin_password: String,
    pub database_url: String,
    pub public_dir: String,
    pub bind_addr: String,
    pub open_time: String,
    pub close_time: String,
    pub slot_interval_minutes: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            admin_username: env::var("ADMIN_USER")
                .unwrap_or_else(|_| {
                    warn!("ADMIN_USER not set, using default credentials");
                    "default_user".to_string()
                }),
            admin_password: env::var("ADMIN_PASS")
                .unwrap_or_else(|_| {
                    warn!("ADMIN_PASS not set, using default credentials");
                    "default_pass".to_string()
                }),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://barber.db".to_string()),
            public_dir: env::var("PUBLIC_DIR")
                .unwrap_or_else(|_| "public".to_string()),
            bind_addr: env::var("BIND_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            open_time: env::var("OPEN_TIME")
                .unwrap_or_else(|_| "09:00".to_string()),
            close_time: env::var("CLOSE_TIME")
                .unwrap_or_else(|_| "22:00".to_string()),
            slot_interval_minutes: env::var("SLOT_INTERVAL_MINUTES")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or_else(|| {
                    warn!("SLOT_INTERVAL_MINUTES not set or invalid, using 60");
                    60
                }),
        }
    }
}
