use std::str::FromStr;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;
use tracing::debug;

use shared_models::appointment::{wall_clock, Appointment, NewAppointment};
use shared_models::credential::Credential;

use crate::{AppointmentStore, StoreError};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// SQLite-backed store. Dates and times are stored as the wire text forms
/// (`YYYY-MM-DD`, `HH:MM`); the unique index on `(date, time)` enforces
/// single occupancy.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating the file if needed) and initialize the schema.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| StoreError::Database(e.to_string()))?
            .create_if_missing(true);

        // A single connection: SQLite serializes writers anyway, and it keeps
        // the check-then-insert path on one serializable connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> Result<(), StoreError> {
        debug!("Initializing sqlite schema");

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT UNIQUE NOT NULL,
                password TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS appointments (
                id INTEGER PRIMARY KEY,
                date TEXT NOT NULL,
                time TEXT NOT NULL,
                specialist TEXT NOT NULL,
                service TEXT NOT NULL,
                strizhkaType TEXT,
                name TEXT NOT NULL,
                phone TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        sqlx::query(
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_appointments_slot
                ON appointments (date, time)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(())
    }
}

#[derive(FromRow)]
struct AppointmentRow {
    id: i64,
    date: String,
    time: String,
    specialist: String,
    service: String,
    #[sqlx(rename = "strizhkaType")]
    strizhka_type: Option<String>,
    name: String,
    phone: String,
}

impl TryFrom<AppointmentRow> for Appointment {
    type Error = StoreError;

    fn try_from(row: AppointmentRow) -> Result<Self, Self::Error> {
        Ok(Appointment {
            id: row.id,
            date: decode_date(&row.date)?,
            time: decode_time(&row.time)?,
            specialist: row.specialist,
            service: row.service,
            strizhka_type: row.strizhka_type.unwrap_or_default(),
            name: row.name,
            phone: row.phone,
        })
    }
}

fn encode_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn encode_time(time: NaiveTime) -> String {
    time.format(wall_clock::FORMAT).to_string()
}

fn decode_date(value: &str) -> Result<NaiveDate, StoreError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| StoreError::Database(format!("stored date {value:?} is malformed: {e}")))
}

fn decode_time(value: &str) -> Result<NaiveTime, StoreError> {
    NaiveTime::parse_from_str(value, wall_clock::FORMAT)
        .map_err(|e| StoreError::Database(format!("stored time {value:?} is malformed: {e}")))
}

#[async_trait]
impl AppointmentStore for SqliteStore {
    async fn find_by_slot(
        &self,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<Option<Appointment>, StoreError> {
        let row = sqlx::query_as::<_, AppointmentRow>(
            "SELECT id, date, time, specialist, service, strizhkaType, name, phone
                FROM appointments WHERE date = ?1 AND time = ?2",
        )
        .bind(encode_date(date))
        .bind(encode_time(time))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        row.map(Appointment::try_from).transpose()
    }

    async fn booked_times(&self, date: NaiveDate) -> Result<Vec<NaiveTime>, StoreError> {
        let times: Vec<String> =
            sqlx::query_scalar("SELECT time FROM appointments WHERE date = ?1 ORDER BY time")
                .bind(encode_date(date))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| StoreError::Database(e.to_string()))?;

        times.iter().map(|value| decode_time(value)).collect()
    }

    async fn insert_appointment(
        &self,
        appointment: NewAppointment,
    ) -> Result<Appointment, StoreError> {
        let result = sqlx::query(
            "INSERT INTO appointments (date, time, specialist, service, strizhkaType, name, phone)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .bind(encode_date(appointment.date))
        .bind(encode_time(appointment.time))
        .bind(&appointment.specialist)
        .bind(&appointment.service)
        .bind(&appointment.strizhka_type)
        .bind(&appointment.name)
        .bind(&appointment.phone)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            // The unique index is the authoritative conflict signal.
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                StoreError::SlotTaken
            } else {
                StoreError::Database(e.to_string())
            }
        })?;

        Ok(appointment.into_appointment(result.last_insert_rowid()))
    }

    async fn list_appointments(&self) -> Result<Vec<Appointment>, StoreError> {
        let rows = sqlx::query_as::<_, AppointmentRow>(
            "SELECT id, date, time, specialist, service, strizhkaType, name, phone
                FROM appointments ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        rows.into_iter().map(Appointment::try_from).collect()
    }

    async fn find_credential(&self, username: &str) -> Result<Option<Credential>, StoreError> {
        let row: Option<(String, String)> =
            sqlx::query_as("SELECT username, password FROM users WHERE username = ?1")
                .bind(username)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(row.map(|(username, password)| Credential { username, password }))
    }

    async fn upsert_credential(&self, credential: Credential) -> Result<(), StoreError> {
        sqlx::query("INSERT OR IGNORE INTO users (username, password) VALUES (?1, ?2)")
            .bind(&credential.username)
            .bind(&credential.password)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(())
    }
}
