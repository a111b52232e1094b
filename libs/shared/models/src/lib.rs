pub mod appointment;
pub mod credential;
pub mod error;
