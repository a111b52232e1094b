pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use services::availability::AvailabilityService;
pub use services::booking::BookingService;
pub use services::slots::BusinessWindow;
