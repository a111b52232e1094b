pub mod handlers;
pub mod router;
pub mod services;

pub use services::credentials::CredentialService;
pub use services::listing::ListingService;
