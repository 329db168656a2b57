//! Frontend monitoring.
//!
//! Browser-console logging for the workflows; initialised once at app
//! startup from `main`.

pub mod logger;

pub use logger::Logger;
