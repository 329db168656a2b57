// src/pages/mod.rs
pub mod home;
pub mod not_found;

// Re-export so they can be used as `pages::Home`
pub use home::Home;
pub use not_found::PageNotFound;
