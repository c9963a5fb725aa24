//! Profile and bank account state for the student portal.
//!
//! The [`backend`] module holds the domain rules and storage abstraction; the
//! [`config`] module resolves where native tools keep their data.

pub mod backend;
pub mod config;

pub use backend::{initialize_backend, AppState};
pub use config::PortalConfig;
