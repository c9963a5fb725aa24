//! # Storage Module
//!
//! Handles all data persistence for the student portal.
//!
//! The domain layer only sees the [`KeyValueStore`] trait, so the backend can
//! be browser `localStorage`, a directory of JSON files, or an in-memory map
//! in tests, without the profile logic changing.
//!
//! ## Layout
//!
//! - **traits**: the `KeyValueStore` abstraction (get/set/remove)
//! - **memory**: shared in-memory store used as a test fake
//! - **json_file**: file-per-key store for native use
//! - **repositories**: load/save of the profile and bank account records

pub mod json_file;
pub mod memory;
pub mod repositories;
pub mod traits;

pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;
pub use repositories::{bank_account_repository, profile_repository};
pub use traits::KeyValueStore;
