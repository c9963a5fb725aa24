//! Repository layer: load/save functions for each persisted record.

pub mod bank_account_repository;
pub mod profile_repository;
