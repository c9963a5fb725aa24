//! # Storage Traits
//!
//! This module defines the storage abstraction that lets the domain layer
//! persist its records without knowing whether they end up in browser
//! `localStorage`, a directory of JSON files, or an in-memory map.

use anyhow::Result;

/// Trait defining the interface for a string key-value store
///
/// Values are opaque serialized records. Implementations are synchronous and
/// follow "last write wins" semantics per key.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if nothing is stored
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove whatever is stored under `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
