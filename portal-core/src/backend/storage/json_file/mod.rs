//! File-backed storage: one JSON document per key in a data directory.

pub mod connection;
#[cfg(test)]
pub mod test_utils;

pub use connection::JsonFileStore;
