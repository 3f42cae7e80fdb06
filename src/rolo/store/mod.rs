//! # Storage Layer
//!
//! This module defines the storage abstraction for rolo. The [`DataStore`]
//! trait is a synchronous string key-value store, mirroring the shape of
//! the persistence the record store was designed against: one key, one
//! serialized blob, read once at startup and rewritten after every
//! mutation.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (database, cloud, etc.) without changing core logic
//! - Keep the record store **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage, one `<key>.json`
//!   file per key under a root directory
//! - [`memory::InMemoryStore`]: In-memory storage for testing, no
//!   persistence

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for key-value persistence.
///
/// Values are opaque strings; the record store serializes and
/// deserializes them itself.
pub trait DataStore {
    /// Read the value for a key. A key that has never been written
    /// returns `Ok(None)`, not an error.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write the full value for a key, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
