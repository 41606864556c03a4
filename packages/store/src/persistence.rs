//! # Persistence — durable key-value string storage
//!
//! The platform interface stores raw strings under fixed keys. Serialization
//! (the JSON record document, the TOML config) is the caller's responsibility,
//! which keeps the platform contract free of any encoding dependency.
//!
//! Reads are [`Option`]: an absent key and an unreachable backend look the
//! same to the caller, and both are recoverable states rather than errors.
//! Writes return [`StorageError`] so a failed save (no backend, quota
//! exhausted) can be surfaced without crashing the mutation that caused it.
//!
//! Implementations live in sibling modules: [`crate::MemoryStore`] (tests and
//! ephemeral sessions), [`crate::FileStore`] (native), and browser
//! localStorage behind the `web` feature.

use thiserror::Error;

/// Failure reported by [`Persistence::save`].
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing storage cannot be reached (e.g. no browser window).
    #[error("durable storage is unavailable")]
    Unavailable,
    /// The backend rejected the write (e.g. quota exhausted).
    #[error("failed to write {key:?} to durable storage")]
    WriteFailed { key: String },
}

/// Synchronous key-value string storage.
pub trait Persistence {
    /// Read the value stored under `key`. Returns `None` if absent or if the
    /// backend cannot be read.
    fn load(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value in full.
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
