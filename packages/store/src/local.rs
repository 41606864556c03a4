//! # Browser localStorage — web-side persistence
//!
//! [`LocalStorageStore`] is the [`Persistence`] implementation used on the
//! **web platform**. It maps slot keys straight onto `window.localStorage`
//! entries via `web-sys`. localStorage is synchronous, so every read and
//! write completes inline on the UI thread.
//!
//! ## Error handling
//!
//! Reads swallow backend errors (missing window, storage access denied)
//! and return `None`; an unreachable localStorage degrades to "no stored
//! data" rather than crashing the session. Writes report the failure
//! instead: a missing storage handle is [`StorageError::Unavailable`] and
//! a rejected `setItem` (typically quota exhaustion) is
//! [`StorageError::WriteFailed`], so the caller can tell the user their
//! change did not survive the session.

use crate::persistence::{Persistence, StorageError};

/// localStorage-backed Persistence for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl Persistence for LocalStorageStore {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed {
                key: key.to_string(),
            })
    }
}
