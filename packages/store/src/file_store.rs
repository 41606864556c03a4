//! # Filesystem-backed persistence
//!
//! [`FileStore`] is a [`Persistence`] implementation that keeps one file
//! per slot key under a base directory. It is used on native desktop runs
//! to retain the book across restarts.
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] in the caller to obtain a platform-appropriate
//! base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/recipebook/` |
//! | Linux | `~/.local/share/recipebook/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\recipebook\` |

use std::path::PathBuf;

use crate::persistence::{Persistence, StorageError};

/// Filesystem-backed Persistence for desktop runs.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl Persistence for FileStore {
    fn load(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.slot_path(key)).ok()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|_| StorageError::WriteFailed {
                key: key.to_string(),
            })?;
        }
        std::fs::write(path, value).map_err(|_| StorageError::WriteFailed {
            key: key.to_string(),
        })
    }
}
