pub mod book;
pub mod config;
pub mod models;
pub mod persistence;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageStore;

pub use book::RecipeBook;
pub use config::BookConfig;
pub use models::Recipe;
pub use persistence::{Persistence, StorageError};
