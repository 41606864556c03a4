//! Shared book constructor for all platforms.
//!
//! Returns a [`store::RecipeBook`] backed by the appropriate
//! [`store::Persistence`]:
//! - **Web** (WASM + `web` feature): browser localStorage
//! - **Desktop** (native): filesystem under the platform data directory

use store::{Persistence, RecipeBook};

/// Create a platform-appropriate recipe book.
///
/// The record slot and seeding behavior come from the stored
/// [`store::BookConfig`].
pub fn make_book() -> RecipeBook<impl Persistence> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        RecipeBook::open_configured(store::LocalStorageStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("recipebook");
        RecipeBook::open_configured(store::FileStore::new(base))
    }
}
