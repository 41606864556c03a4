//! # RecipeBook — the record store behind the UI
//!
//! [`RecipeBook`] owns the canonical list of [`Recipe`] records for one
//! application session. All reads and writes go through the
//! [`Persistence`] trait, so the same logic works against browser
//! localStorage, a filesystem directory, or the in-memory store used by
//! tests.
//!
//! ## Read path
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`open`](RecipeBook::open) / [`open_at`](RecipeBook::open_at) | Load the record document from the slot; absent or corrupt data yields the empty book. |
//! | [`open_configured`](RecipeBook::open_configured) | Like `open`, but the slot key and seeding come from the stored [`BookConfig`]. |
//! | [`recipes`](RecipeBook::recipes) | The current records, in insertion order. |
//!
//! ## Write path
//!
//! Every mutation follows the same commit pattern: apply the change to the
//! in-memory list, invoke the observer with the new list, then write the
//! full document back to the slot. The observer and the write both run
//! inline, before the call returns. A failed write surfaces as
//! [`StorageError`] *after* the list and the observer have already moved
//! on: the caller's view stays consistent with what the user did, and the
//! caller decides how to report the unsaved change.
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`add_recipe`](RecipeBook::add_recipe) | Splits the ingredient text on commas (verbatim segments), assigns the next id, appends. |
//! | [`edit_ingredients`](RecipeBook::edit_ingredients) | Replaces one record's ingredient list; its method is untouched. |
//! | [`edit_method`](RecipeBook::edit_method) | Replaces one record's method; its ingredients are untouched. |
//! | [`delete_recipe`](RecipeBook::delete_recipe) | Removes the matching record; unknown ids are a silent no-op. |
//!
//! ## Id assignment
//!
//! Ids come from a monotonically increasing counter persisted alongside
//! the records. Deleting the highest-id record and adding a new one never
//! reuses the old id, and reopening the book continues the sequence.
//!
//! ## Durable format
//!
//! The slot holds `{"next_id": N, "recipes": [...]}`. A slot written by an
//! earlier variant of this application holds the bare record array
//! instead; that form is adopted on open with the counter rebuilt as
//! `max(ids) + 1`.

use serde::{Deserialize, Serialize};

use crate::config::BookConfig;
use crate::models::{sample_recipes, split_ingredients, Recipe};
use crate::persistence::{Persistence, StorageError};

/// Durable slot key used when none is configured.
pub const DEFAULT_KEY: &str = "recipes";

/// The JSON document written to the record slot.
#[derive(Serialize, Deserialize)]
struct StoredBook {
    next_id: u32,
    recipes: Vec<Recipe>,
}

/// A recipe collection backed by a Persistence slot.
pub struct RecipeBook<P: Persistence> {
    storage: P,
    key: String,
    recipes: Vec<Recipe>,
    next_id: u32,
    observer: Option<Box<dyn FnMut(&[Recipe])>>,
}

impl<P: Persistence> RecipeBook<P> {
    /// Open a book at the default record slot.
    pub fn open(storage: P) -> Self {
        Self::open_at(storage, DEFAULT_KEY)
    }

    /// Open a book at a specific record slot.
    ///
    /// Absent, unreadable, or corrupt slot contents all start the session
    /// with an empty list; open never fails.
    pub fn open_at(storage: P, key: &str) -> Self {
        let (recipes, next_id) = match storage.load(key) {
            Some(raw) => decode(&raw),
            None => (Vec::new(), 1),
        };
        Self {
            storage,
            key: key.to_string(),
            recipes,
            next_id,
            observer: None,
        }
    }

    /// Open a book using the stored [`BookConfig`]: the record slot comes
    /// from `storage.key`, and an empty book gets the starter recipes when
    /// `seed.sample_recipes` is set.
    pub fn open_configured(storage: P) -> Self {
        let config = BookConfig::load(&storage);
        let mut book = Self::open_at(storage, &config.storage.key);
        if config.seed.sample_recipes && book.is_empty() {
            for (ingredients, method) in sample_recipes() {
                let _ = book.add_recipe(ingredients, method);
            }
        }
        book
    }

    /// Register the change observer. The book holds exactly one observer;
    /// the last registration wins and there is no unsubscribe.
    ///
    /// After every mutation the observer receives the full current list.
    pub fn set_observer(&mut self, observer: impl FnMut(&[Recipe]) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// The current records, in insertion order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Add a recipe from raw form input.
    ///
    /// `ingredients_text` is split on literal commas; every segment becomes
    /// one ingredient verbatim. The new record gets the next id in the
    /// persisted sequence.
    pub fn add_recipe(&mut self, ingredients_text: &str, method: &str) -> Result<(), StorageError> {
        let recipe = Recipe {
            id: self.next_id,
            ingredients: split_ingredients(ingredients_text),
            method: method.to_string(),
        };
        self.next_id += 1;
        self.recipes.push(recipe);
        self.commit()
    }

    /// Replace the ingredient list of the record with the given id. The
    /// record's method is untouched. An unknown id leaves the list
    /// unchanged; the commit still runs.
    pub fn edit_ingredients(&mut self, id: u32, updated: Vec<String>) -> Result<(), StorageError> {
        if let Some(recipe) = self.recipes.iter_mut().find(|r| r.id == id) {
            recipe.ingredients = updated;
        }
        self.commit()
    }

    /// Replace the method of the record with the given id. The record's
    /// ingredients are untouched. An unknown id leaves the list unchanged;
    /// the commit still runs.
    pub fn edit_method(&mut self, id: u32, updated: &str) -> Result<(), StorageError> {
        if let Some(recipe) = self.recipes.iter_mut().find(|r| r.id == id) {
            recipe.method = updated.to_string();
        }
        self.commit()
    }

    /// Remove the record with the given id. Deleting an unknown id is a
    /// silent no-op on the list.
    pub fn delete_recipe(&mut self, id: u32) -> Result<(), StorageError> {
        self.recipes.retain(|r| r.id != id);
        self.commit()
    }

    /// Notify the observer, then write the full document to the slot.
    fn commit(&mut self) -> Result<(), StorageError> {
        if let Some(observer) = self.observer.as_mut() {
            observer(&self.recipes);
        }
        let doc = StoredBook {
            next_id: self.next_id,
            recipes: self.recipes.clone(),
        };
        let raw = serde_json::to_string(&doc).map_err(|_| StorageError::WriteFailed {
            key: self.key.clone(),
        })?;
        self.storage.save(&self.key, &raw)
    }
}

/// Decode slot contents into (records, next id). Falls back from the
/// document format to the legacy bare array, then to the empty state.
fn decode(raw: &str) -> (Vec<Recipe>, u32) {
    if let Ok(doc) = serde_json::from_str::<StoredBook>(raw) {
        let floor = max_id(&doc.recipes) + 1;
        return (doc.recipes, doc.next_id.max(floor));
    }
    if let Ok(recipes) = serde_json::from_str::<Vec<Recipe>>(raw) {
        let next_id = max_id(&recipes) + 1;
        return (recipes, next_id);
    }
    (Vec::new(), 1)
}

fn max_id(recipes: &[Recipe]) -> u32 {
    recipes.iter().map(|r| r.id).max().unwrap_or(0)
}
