//! # Domain model for recipe records
//!
//! [`Recipe`] is the unit the whole application revolves around: an
//! id-keyed record with an ordered ingredient list and a free-form
//! preparation method. The type is `Serialize + Deserialize` because the
//! book persists the full record list as one JSON document.
//!
//! [`split_ingredients`] defines the input contract for ingredient text:
//! every comma-delimited segment becomes one entry verbatim. No trimming,
//! no filtering of empty segments: `"a,,c"` is three entries, the middle
//! one empty.

use serde::{Deserialize, Serialize};

/// One recipe in the book.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Book-assigned identifier, unique and stable for the record's lifetime.
    pub id: u32,
    /// Ingredient entries in input order.
    pub ingredients: Vec<String>,
    /// Free-form preparation steps.
    pub method: String,
}

/// Split a comma-separated ingredients string into entries, verbatim.
pub fn split_ingredients(text: &str) -> Vec<String> {
    text.split(',').map(str::to_string).collect()
}

/// Starter recipes used when seeding an empty book: raw ingredient text and
/// method, fed through the normal add path.
pub fn sample_recipes() -> [(&'static str, &'static str); 2] {
    [
        (
            "chilli,garlic,rice",
            "fry chilli and garlic in pan, cook rice in water",
        ),
        (
            "banana,custard,cinnamon",
            "slice bananas, warm custard, and sprinkle cinnamon",
        ),
    ]
}
