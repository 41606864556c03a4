use dioxus::prelude::*;
use store::{Recipe, StorageError};

use crate::{log_activity, use_activity_log, ActivityFeed, ActivityLog, LogLevel};
use crate::{make_book, RecipeForm, RecipeList};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Recipe collection view.
///
/// Owns the platform book, mirrors every change notification into a
/// signal, and binds form and card events to the book's operations.
#[component]
pub fn RecipesView() -> Element {
    let mut recipes = use_signal(Vec::<Recipe>::new);
    let activity_log = use_activity_log();

    let mut book = use_signal(|| {
        let mut book = make_book();
        book.set_observer(move |current| recipes.set(current.to_vec()));
        book
    });

    // First paint shows the state the book loaded at construction.
    use_effect(move || {
        recipes.set(book.peek().recipes().to_vec());
    });

    let on_add = move |(ingredients, method): (String, String)| {
        let result = book.write().add_recipe(&ingredients, &method);
        report(activity_log, result, "Added recipe");
    };

    let on_delete = move |id: u32| {
        let result = book.write().delete_recipe(id);
        report(activity_log, result, "Deleted recipe");
    };

    let on_edit_ingredient = move |(id, index, value): (u32, usize, String)| {
        let updated = {
            let current = book.read();
            let Some(recipe) = current.recipes().iter().find(|r| r.id == id) else {
                return;
            };
            let mut updated = recipe.ingredients.clone();
            match updated.get_mut(index) {
                Some(slot) => *slot = value,
                None => return,
            }
            updated
        };
        let result = book.write().edit_ingredients(id, updated);
        report(activity_log, result, "Updated ingredients");
    };

    let on_edit_method = move |(id, value): (u32, String)| {
        let result = book.write().edit_method(id, &value);
        report(activity_log, result, "Updated method");
    };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "recipes-view",
            h1 { class: "recipes-title", "Recipes \u{1F966}" }
            RecipeForm { on_add: on_add }
            RecipeList {
                recipes: recipes(),
                on_delete: on_delete,
                on_edit_ingredient: on_edit_ingredient,
                on_edit_method: on_edit_method,
            }
            ActivityFeed {}
        }
    }
}

/// Post the outcome of a mutation to the activity feed. A failed save is
/// reported but never rolled back: the change stays on screen.
fn report(mut log: Signal<ActivityLog>, result: Result<(), StorageError>, action: &str) {
    match result {
        Ok(()) => log_activity(&mut log, LogLevel::Info, action),
        Err(e) => {
            tracing::error!("{action}: {e}");
            log_activity(
                &mut log,
                LogLevel::Error,
                &format!("{action}: {e} (change kept on screen, not saved)"),
            );
        }
    }
}
