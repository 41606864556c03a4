use dioxus::prelude::*;
use store::Recipe;

const RECIPES_CSS: Asset = asset!("/assets/styling/recipes.css");

/// The rendered recipe collection.
///
/// Rebuilt in full from the current record list on every change; shows a
/// placeholder message while the book is empty.
#[component]
pub fn RecipeList(
    recipes: Vec<Recipe>,
    on_delete: EventHandler<u32>,
    on_edit_ingredient: EventHandler<(u32, usize, String)>,
    on_edit_method: EventHandler<(u32, String)>,
) -> Element {
    rsx! {
        document::Stylesheet { href: RECIPES_CSS }

        div {
            class: "all-recipes",
            if recipes.is_empty() {
                p { class: "recipes-placeholder", "Wanna get cookin'? Add a recipe!" }
            } else {
                for recipe in &recipes {
                    RecipeCard {
                        key: "{recipe.id}",
                        recipe: recipe.clone(),
                        on_delete: on_delete,
                        on_edit_ingredient: on_edit_ingredient,
                        on_edit_method: on_edit_method,
                    }
                }
            }
        }
    }
}

/// One recipe block: editable ingredient entries, editable method text,
/// and a delete control. Edits commit on change (blur).
#[component]
fn RecipeCard(
    recipe: Recipe,
    on_delete: EventHandler<u32>,
    on_edit_ingredient: EventHandler<(u32, usize, String)>,
    on_edit_method: EventHandler<(u32, String)>,
) -> Element {
    let id = recipe.id;

    rsx! {
        div {
            class: "recipe-block",
            ul {
                class: "recipe-ingredients",
                for (index, ingredient) in recipe.ingredients.iter().enumerate() {
                    li {
                        key: "{index}",
                        input {
                            class: "editable",
                            r#type: "text",
                            value: "{ingredient}",
                            onchange: move |evt: FormEvent| {
                                on_edit_ingredient.call((id, index, evt.value()))
                            },
                        }
                    }
                }
            }
            div {
                class: "recipe-method",
                textarea {
                    class: "editable",
                    value: "{recipe.method}",
                    onchange: move |evt: FormEvent| on_edit_method.call((id, evt.value())),
                }
            }
            button {
                class: "recipe-delete",
                onclick: move |_| on_delete.call(id),
                "Delete"
            }
        }
    }
}
