use dioxus::prelude::*;

const FORM_CSS: Asset = asset!("/assets/styling/form.css");

/// Entry form for a new recipe.
///
/// Raises `on_add` with the raw comma-separated ingredients text and the
/// method text when at least one of the two fields is non-empty, then
/// clears both fields.
#[component]
pub fn RecipeForm(on_add: EventHandler<(String, String)>) -> Element {
    let mut ingredients = use_signal(String::new);
    let mut method = use_signal(String::new);

    let handle_submit = move |_| {
        let ingredients_text = ingredients();
        let method_text = method();
        if ingredients_text.is_empty() && method_text.is_empty() {
            return;
        }
        on_add.call((ingredients_text, method_text));
        ingredients.set(String::new());
        method.set(String::new());
    };

    rsx! {
        document::Stylesheet { href: FORM_CSS }

        div {
            class: "recipe-form",
            label {
                r#for: "ingredients",
                textarea {
                    id: "ingredients",
                    name: "ingredients",
                    placeholder: "Add ingredients (comma-separated)",
                    value: ingredients(),
                    oninput: move |evt: FormEvent| ingredients.set(evt.value()),
                }
            }
            label {
                r#for: "method",
                textarea {
                    id: "method",
                    name: "method",
                    placeholder: "Add method",
                    value: method(),
                    oninput: move |evt: FormEvent| method.set(evt.value()),
                }
            }
            button {
                class: "recipe-submit",
                onclick: handle_submit,
                "Submit"
            }
        }
    }
}
