//! Todo Input Component
//!
//! Form for creating new todos.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::{store_add_todo, use_app_store};

/// Form for creating new todos
#[component]
pub fn TodoInput() -> impl IntoView {
    let store = use_app_store();

    let (new_text, set_new_text) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        // Blank input is rejected by the store; keep the field as typed then
        if store_add_todo(&store, &text).is_some() {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="todo-input-form" on:submit=create_todo>
            <input
                type="text"
                placeholder="Add a new todo"
                prop:value=move || new_text.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_new_text.set(input.value());
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
