//! Todo List View Component
//!
//! Renders the todo collection with keyed rows.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::store::{use_app_store, TodoStateStoreFields};

/// Todo list view
#[component]
pub fn TodoListView() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="todo-list">
            <For
                each=move || store.todos().get()
                key=|todo| {
                    // Key on all mutable fields so row edits cause re-render
                    (todo.id, todo.text.clone(), todo.completed, todo.comments.len())
                }
                children=move |todo| {
                    view! { <TodoItem todo=todo /> }
                }
            />
        </div>
    }
}
