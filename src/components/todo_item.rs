//! Todo Item Component
//!
//! A single todo row with its (optionally expanded) comment panel.

use leptos::prelude::*;

use crate::components::{CommentPanel, DeleteConfirmButton};
use crate::models::Todo;
use crate::store::{
    store_delete_todo, store_toggle_comments, store_toggle_todo, use_app_store,
    TodoStateStoreFields,
};

/// A single todo row
#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let store = use_app_store();

    let id = todo.id;
    let completed = todo.completed;
    let text = todo.text.clone();
    let comment_count = todo.comments.len();

    let comments_visible = move || {
        store
            .show_comments()
            .get()
            .get(&id)
            .copied()
            .unwrap_or(false)
    };

    view! {
        <div class="todo-item-wrapper">
            <div class=move || if completed { "todo-row completed" } else { "todo-row" }>
                <input
                    type="checkbox"
                    checked=completed
                    on:change=move |_| store_toggle_todo(&store, id)
                />

                <span class="todo-text">{text}</span>

                // Comment panel expander with count
                <button
                    class="comments-btn"
                    on:click=move |_| store_toggle_comments(&store, id)
                >
                    {move || if comments_visible() { "▼" } else { "▶" }}
                    {format!(" Comments ({})", comment_count)}
                </button>

                // Deletion cascades to the comment thread and view state
                <DeleteConfirmButton
                    button_class="delete-btn"
                    on_confirm=Callback::new(move |_| store_delete_todo(&store, id))
                />
            </div>

            <Show when=comments_visible>
                <CommentPanel todo_id=id />
            </Show>
        </div>
    }
}
