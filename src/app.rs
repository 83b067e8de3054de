//! Todo Threads App
//!
//! Main application component: owns the store and the page layout.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{TodoInput, TodoListView};
use crate::state::TodoState;
use crate::store::TodoStateStoreFields;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(TodoState::new());

    // Provide the store to all children
    provide_context(store);

    let counts = move || {
        let todos = store.todos().get();
        let comments: usize = todos.iter().map(|todo| todo.comments.len()).sum();
        format!("{} todos, {} comments", todos.len(), comments)
    };

    view! {
        <main class="todo-app">
            <h1>"Todo List"</h1>

            <TodoInput />

            <TodoListView />

            <p class="todo-count">{counts}</p>
        </main>
    }
}
