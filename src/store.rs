//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store wraps
//! `TodoState`; every helper delegates to its methods through a write guard
//! and logs the mutation to the browser console.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::state::TodoState;
pub use crate::state::TodoStateStoreFields;

/// Type alias for the store
pub type AppStore = Store<TodoState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a todo from the input text; returns the new id on success
pub fn store_add_todo(store: &AppStore, text: &str) -> Option<i64> {
    let id = store.write().add_todo(text);
    if let Some(id) = id {
        web_sys::console::log_1(&format!("[STORE] add_todo #{}", id).into());
    }
    id
}

/// Flip completion on a todo by ID
pub fn store_toggle_todo(store: &AppStore, id: i64) {
    if store.write().toggle_todo(id) {
        web_sys::console::log_1(&format!("[STORE] toggle_todo #{}", id).into());
    }
}

/// Remove a todo by ID, including its draft and visibility entries
pub fn store_delete_todo(store: &AppStore, id: i64) {
    if store.write().delete_todo(id) {
        web_sys::console::log_1(&format!("[STORE] delete_todo #{}", id).into());
    }
}

/// Add a comment to a todo from its current draft
pub fn store_add_comment(store: &AppStore, todo_id: i64) {
    if let Some(id) = store.write().add_comment(todo_id) {
        web_sys::console::log_1(
            &format!("[STORE] add_comment #{} on todo #{}", id, todo_id).into(),
        );
    }
}

/// Remove a comment from a todo by the (todo, comment) ID pair
pub fn store_delete_comment(store: &AppStore, todo_id: i64, comment_id: i64) {
    if store.write().delete_comment(todo_id, comment_id) {
        web_sys::console::log_1(
            &format!("[STORE] delete_comment #{} on todo #{}", comment_id, todo_id).into(),
        );
    }
}

/// Expand or collapse the comment panel for a todo
pub fn store_toggle_comments(store: &AppStore, todo_id: i64) {
    store.write().toggle_comments(todo_id);
}

/// Update the unsaved comment input for a todo
pub fn store_set_comment_draft(store: &AppStore, todo_id: i64, text: String) {
    store.write().set_comment_draft(todo_id, text);
}
