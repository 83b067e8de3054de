//! Comment Panel Component
//!
//! Expanded comment thread for one todo: existing comments with timestamps
//! and delete buttons, plus the add-comment form bound to the per-todo draft.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::clock::format_timestamp;
use crate::store::{
    store_add_comment, store_delete_comment, store_set_comment_draft, use_app_store,
    TodoStateStoreFields,
};

/// Comment thread panel for a single todo
#[component]
pub fn CommentPanel(todo_id: i64) -> impl IntoView {
    let store = use_app_store();

    let comments = move || {
        store
            .todos()
            .get()
            .iter()
            .find(|todo| todo.id == todo_id)
            .map(|todo| todo.comments.clone())
            .unwrap_or_default()
    };

    let draft = move || {
        store
            .comment_drafts()
            .get()
            .get(&todo_id)
            .cloned()
            .unwrap_or_default()
    };

    let submit_comment = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_add_comment(&store, todo_id);
    };

    view! {
        <div class="comment-panel">
            <Show when=move || comments().is_empty()>
                <p class="comment-empty">"No comments yet"</p>
            </Show>

            <For
                each=comments
                key=|comment| comment.id
                children=move |comment| {
                    let comment_id = comment.id;
                    view! {
                        <div class="comment-row">
                            <span class="comment-text">{comment.text.clone()}</span>
                            <span class="comment-time">{format_timestamp(comment.created_at)}</span>
                            <button
                                class="comment-delete-btn"
                                on:click=move |_| store_delete_comment(&store, todo_id, comment_id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />

            <form class="comment-form" on:submit=submit_comment>
                <input
                    type="text"
                    placeholder="Add a comment..."
                    prop:value=draft
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        store_set_comment_draft(&store, todo_id, input.value());
                    }
                />
                <button type="submit">"Comment"</button>
            </form>
        </div>
    }
}
