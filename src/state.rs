//! Todo State Container
//!
//! In-memory state for todos, their comment threads, and the per-todo view
//! state (comment drafts, panel visibility). All mutation logic lives here so
//! it can be tested on the host target; `store.rs` wraps it reactively.

use std::collections::HashMap;

use reactive_stores::Store;

use crate::clock;
use crate::models::{Comment, Todo};

/// Todos plus auxiliary view state, keyed by todo id
///
/// Derives `Store` so components get field-level read subscriptions; all
/// mutations go through the methods below.
#[derive(Debug, Clone, Default, PartialEq, Store)]
pub struct TodoState {
    /// Todos in insertion order
    pub todos: Vec<Todo>,
    /// Unsaved comment input per todo
    pub comment_drafts: HashMap<i64, String>,
    /// Whether the comment panel is expanded per todo
    pub show_comments: HashMap<i64, bool>,
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new uncompleted todo. Whitespace-only text is rejected.
    /// Returns the new todo's id.
    pub fn add_todo(&mut self, text: &str) -> Option<i64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = clock::next_id();
        self.todos.push(Todo {
            id,
            text: text.to_string(),
            completed: false,
            comments: Vec::new(),
        });
        Some(id)
    }

    /// Flip completion on the matching todo. Unknown ids are a no-op.
    pub fn toggle_todo(&mut self, id: i64) -> bool {
        match self.todos.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.completed = !todo.completed;
                true
            }
            None => false,
        }
    }

    /// Remove a todo and cascade-remove its draft and visibility entries so
    /// no orphaned view state is left behind.
    pub fn delete_todo(&mut self, id: i64) -> bool {
        let before = self.todos.len();
        self.todos.retain(|todo| todo.id != id);
        self.comment_drafts.remove(&id);
        self.show_comments.remove(&id);
        self.todos.len() != before
    }

    /// Append a comment to `todo_id` from its current draft, then clear the
    /// draft. Missing or whitespace-only drafts are rejected (draft is left
    /// as typed). Returns the new comment's id.
    pub fn add_comment(&mut self, todo_id: i64) -> Option<i64> {
        let text = self
            .comment_drafts
            .get(&todo_id)
            .map(|draft| draft.trim())
            .filter(|text| !text.is_empty())?
            .to_string();
        let todo = self.todos.iter_mut().find(|todo| todo.id == todo_id)?;
        let id = clock::next_id();
        todo.comments.push(Comment {
            id,
            text,
            created_at: id,
        });
        self.comment_drafts.insert(todo_id, String::new());
        Some(id)
    }

    /// Two-level lookup: remove `comment_id` from the comment thread of
    /// `todo_id`. Unknown ids on either level are a no-op.
    pub fn delete_comment(&mut self, todo_id: i64, comment_id: i64) -> bool {
        match self.todos.iter_mut().find(|todo| todo.id == todo_id) {
            Some(todo) => {
                let before = todo.comments.len();
                todo.comments.retain(|comment| comment.id != comment_id);
                todo.comments.len() != before
            }
            None => false,
        }
    }

    /// Flip the comment-panel visibility flag. Absent defaults to collapsed,
    /// so the first toggle expands.
    pub fn toggle_comments(&mut self, todo_id: i64) {
        let expanded = self.show_comments.entry(todo_id).or_insert(false);
        *expanded = !*expanded;
    }

    /// Upsert the unsaved comment input for a todo, verbatim (trimming only
    /// happens on submit).
    pub fn set_comment_draft(&mut self, todo_id: i64, text: String) {
        self.comment_drafts.insert(todo_id, text);
    }

    pub fn comment_draft(&self, todo_id: i64) -> String {
        self.comment_drafts.get(&todo_id).cloned().unwrap_or_default()
    }

    pub fn comments_visible(&self, todo_id: i64) -> bool {
        self.show_comments.get(&todo_id).copied().unwrap_or(false)
    }

    pub fn comment_count(&self, todo_id: i64) -> usize {
        self.todos
            .iter()
            .find(|todo| todo.id == todo_id)
            .map(|todo| todo.comments.len())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_one_todo() -> (TodoState, i64) {
        let mut state = TodoState::new();
        let id = state.add_todo("Buy milk").expect("add should succeed");
        (state, id)
    }

    #[test]
    fn test_add_todo() {
        let (state, id) = state_with_one_todo();
        assert_eq!(state.todos.len(), 1);
        assert_eq!(state.todos[0].id, id);
        assert_eq!(state.todos[0].text, "Buy milk");
        assert!(!state.todos[0].completed);
        assert!(state.todos[0].comments.is_empty());
    }

    #[test]
    fn test_add_todo_trims_input() {
        let mut state = TodoState::new();
        state.add_todo("  padded  ").unwrap();
        assert_eq!(state.todos[0].text, "padded");
    }

    #[test]
    fn test_add_todo_rejects_blank() {
        let mut state = TodoState::new();
        assert!(state.add_todo("").is_none());
        assert!(state.add_todo("   \t ").is_none());
        assert!(state.todos.is_empty());
    }

    #[test]
    fn test_todo_ids_unique_and_ordered() {
        let mut state = TodoState::new();
        let a = state.add_todo("first").unwrap();
        let b = state.add_todo("second").unwrap();
        let c = state.add_todo("third").unwrap();
        assert!(a < b && b < c);
        assert_eq!(
            state.todos.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![a, b, c]
        );
    }

    #[test]
    fn test_toggle_todo() {
        let (mut state, id) = state_with_one_todo();
        assert!(state.toggle_todo(id));
        assert!(state.todos[0].completed);
        assert!(state.toggle_todo(id));
        assert!(!state.todos[0].completed);
    }

    #[test]
    fn test_toggle_unknown_todo_is_noop() {
        let (mut state, _) = state_with_one_todo();
        assert!(!state.toggle_todo(999));
        assert!(!state.todos[0].completed);
    }

    #[test]
    fn test_delete_todo() {
        let mut state = TodoState::new();
        let a = state.add_todo("keep").unwrap();
        let b = state.add_todo("drop").unwrap();
        assert!(state.delete_todo(b));
        assert_eq!(state.todos.len(), 1);
        assert_eq!(state.todos[0].id, a);
        assert!(!state.delete_todo(b));
    }

    #[test]
    fn test_delete_todo_cascades_view_state() {
        let (mut state, id) = state_with_one_todo();
        state.set_comment_draft(id, "half-typed".to_string());
        state.toggle_comments(id);
        assert!(state.comments_visible(id));

        state.delete_todo(id);
        assert!(!state.comment_drafts.contains_key(&id));
        assert!(!state.show_comments.contains_key(&id));
    }

    #[test]
    fn test_delete_todo_leaves_other_view_state() {
        let mut state = TodoState::new();
        let a = state.add_todo("a").unwrap();
        let b = state.add_todo("b").unwrap();
        state.set_comment_draft(a, "draft a".to_string());
        state.set_comment_draft(b, "draft b".to_string());
        state.toggle_comments(a);

        state.delete_todo(b);
        assert_eq!(state.comment_draft(a), "draft a");
        assert!(state.comments_visible(a));
    }

    #[test]
    fn test_add_comment_from_draft() {
        let (mut state, id) = state_with_one_todo();
        state.set_comment_draft(id, "  looks good  ".to_string());
        let comment_id = state.add_comment(id).expect("comment should be added");

        let comment = &state.todos[0].comments[0];
        assert_eq!(comment.id, comment_id);
        assert_eq!(comment.text, "looks good");
        assert_eq!(comment.created_at, comment_id);
        // Draft cleared on submit
        assert_eq!(state.comment_draft(id), "");
    }

    #[test]
    fn test_add_comment_rejects_blank_draft() {
        let (mut state, id) = state_with_one_todo();
        assert!(state.add_comment(id).is_none());

        state.set_comment_draft(id, "   ".to_string());
        assert!(state.add_comment(id).is_none());
        assert!(state.todos[0].comments.is_empty());
        // Rejected draft stays as typed
        assert_eq!(state.comment_draft(id), "   ");
    }

    #[test]
    fn test_add_comment_unknown_todo_is_noop() {
        let (mut state, _) = state_with_one_todo();
        state.set_comment_draft(404, "orphan".to_string());
        assert!(state.add_comment(404).is_none());
        assert_eq!(state.comment_draft(404), "orphan");
    }

    #[test]
    fn test_comment_ids_unique_within_parent() {
        let (mut state, id) = state_with_one_todo();
        state.set_comment_draft(id, "one".to_string());
        let a = state.add_comment(id).unwrap();
        state.set_comment_draft(id, "two".to_string());
        let b = state.add_comment(id).unwrap();
        assert!(a < b);
        assert_eq!(state.comment_count(id), 2);
    }

    #[test]
    fn test_delete_comment() {
        let (mut state, id) = state_with_one_todo();
        state.set_comment_draft(id, "one".to_string());
        let a = state.add_comment(id).unwrap();
        state.set_comment_draft(id, "two".to_string());
        let b = state.add_comment(id).unwrap();

        assert!(state.delete_comment(id, a));
        assert_eq!(state.comment_count(id), 1);
        assert_eq!(state.todos[0].comments[0].id, b);
    }

    #[test]
    fn test_delete_comment_unknown_ids() {
        let (mut state, id) = state_with_one_todo();
        state.set_comment_draft(id, "only".to_string());
        let comment_id = state.add_comment(id).unwrap();

        assert!(!state.delete_comment(999, comment_id));
        assert!(!state.delete_comment(id, 999));
        assert_eq!(state.comment_count(id), 1);
    }

    #[test]
    fn test_toggle_comments_defaults_collapsed() {
        let (mut state, id) = state_with_one_todo();
        assert!(!state.comments_visible(id));
        state.toggle_comments(id);
        assert!(state.comments_visible(id));
        state.toggle_comments(id);
        assert!(!state.comments_visible(id));
    }

    #[test]
    fn test_comment_count_unknown_todo() {
        let state = TodoState::new();
        assert_eq!(state.comment_count(1), 0);
    }
}
