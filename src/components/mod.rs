//! UI Components
//!
//! Reusable Leptos components.

mod comment_panel;
mod delete_confirm_button;
mod todo_input;
mod todo_item;
mod todo_list;

pub use comment_panel::CommentPanel;
pub use delete_confirm_button::DeleteConfirmButton;
pub use todo_input::TodoInput;
pub use todo_item::TodoItem;
pub use todo_list::TodoListView;
