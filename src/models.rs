//! Data Models
//!
//! Plain data structures for todos and their comment threads.

use serde::{Deserialize, Serialize};

/// A todo item with completion status and an attached comment thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Creation timestamp in ms, unique and monotonic
    pub id: i64,
    pub text: String,
    pub completed: bool,
    /// Comments in insertion order
    pub comments: Vec<Comment>,
}

/// A timestamped text annotation attached to a single todo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Creation timestamp in ms, unique within the parent todo
    pub id: i64,
    pub text: String,
    /// Ms since the Unix epoch
    pub created_at: i64,
}
