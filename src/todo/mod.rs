//! Todo records and the in-memory repository.

mod repo;

pub use repo::{RepoError, SharedTodoRepo, TodoRepo};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier, assigned by the repository at creation
    pub id: i64,

    /// Display title
    pub title: String,

    /// When the item was created
    pub created_at: DateTime<Utc>,

    /// When the item was completed; `None` while it is still open
    pub completed_at: Option<DateTime<Utc>>,
}

impl Todo {
    /// Whether the item has been completed.
    pub fn is_done(&self) -> bool {
        self.completed_at.is_some()
    }
}
