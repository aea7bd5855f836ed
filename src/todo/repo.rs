//! In-memory todo repository (non-persistent).

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tokio::sync::RwLock;

use super::Todo;

/// Error returned by repository lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepoError {
    #[error("no todo with id {id}")]
    NotFound { id: i64 },
}

/// Shared handle to the repository, cloned into request handlers.
pub type SharedTodoRepo = Arc<TodoRepo>;

/// In-memory todo store.
///
/// Mutations serialize on the write lock; list reads share the read lock.
/// Id assignment is atomic and independent of the lock, so ids stay unique
/// under concurrent adds. Ids are never reused, including after deletes.
pub struct TodoRepo {
    todos: RwLock<Vec<Todo>>,
    next_id: AtomicI64,
}

impl TodoRepo {
    pub fn new() -> Self {
        Self {
            todos: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Append a new todo. `done` marks it completed immediately.
    ///
    /// Returns a clone of the stored record.
    pub async fn add(&self, title: impl Into<String>, done: bool) -> Todo {
        let now = Utc::now();
        let todo = Todo {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            title: title.into(),
            created_at: now,
            completed_at: done.then_some(now),
        };

        self.todos.write().await.push(todo.clone());
        todo
    }

    /// Flip a todo between open and done, stamping the completion time.
    ///
    /// The stored record is mutated under the write lock, so concurrent
    /// toggles on the same id cannot lose updates.
    pub async fn toggle(&self, id: i64) -> Result<Todo, RepoError> {
        let mut todos = self.todos.write().await;
        let todo = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(RepoError::NotFound { id })?;

        todo.completed_at = match todo.completed_at {
            None => Some(Utc::now()),
            Some(_) => None,
        };

        Ok(todo.clone())
    }

    /// Remove the todo with the given id, keeping the relative order of
    /// the rest. The repository is unchanged when no todo matches.
    pub async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut todos = self.todos.write().await;
        let idx = todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(RepoError::NotFound { id })?;

        todos.remove(idx);
        Ok(())
    }

    /// All todos matching the given completion state, most recent first:
    /// by completion time when both sides have one, by creation time
    /// otherwise. The sort is stable, so timestamp ties keep insertion
    /// order.
    pub async fn list_by_status(&self, done: bool) -> Vec<Todo> {
        let todos = self.todos.read().await;
        let mut res: Vec<Todo> = todos
            .iter()
            .filter(|t| t.is_done() == done)
            .cloned()
            .collect();

        res.sort_by(|a, b| match (a.completed_at, b.completed_at) {
            (Some(a_done), Some(b_done)) => b_done.cmp(&a_done),
            _ => b.created_at.cmp(&a.created_at),
        });

        res
    }

    /// Number of todos currently stored.
    pub async fn count(&self) -> usize {
        self.todos.read().await.len()
    }
}

impl Default for TodoRepo {
    fn default() -> Self {
        Self::new()
    }
}
