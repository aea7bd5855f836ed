//! # todoboard
//!
//! In-memory todo list served over HTTP.
//!
//! This library provides:
//! - A lock-protected todo repository (add / toggle / delete / list)
//! - An axum HTTP layer that renders the list as HTML
//!
//! ## Request Flow
//! 1. Handler receives the request and parses the path / form input
//! 2. Repository performs the mutation or query under its lock
//! 3. The updated list partial (or full page) is rendered back
//!
//! ## Modules
//! - `todo`: the repository and its records
//! - `api`: routes, handlers, and HTML views
//! - `config`: environment-driven server configuration

pub mod api;
pub mod config;
pub mod todo;

pub use config::Config;
pub use todo::{RepoError, SharedTodoRepo, Todo, TodoRepo};
