//! API response types.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status, `"ok"` whenever the server answers
    pub status: String,

    /// Crate version
    pub version: String,

    /// Number of todos currently held in memory
    pub todos: usize,
}
