//! HTTP layer for todoboard.
//!
//! ## Endpoints
//!
//! - `GET /` - Full page with open and done lists
//! - `GET /todos` - The todo-list partial
//! - `POST /todos` - Create an open todo from the `todo` form field
//! - `PUT /todos/{todo_id}/toggle` - Toggle a todo between open and done
//! - `DELETE /todos/{todo_id}` - Delete a todo
//! - `GET /api/health` - Health check

mod render;
mod routes;
mod todos;
mod types;

pub use routes::serve;
pub use types::*;
