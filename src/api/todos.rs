//! Todo route handlers.
//!
//! Mutation endpoints re-render the list partial so the page can swap it
//! in place. Lookup failures and unparsable path ids both surface as a
//! bare 404; the cause only goes to the log.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    routing::{delete, get, put},
    Form, Router,
};
use serde::Deserialize;

use super::render;
use super::routes::AppState;

/// Create todo routes, nested under `/todos`.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:todo_id/toggle", put(toggle))
        .route("/:todo_id", delete(remove))
}

#[derive(Debug, Deserialize)]
struct CreateTodoForm {
    /// Title of the new todo; a missing field falls back to "unknown"
    todo: Option<String>,
}

/// GET / - Render the full page.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let open = state.todos.list_by_status(false).await;
    let done = state.todos.list_by_status(true).await;

    Html(render::index_page(&open, &done))
}

/// GET /todos - Render just the list partial.
async fn list(State(state): State<Arc<AppState>>) -> Html<String> {
    render_list(&state).await
}

/// POST /todos - Create an open todo from the `todo` form field.
async fn create(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CreateTodoForm>,
) -> Html<String> {
    let title = form.todo.unwrap_or_else(|| "unknown".to_string());
    let todo = state.todos.add(title, false).await;
    tracing::debug!("Created todo {} ({:?})", todo.id, todo.title);

    render_list(&state).await
}

/// PUT /todos/:todo_id/toggle - Toggle a todo between open and done.
async fn toggle(
    State(state): State<Arc<AppState>>,
    Path(todo_id): Path<String>,
) -> Result<Html<String>, StatusCode> {
    let id = parse_id(&todo_id)?;

    if let Err(e) = state.todos.toggle(id).await {
        tracing::info!("Unable to toggle todo: {}", e);
        return Err(StatusCode::NOT_FOUND);
    }

    Ok(render_list(&state).await)
}

/// DELETE /todos/:todo_id - Delete a todo.
async fn remove(
    State(state): State<Arc<AppState>>,
    Path(todo_id): Path<String>,
) -> Result<Html<String>, StatusCode> {
    let id = parse_id(&todo_id)?;

    if let Err(e) = state.todos.delete(id).await {
        tracing::info!("Unable to delete todo: {}", e);
        return Err(StatusCode::NOT_FOUND);
    }

    Ok(render_list(&state).await)
}

/// Malformed ids are indistinguishable from missing ones at the boundary.
fn parse_id(raw: &str) -> Result<i64, StatusCode> {
    raw.parse().map_err(|e| {
        tracing::info!("Unable to parse todo id {:?}: {}", raw, e);
        StatusCode::NOT_FOUND
    })
}

async fn render_list(state: &AppState) -> Html<String> {
    let open = state.todos.list_by_status(false).await;
    let done = state.todos.list_by_status(true).await;

    Html(render::todo_list(&open, &done))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::todo::TodoRepo;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState {
            config: Config::new("127.0.0.1".to_string(), 0),
            todos: Arc::new(TodoRepo::new()),
        })
    }

    #[tokio::test]
    async fn test_create_defaults_missing_title_to_unknown() {
        let state = test_state();

        let Html(body) = create(
            State(Arc::clone(&state)),
            Form(CreateTodoForm { todo: None }),
        )
        .await;

        assert!(body.contains("unknown"));
        assert_eq!(state.todos.count().await, 1);
    }

    #[tokio::test]
    async fn test_toggle_unparsable_id_is_not_found() {
        let state = test_state();
        state.todos.add("only", false).await;

        let res = toggle(State(Arc::clone(&state)), Path("abc".to_string())).await;

        assert_eq!(res.err(), Some(StatusCode::NOT_FOUND));
        // Nothing toggled.
        assert!(state.todos.list_by_status(true).await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_not_found() {
        let state = test_state();

        let res = remove(State(state), Path("999".to_string())).await;

        assert_eq!(res.err(), Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_toggle_rerenders_the_item_as_done() {
        let state = test_state();
        let todo = state.todos.add("ship it", false).await;

        let res = toggle(State(Arc::clone(&state)), Path(todo.id.to_string())).await;

        let Html(body) = res.expect("toggle should succeed");
        assert!(body.contains("ship it"));
        assert_eq!(state.todos.list_by_status(true).await.len(), 1);
    }
}
