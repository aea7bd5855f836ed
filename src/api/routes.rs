//! Router assembly and server startup.

use std::sync::Arc;

use axum::{extract::State, response::Json, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::todo::{SharedTodoRepo, TodoRepo};

use super::todos;
use super::types::HealthResponse;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    /// The todo repository, shared by all request handlers
    pub todos: SharedTodoRepo,
}

/// Start the HTTP server.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let todos: SharedTodoRepo = Arc::new(TodoRepo::new());

    if config.seed_demo_todos {
        seed_demo_todos(&todos).await;
    }

    let state = Arc::new(AppState {
        config: config.clone(),
        todos,
    });

    let app = Router::new()
        .route("/", get(todos::index))
        .route("/api/health", get(health))
        .nest("/todos", todos::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::clone(&state));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Seed the todos a fresh instance starts with.
async fn seed_demo_todos(todos: &SharedTodoRepo) {
    todos.add("first todo", false).await;
    todos.add("second todo", false).await;
    todos.add("third todo", false).await;
    todos.add("fourth todo", true).await;
    todos.add("fifth todo", true).await;

    tracing::debug!("Seeded {} demo todos", todos.count().await);
}

/// Wait for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Health check endpoint.
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        todos: state.todos.count().await,
    })
}
