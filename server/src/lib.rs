//! Axum HTTP surface for the todo item tracker.
//!
//! Routes live under `/api/todoitems`; handlers are in `controller`, the
//! outcome-to-status mapping in `error`, flags in `config`.

pub mod config;
pub mod controller;
pub mod error;

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use todo_core::{InMemoryTodoItemsService, Status, TodoItem, TODO_ITEMS_PATH};

pub use config::ServerConfig;
pub use controller::SharedService;
pub use error::ControllerError;

/// Router over an empty in-memory provider.
pub fn app() -> Router {
    router(Arc::new(InMemoryTodoItemsService::new()))
}

/// Router over any provider. CORS is layered on by the caller.
pub fn router(service: SharedService) -> Router {
    use controller::*;

    Router::new()
        .route(TODO_ITEMS_PATH, get(list_todo_items).post(create_todo_item))
        .route(
            &format!("{TODO_ITEMS_PATH}/{{id}}"),
            get(get_todo_item).put(replace_todo_item).delete(delete_todo_item),
        )
        .route("/health", get(|| async { "ok" }))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Serve `app()` until the listener fails.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve `app` until Ctrl-C or SIGTERM.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}

/// Sample records inserted by `--seed-demo`.
pub fn demo_items() -> Vec<TodoItem> {
    [
        ("Write the weekly report", 2, Status::InProgress),
        ("Buy groceries", 1, Status::Pending),
        ("Renew passport", 3, Status::Completed),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, priority, status), id)| TodoItem {
        id,
        name: name.to_string(),
        priority,
        status,
    })
    .collect()
}
