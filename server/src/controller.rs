//! Todo item handlers: delegate to the provider and map its outcome to a
//! status code.
//!
//! | Provider outcome          | Response          |
//! |---------------------------|-------------------|
//! | `Err(InvalidData)`        | 400, no body      |
//! | `Ok(None)` / `Ok(false)`  | 404, no body      |
//! | `Ok(value)` / `Ok(true)`  | 200 (+ JSON body) |
//! | `Err(Internal)`           | 500, logged       |
//!
//! InvalidData is checked by the provider before existence, so a request that
//! is both malformed and aimed at a missing id answers 400.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use todo_core::{PostTodoItem, TodoFilter, TodoItem, TodoItemsGetResult, TodoItemsService};

use crate::error::ControllerError;

/// Provider shared by every handler.
pub type SharedService = Arc<dyn TodoItemsService>;

pub async fn list_todo_items(
    State(service): State<SharedService>,
    Query(filter): Query<TodoFilter>,
) -> Result<Json<TodoItemsGetResult>, ControllerError> {
    let tasks = service.get(&filter).await?;
    tracing::debug!(count = tasks.len(), ?filter, "listed todo items");
    Ok(Json(TodoItemsGetResult::new(tasks)))
}

pub async fn get_todo_item(
    State(service): State<SharedService>,
    Path(id): Path<i64>,
) -> Result<Json<TodoItem>, ControllerError> {
    let item = service.get_by_id(id).await?.ok_or(ControllerError::NotFound(id))?;
    tracing::debug!(id, "todo item fetched");
    Ok(Json(item))
}

pub async fn create_todo_item(
    State(service): State<SharedService>,
    Json(input): Json<PostTodoItem>,
) -> Result<Json<TodoItem>, ControllerError> {
    let created = service.add(input).await?;
    tracing::info!(id = created.id, "todo item created");
    Ok(Json(created))
}

pub async fn replace_todo_item(
    State(service): State<SharedService>,
    Path(id): Path<i64>,
    Json(input): Json<TodoItem>,
) -> Result<Json<TodoItem>, ControllerError> {
    let updated = service
        .update(id, input)
        .await?
        .ok_or(ControllerError::NotFound(id))?;
    tracing::info!(id, "todo item replaced");
    Ok(Json(updated))
}

pub async fn delete_todo_item(
    State(service): State<SharedService>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ControllerError> {
    if !service.remove(id).await? {
        return Err(ControllerError::NotFound(id));
    }
    tracing::info!(id, "todo item deleted");
    Ok(StatusCode::OK)
}
