//! Provider contract for todo item storage.
//!
//! The HTTP layer only ever talks to `dyn TodoItemsService`. Absence is
//! reported through the return value (`None`, `false`); `ServiceError` is
//! reserved for invalid data and unexpected faults.

use async_trait::async_trait;

use crate::error::ServiceError;
use crate::types::{PostTodoItem, TodoFilter, TodoItem};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait TodoItemsService: Send + Sync {
    /// Items matching `filter`, in ascending id order.
    async fn get(&self, filter: &TodoFilter) -> Result<Vec<TodoItem>, ServiceError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<TodoItem>, ServiceError>;

    /// Store a new item and return it with its assigned id.
    ///
    /// Fails with `InvalidData` when the name is empty.
    async fn add(&self, item: PostTodoItem) -> Result<TodoItem, ServiceError>;

    /// Replace name, priority and status of item `id`.
    ///
    /// The name is validated before `id` is looked up, so an invalid name
    /// wins over an unknown id.
    async fn update(&self, id: i64, item: TodoItem) -> Result<Option<TodoItem>, ServiceError>;

    /// `true` if the item existed and was deleted. Fails with `InvalidData`
    /// for `id <= 0`.
    async fn remove(&self, id: i64) -> Result<bool, ServiceError>;
}

/// Checks the name invariant shared by `add` and `update`.
pub fn validate_name(name: &str) -> Result<(), ServiceError> {
    if name.trim().is_empty() {
        return Err(ServiceError::invalid("name must not be empty"));
    }
    Ok(())
}
