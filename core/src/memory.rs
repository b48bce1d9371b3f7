//! In-memory todo item provider.
//!
//! # Design
//! Records live in a `BTreeMap` keyed by id behind a `tokio::sync::RwLock`, so
//! listing returns items in id order and reads never block each other. Ids
//! start at 1, grow monotonically and are never handed out twice, even after
//! a delete. The name is validated before any lookup, which makes an invalid
//! replace body a 400 even for an unknown id. Seeding through `with_items`
//! applies the same rules as `add`: positive unique ids and non-blank names.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::ServiceError;
use crate::service::{validate_name, TodoItemsService};
use crate::types::{PostTodoItem, TodoFilter, TodoItem};

#[derive(Debug)]
struct Store {
    items: BTreeMap<i64, TodoItem>,
    next_id: i64,
}

/// `TodoItemsService` backed by a `BTreeMap` behind an async `RwLock`.
///
/// Ids start at 1 and are never reused, even after deletes.
#[derive(Debug)]
pub struct InMemoryTodoItemsService {
    store: RwLock<Store>,
}

impl Default for InMemoryTodoItemsService {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTodoItemsService {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                items: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Seed with existing records, keeping their ids.
    ///
    /// Fails with `InvalidData` on a non-positive or duplicate id, a blank
    /// name, or when the largest id leaves no room for the next one.
    pub fn with_items(items: impl IntoIterator<Item = TodoItem>) -> Result<Self, ServiceError> {
        let mut map = BTreeMap::new();
        for item in items {
            if item.id <= 0 {
                return Err(ServiceError::invalid(format!("id must be positive, got {}", item.id)));
            }
            validate_name(&item.name)?;
            if let Some(previous) = map.insert(item.id, item) {
                return Err(ServiceError::invalid(format!("duplicate id {}", previous.id)));
            }
        }
        let next_id = match map.keys().next_back() {
            None => 1,
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| ServiceError::invalid(format!("id {max} leaves no room for new items")))?,
        };
        Ok(Self {
            store: RwLock::new(Store { items: map, next_id }),
        })
    }

    #[cfg(test)]
    fn with_next_id(next_id: i64) -> Self {
        Self {
            store: RwLock::new(Store {
                items: BTreeMap::new(),
                next_id,
            }),
        }
    }
}

#[async_trait]
impl TodoItemsService for InMemoryTodoItemsService {
    async fn get(&self, filter: &TodoFilter) -> Result<Vec<TodoItem>, ServiceError> {
        let store = self.store.read().await;
        Ok(store.items.values().filter(|item| filter.matches(item)).cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<TodoItem>, ServiceError> {
        let store = self.store.read().await;
        Ok(store.items.get(&id).cloned())
    }

    async fn add(&self, item: PostTodoItem) -> Result<TodoItem, ServiceError> {
        validate_name(&item.name)?;
        let mut store = self.store.write().await;
        let id = store.next_id;
        store.next_id = id
            .checked_add(1)
            .ok_or_else(|| ServiceError::Internal(anyhow::anyhow!("todo item id space exhausted")))?;
        let created = TodoItem {
            id,
            name: item.name,
            priority: item.priority,
            status: item.status,
        };
        store.items.insert(id, created.clone());
        tracing::debug!(id, "todo item added");
        Ok(created)
    }

    async fn update(&self, id: i64, item: TodoItem) -> Result<Option<TodoItem>, ServiceError> {
        validate_name(&item.name)?;
        let mut store = self.store.write().await;
        let Some(existing) = store.items.get_mut(&id) else {
            return Ok(None);
        };
        existing.name = item.name;
        existing.priority = item.priority;
        existing.status = item.status;
        tracing::debug!(id, "todo item updated");
        Ok(Some(existing.clone()))
    }

    async fn remove(&self, id: i64) -> Result<bool, ServiceError> {
        if id <= 0 {
            return Err(ServiceError::invalid(format!("id must be positive, got {id}")));
        }
        let removed = self.store.write().await.items.remove(&id).is_some();
        if removed {
            tracing::debug!(id, "todo item removed");
        }
        Ok(removed)
    }
}
