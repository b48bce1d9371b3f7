//! Domain DTOs for the todo item API.
//!
//! # Design
//! The same types are used by the server (request bodies, responses) and by
//! `TodoClient`. Request bodies default every missing field so that a missing
//! `name` reaches the provider and is reported as invalid data instead of
//! failing JSON extraction.

use serde::{Deserialize, Serialize};

/// Progress of a todo item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Pending,
    InProgress,
    Completed,
}

/// A stored todo item. `id` is assigned by the provider and never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoItem {
    pub id: i64,
    pub name: String,
    pub priority: i32,
    pub status: Status,
}

/// Request payload for creating a todo item; the provider assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostTodoItem {
    pub name: String,
    pub priority: i32,
    pub status: Status,
}

impl PostTodoItem {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Optional filters for listing todo items. Absent fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl TodoFilter {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.priority.is_none() && self.status.is_none()
    }

    /// Name matches as a case-insensitive substring; the rest match exactly.
    pub fn matches(&self, item: &TodoItem) -> bool {
        let name_ok = self
            .name
            .as_deref()
            .is_none_or(|name| item.name.to_lowercase().contains(&name.to_lowercase()));
        name_ok
            && self.priority.is_none_or(|p| item.priority == p)
            && self.status.is_none_or(|s| item.status == s)
    }
}

/// Result of a list query. Built per request, never stored.
///
/// `count` always equals the number of tasks: values come from `new`, and
/// deserialization rejects a body whose `count` disagrees with `tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGetResult")]
pub struct TodoItemsGetResult {
    tasks: Vec<TodoItem>,
    count: usize,
}

impl TodoItemsGetResult {
    pub fn new(tasks: Vec<TodoItem>) -> Self {
        let count = tasks.len();
        Self { tasks, count }
    }

    pub fn tasks(&self) -> &[TodoItem] {
        &self.tasks
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn into_tasks(self) -> Vec<TodoItem> {
        self.tasks
    }
}

#[derive(Deserialize)]
struct RawGetResult {
    tasks: Vec<TodoItem>,
    count: usize,
}

impl TryFrom<RawGetResult> for TodoItemsGetResult {
    type Error = String;

    fn try_from(raw: RawGetResult) -> Result<Self, Self::Error> {
        if raw.count != raw.tasks.len() {
            return Err(format!(
                "count {} does not match {} tasks",
                raw.count,
                raw.tasks.len()
            ));
        }
        Ok(Self::new(raw.tasks))
    }
}
