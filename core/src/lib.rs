//! Domain model, provider contract and API client for the todo item tracker.
//!
//! # Overview
//! - `types`: `TodoItem`, `PostTodoItem`, `Status`, `TodoFilter` and the
//!   `TodoItemsGetResult` list envelope.
//! - `service`: the `TodoItemsService` provider trait. With the `mock`
//!   feature a `mockall` double, `MockTodoItemsService`, is generated.
//! - `memory`: `InMemoryTodoItemsService`, the provider the server ships with.
//! - `client`: `TodoClient`, a host-does-IO client that builds requests and
//!   parses responses without touching the network.

pub mod client;
pub mod error;
pub mod http;
pub mod memory;
pub mod service;
pub mod types;

pub use client::{TodoClient, TODO_ITEMS_PATH};
pub use error::{ApiError, ServiceError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use memory::InMemoryTodoItemsService;
#[cfg(any(test, feature = "mock"))]
pub use service::MockTodoItemsService;
pub use service::{validate_name, TodoItemsService};
pub use types::{PostTodoItem, Status, TodoFilter, TodoItem, TodoItemsGetResult};
