//! Stateless HTTP request builder and response parser for the todo item API.
//!
//! # Design
//! `TodoClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`. The caller executes the HTTP round trip.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{PostTodoItem, TodoFilter, TodoItem, TodoItemsGetResult};

/// Route prefix served by `todo-server`.
pub const TODO_ITEMS_PATH: &str = "/api/todoitems";

/// Synchronous, stateless client for the todo item API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}{TODO_ITEMS_PATH}", self.base_url)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}{TODO_ITEMS_PATH}/{id}", self.base_url)
    }

    pub fn build_list_todo_items(&self, filter: &TodoFilter) -> Result<HttpRequest, ApiError> {
        let mut path = self.collection_url();
        if !filter.is_empty() {
            let query = serde_urlencoded::to_string(filter)
                .map_err(|e| ApiError::Serialization(e.to_string()))?;
            path.push('?');
            path.push_str(&query);
        }
        Ok(HttpRequest {
            method: HttpMethod::Get,
            path,
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn build_get_todo_item(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_todo_item(&self, input: &PostTodoItem) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.collection_url(),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_replace_todo_item(&self, id: i64, input: &TodoItem) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.item_url(id),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_delete_todo_item(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_todo_items(&self, response: HttpResponse) -> Result<TodoItemsGetResult, ApiError> {
        parse_json(response)
    }

    pub fn parse_get_todo_item(&self, response: HttpResponse) -> Result<TodoItem, ApiError> {
        parse_json(response)
    }

    pub fn parse_create_todo_item(&self, response: HttpResponse) -> Result<TodoItem, ApiError> {
        parse_json(response)
    }

    pub fn parse_replace_todo_item(&self, response: HttpResponse) -> Result<TodoItem, ApiError> {
        parse_json(response)
    }

    pub fn parse_delete_todo_item(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json<T: serde::Serialize>(input: &T) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Every successful operation answers 200; map the rest to `ApiError`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    match response.status {
        200 => Ok(()),
        400 => Err(ApiError::BadRequest),
        404 => Err(ApiError::NotFound),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}
