//! To-do item endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::repos::{Todo, TodoRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{TodoId, ValidJson};
use crate::http::server::AppState;
use crate::models::{MessageResponse, NewTodo, ToDoItem, ToDoResponse};

pub const DELETED_MESSAGE: &str = "To-Do item deleted successfully";

impl From<Todo> for ToDoResponse {
    fn from(t: Todo) -> Self {
        Self {
            id: t.id,
            title: t.title,
            description: t.description,
            completed: t.completed.unwrap_or(false),
        }
    }
}

/// POST /todos/ - create a new todo
async fn create_todo(
    State(state): State<Arc<AppState>>,
    ValidJson(item): ValidJson<ToDoItem>,
) -> Result<Json<ToDoResponse>, ApiError> {
    let todo = NewTodo::try_from(item)?;
    let created = TodoRepo::new(&state.pool).create(&todo).await?;
    Ok(Json(ToDoResponse::from(created)))
}

/// GET /todos/ - list all todos
async fn list_todos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ToDoResponse>>, ApiError> {
    let todos = TodoRepo::new(&state.pool).list().await?;
    Ok(Json(todos.into_iter().map(ToDoResponse::from).collect()))
}

/// GET /todos/{id}/ - get a single todo
async fn get_todo(
    State(state): State<Arc<AppState>>,
    TodoId(id): TodoId,
) -> Result<Json<ToDoResponse>, ApiError> {
    let todo = TodoRepo::new(&state.pool).get(id).await?;
    Ok(Json(ToDoResponse::from(todo)))
}

/// PUT /todos/{id}/ - replace every field of a todo
async fn update_todo(
    State(state): State<Arc<AppState>>,
    TodoId(id): TodoId,
    ValidJson(item): ValidJson<ToDoItem>,
) -> Result<Json<ToDoResponse>, ApiError> {
    let todo = NewTodo::try_from(item)?;
    let updated = TodoRepo::new(&state.pool).update(id, &todo).await?;
    Ok(Json(ToDoResponse::from(updated)))
}

/// DELETE /todos/{id}/ - delete a todo
async fn delete_todo(
    State(state): State<Arc<AppState>>,
    TodoId(id): TodoId,
) -> Result<Json<MessageResponse>, ApiError> {
    TodoRepo::new(&state.pool).delete(id).await?;
    Ok(Json(MessageResponse::new(DELETED_MESSAGE)))
}

/// Todo routes, served with and without the trailing slash
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .route(
            "/todos/{id}/",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_completed_reads_as_false() {
        let row = Todo {
            id: 1,
            title: "Reading".into(),
            description: None,
            completed: None,
        };
        let response = ToDoResponse::from(row);
        assert!(!response.completed);
        assert_eq!(response.id, 1);
    }
}
