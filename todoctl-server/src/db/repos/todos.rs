//! Todo repository
//!
//! Every method runs exactly one statement against the pool:
//! - create/update: INSERT/UPDATE with RETURNING
//! - delete: success only when exactly one row was removed
//! - list: ordered by id so output is stable across calls

use sqlx::{FromRow, PgPool};

use crate::models::NewTodo;
use super::DbError;

const RESOURCE: &str = "To-Do item";

/// Todo record from database
#[derive(Debug, Clone, FromRow)]
pub struct Todo {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    /// Column is nullable; NULL reads as not completed
    pub completed: Option<bool>,
}

/// Todo repository
pub struct TodoRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> TodoRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new todo and return the stored row.
    pub async fn create(&self, todo: &NewTodo) -> Result<Todo, DbError> {
        let row: Todo = sqlx::query_as(
            r#"
            INSERT INTO todos (title, description, completed)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, completed
            "#,
        )
        .bind(todo.title.as_str())
        .bind(todo.description.as_deref())
        .bind(todo.completed)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(id = row.id, "Created todo");
        Ok(row)
    }

    /// List all todos.
    pub async fn list(&self) -> Result<Vec<Todo>, DbError> {
        let rows: Vec<Todo> = sqlx::query_as(
            r#"
            SELECT id, title, description, completed
            FROM todos
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get a single todo by id.
    pub async fn get(&self, id: i32) -> Result<Todo, DbError> {
        sqlx::query_as(
            r#"
            SELECT id, title, description, completed
            FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| not_found(id))
    }

    /// Overwrite all fields of an existing todo.
    pub async fn update(&self, id: i32, todo: &NewTodo) -> Result<Todo, DbError> {
        let row: Todo = sqlx::query_as(
            r#"
            UPDATE todos
            SET title = $1, description = $2, completed = $3
            WHERE id = $4
            RETURNING id, title, description, completed
            "#,
        )
        .bind(todo.title.as_str())
        .bind(todo.description.as_deref())
        .bind(todo.completed)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| not_found(id))?;

        tracing::debug!(id, "Updated todo");
        Ok(row)
    }

    /// Delete a todo by id.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        match result.rows_affected() {
            1 => {
                tracing::debug!(id, "Deleted todo");
                Ok(())
            }
            _ => Err(not_found(id)),
        }
    }
}

fn not_found(id: i32) -> DbError {
    DbError::NotFound {
        resource: RESOURCE,
        id: id.to_string(),
    }
}
