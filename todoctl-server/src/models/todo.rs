//! To-do item payloads and title validation
//!
//! `ToDoItem` is the wire shape accepted by create and update. It converts
//! into `NewTodo` only after the title passes validation, so the storage
//! layer never sees an unchecked payload.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Maximum title length, matching the `VARCHAR(255)` column
pub const MAX_TITLE_LEN: usize = 255;

/// Validated to-do title (non-blank, at most 255 characters)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoTitle(String);

impl TodoTitle {
    /// Create a new title, rejecting blank or oversized input.
    ///
    /// # Example
    /// ```
    /// use todoctl_server::models::TodoTitle;
    ///
    /// assert!(TodoTitle::new("Buy milk").is_ok());
    /// assert!(TodoTitle::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }

        if s.chars().count() > MAX_TITLE_LEN {
            return Err(ValidationError::TooLong {
                field: "title",
                max: MAX_TITLE_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for TodoTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Request body for creating or fully replacing a to-do item.
///
/// `title` is optional at the serde level so a missing or null title is
/// reported as a field error instead of a generic parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToDoItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// A to-do payload that passed validation and is ready for storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: TodoTitle,
    pub description: Option<String>,
    pub completed: bool,
}

impl TryFrom<ToDoItem> for NewTodo {
    type Error = ValidationError;

    fn try_from(item: ToDoItem) -> Result<Self, Self::Error> {
        let title = item
            .title
            .ok_or(ValidationError::Missing { field: "title" })?;

        Ok(Self {
            title: TodoTitle::new(&title)?,
            description: item.description,
            completed: item.completed,
        })
    }
}

/// Stored to-do item as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToDoResponse {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

/// Body for plain confirmation responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
