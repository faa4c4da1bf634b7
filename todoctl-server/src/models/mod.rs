//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod todo;
pub mod validation;

pub use todo::{MessageResponse, NewTodo, ToDoItem, ToDoResponse, TodoTitle, MAX_TITLE_LEN};
pub use validation::ValidationError;
