//! Welcome endpoint

use axum::{routing::get, Json, Router};

use crate::models::MessageResponse;

pub const WELCOME_MESSAGE: &str = "Welcome to the To-Do API!";

/// GET /
async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new(WELCOME_MESSAGE))
}

/// Root routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(root))
}
