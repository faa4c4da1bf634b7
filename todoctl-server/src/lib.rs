//! todoctl-server: to-do item CRUD over HTTP
//!
//! A single `todos` table in PostgreSQL exposed as JSON endpoints:
//!
//! - `GET /` welcome message
//! - `POST /todos/`, `GET /todos/`
//! - `GET|PUT|DELETE /todos/{id}/`
//!
//! Startup creates and seeds the table (see [`db::connect_and_bootstrap`]);
//! [`http::run_server`] serves until a shutdown signal and closes the pool.

pub mod db;
pub mod http;
pub mod models;

pub use db::{connect_and_bootstrap, DbError};
pub use http::{build_router, run_server, ServerConfig, ServerError};
