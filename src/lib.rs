//! Bookshelf: REST API for books and their reviews, backed by PostgreSQL.

pub mod app;
pub mod config;
pub mod error;
pub mod migration;
pub mod model;
pub mod response;
pub mod state;
pub mod store;
pub mod handlers;
pub mod routes;

pub use app::{build_app, MAX_BODY_BYTES};
pub use config::{DbConfig, ServerConfig};
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use model::{Book, NewBook, NewReview, Review};
pub use routes::{book_routes, common_routes};
pub use state::AppState;
pub use store::{BookStore, PgStore};
