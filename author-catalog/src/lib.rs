//! # author-catalog
//!
//! Library catalog service exposing `GET /authors`: every author in the
//! catalog, ordered by name under a pinned, locale-aware collation.
//!
//! | Repository result | Response |
//! |-------------------|----------|
//! | non-empty list    | `200` JSON array of `{ "name", "lifespan" }`, sorted by `name` |
//! | empty list        | `404` `{ "message": "No authors found" }` |
//! | error             | `500` `{ "message": "Error fetching authors" }`, error logged server side |
//!
//! ## Example
//!
//! ```rust,no_run
//! use author_catalog::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config)?;
//!
//!     let repository = InMemoryAuthorRepository::new(vec![
//!         AuthorRecord::new("Doe, John", "1990 - 2020"),
//!     ]);
//!     let collator = NameCollator::new(&config.catalog.collation_locale)?;
//!     let state = AppState::new(config.clone(), repository, collator);
//!
//!     Server::new(config).serve(router(state)).await
//! }
//! ```

pub mod collation;
pub mod config;
pub mod error;
pub mod handlers;
pub mod health;
pub mod ids;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod repository;
pub mod routes;
pub mod server;
pub mod state;

#[cfg(feature = "database")]
pub mod database;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::collation::NameCollator;
    pub use crate::config::{CatalogConfig, Config, DatabaseConfig};
    pub use crate::error::{Error, ErrorResponse, Result};
    pub use crate::handlers::list_authors;
    pub use crate::health::{health, readiness};
    pub use crate::models::AuthorRecord;
    pub use crate::observability::init_tracing;
    pub use crate::repository::{
        AuthorRepository, InMemoryAuthorRepository, RepositoryError, RepositoryErrorKind,
        RepositoryOperation, RepositoryResult,
    };
    pub use crate::routes::router;
    pub use crate::server::Server;
    pub use crate::state::AppState;

    #[cfg(feature = "database")]
    pub use crate::repository::PgAuthorRepository;

    pub use tracing::{debug, error, info, warn};
}
