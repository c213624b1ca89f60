//! Router assembly

use axum::{routing::get, Router};

use crate::{
    handlers::list_authors,
    health::{health, readiness},
    repository::AuthorRepository,
    state::AppState,
};

/// Build the application router
///
/// Transport middleware is added by [`Server::serve`](crate::server::Server::serve),
/// so this router can be driven directly in tests.
pub fn router<R>(state: AppState<R>) -> Router
where
    R: AuthorRepository,
{
    Router::new()
        .route("/authors", get(list_authors::<R>))
        .route("/health", get(health::<R>))
        .route("/ready", get(readiness::<R>))
        .with_state(state)
}
