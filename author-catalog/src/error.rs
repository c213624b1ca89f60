//! Error types and HTTP response conversion

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::repository::RepositoryError;

/// Client-facing message when the author list is empty
pub const NO_AUTHORS_FOUND: &str = "No authors found";

/// Client-facing message when the repository fails
pub const ERROR_FETCHING_AUTHORS: &str = "Error fetching authors";

/// Result type alias using the service error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the service
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// Collation locale could not be parsed or loaded
    #[error("Collation error: {0}")]
    Collation(String),

    /// Seed file contents are not a valid author list
    #[error("Invalid seed data: {0}")]
    SeedData(#[from] serde_json::Error),

    /// Database connection error at startup
    #[error("Database error: {0}")]
    Database(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The repository returned an empty author list
    #[error("No authors found")]
    NoAuthorsFound,

    /// The repository failed while listing authors
    #[error("Failed to fetch authors: {0}")]
    FetchAuthors(#[source] RepositoryError),
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            Error::NoAuthorsFound => (StatusCode::NOT_FOUND, ErrorResponse::new(NO_AUTHORS_FOUND)),

            Error::FetchAuthors(ref e) => {
                // Detail stays server side; the body is always the generic message
                tracing::error!(
                    operation = %e.operation,
                    kind = %e.kind,
                    retriable = e.is_retriable(),
                    error = %e,
                    "Error fetching authors"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(ERROR_FETCHING_AUTHORS),
                )
            }

            other => {
                tracing::error!("Internal error: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Internal server error"),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}
