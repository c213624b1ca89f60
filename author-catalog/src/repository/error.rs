//! Repository error types
//!
//! Structured errors for author repository operations. The HTTP layer never
//! exposes these to clients; they are logged server side.
//!
//! # Example
//!
//! ```rust
//! use author_catalog::repository::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
//!
//! let error = RepositoryError::connection_failed("connection refused");
//! assert_eq!(error.kind, RepositoryErrorKind::ConnectionFailed);
//! assert_eq!(error.operation, RepositoryOperation::FindAll);
//! ```

use std::fmt;

/// Operation being performed when the repository error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryOperation {
    /// Loading every author
    FindAll,
    /// Checking that the backing store is reachable
    Ping,
}

impl fmt::Display for RepositoryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FindAll => write!(f, "find_all"),
            Self::Ping => write!(f, "ping"),
        }
    }
}

/// Category of repository error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryErrorKind {
    /// Entity was not found
    NotFound,
    /// Failed to connect to the backing store
    ConnectionFailed,
    /// Operation timed out
    Timeout,
    /// Underlying database error
    DatabaseError,
    /// Row could not be decoded into an author
    SerializationError,
    /// Other unclassified error
    Other,
}

impl fmt::Display for RepositoryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not_found"),
            Self::ConnectionFailed => write!(f, "connection_failed"),
            Self::Timeout => write!(f, "timeout"),
            Self::DatabaseError => write!(f, "database_error"),
            Self::SerializationError => write!(f, "serialization_error"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Structured repository error with operation context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryError {
    /// The operation being performed when the error occurred
    pub operation: RepositoryOperation,
    /// The category of error
    pub kind: RepositoryErrorKind,
    /// Human-readable error message
    pub message: String,
}

impl RepositoryError {
    /// Create a new repository error
    pub fn new(
        operation: RepositoryOperation,
        kind: RepositoryErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
        }
    }

    /// Create a connection failed error for a list query
    pub fn connection_failed(message: impl Into<String>) -> Self {
        Self::new(
            RepositoryOperation::FindAll,
            RepositoryErrorKind::ConnectionFailed,
            message,
        )
    }

    /// Create a timeout error
    pub fn timeout(operation: RepositoryOperation, message: impl Into<String>) -> Self {
        Self::new(operation, RepositoryErrorKind::Timeout, message)
    }

    /// Create a database error for a list query
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(
            RepositoryOperation::FindAll,
            RepositoryErrorKind::DatabaseError,
            message,
        )
    }

    /// Check if this error is transient
    ///
    /// The list handler never retries; this is informational for logs.
    pub fn is_retriable(&self) -> bool {
        matches!(
            self.kind,
            RepositoryErrorKind::ConnectionFailed | RepositoryErrorKind::Timeout
        )
    }

    /// Replace the operation this error is attributed to
    pub fn during(mut self, operation: RepositoryOperation) -> Self {
        self.operation = operation;
        self
    }
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Repository {} error during {}: {}",
            self.kind, self.operation, self.message
        )
    }
}

impl std::error::Error for RepositoryError {}

#[cfg(feature = "database")]
impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        use sqlx::Error as E;

        let kind = match &err {
            E::RowNotFound => RepositoryErrorKind::NotFound,
            E::PoolTimedOut => RepositoryErrorKind::Timeout,
            E::PoolClosed | E::Io(_) | E::Tls(_) | E::WorkerCrashed => {
                RepositoryErrorKind::ConnectionFailed
            }
            E::ColumnDecode { .. } | E::Decode(_) | E::TypeNotFound { .. } => {
                RepositoryErrorKind::SerializationError
            }
            E::Database(_)
            | E::Protocol(_)
            | E::ColumnNotFound(_)
            | E::ColumnIndexOutOfBounds { .. } => RepositoryErrorKind::DatabaseError,
            _ => RepositoryErrorKind::Other,
        };

        Self::new(RepositoryOperation::FindAll, kind, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formatting() {
        let err = RepositoryError::database("relation \"authors\" does not exist");
        let display = err.to_string();
        assert!(display.contains("database_error"));
        assert!(display.contains("find_all"));
        assert!(display.contains("relation \"authors\" does not exist"));
    }

    #[test]
    fn test_is_retriable() {
        assert!(RepositoryError::connection_failed("refused").is_retriable());
        assert!(RepositoryError::timeout(RepositoryOperation::FindAll, "slow").is_retriable());
        assert!(!RepositoryError::database("syntax error").is_retriable());
        assert!(!RepositoryError::new(
            RepositoryOperation::FindAll,
            RepositoryErrorKind::NotFound,
            "gone"
        )
        .is_retriable());
    }

    #[test]
    fn test_during_changes_operation() {
        let err = RepositoryError::connection_failed("refused").during(RepositoryOperation::Ping);
        assert_eq!(err.operation, RepositoryOperation::Ping);
        assert_eq!(err.kind, RepositoryErrorKind::ConnectionFailed);
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(RepositoryOperation::FindAll.to_string(), "find_all");
        assert_eq!(RepositoryOperation::Ping.to_string(), "ping");
    }

    #[cfg(feature = "database")]
    #[test]
    fn test_from_sqlx_pool_timeout() {
        let err = RepositoryError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(err.kind, RepositoryErrorKind::Timeout);
        assert_eq!(err.operation, RepositoryOperation::FindAll);
    }
}
