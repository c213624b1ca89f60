//! Repository trait definitions
//!
//! Uses RPITIT (Return Position Impl Trait In Traits) for async methods
//! without `async_trait`.

use std::future::Future;

use super::error::RepositoryError;
use crate::models::AuthorRecord;

/// Result type for repository operations
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Data-access capability for authors
///
/// Handlers are generic over this trait, so tests inject a double instead of
/// touching storage.
///
/// # Example
///
/// ```rust,ignore
/// use author_catalog::repository::{AuthorRepository, RepositoryResult};
///
/// struct FixedAuthors(Vec<AuthorRecord>);
///
/// impl AuthorRepository for FixedAuthors {
///     async fn get_all_authors(&self) -> RepositoryResult<Vec<AuthorRecord>> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
pub trait AuthorRepository: Send + Sync + 'static {
    /// Fetch every author in storage order
    ///
    /// An empty vector is a valid result, not an error.
    fn get_all_authors(&self) -> impl Future<Output = RepositoryResult<Vec<AuthorRecord>>> + Send;

    /// Check that the backing store is reachable
    ///
    /// Used by the readiness probe. Stores without a connection are always
    /// reachable.
    fn ping(&self) -> impl Future<Output = RepositoryResult<()>> + Send {
        async { Ok(()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::RepositoryOperation;

    struct FixedRepository(Vec<AuthorRecord>);

    impl AuthorRepository for FixedRepository {
        async fn get_all_authors(&self) -> RepositoryResult<Vec<AuthorRecord>> {
            Ok(self.0.clone())
        }
    }

    struct UnreachableRepository;

    impl AuthorRepository for UnreachableRepository {
        async fn get_all_authors(&self) -> RepositoryResult<Vec<AuthorRecord>> {
            Err(RepositoryError::connection_failed("refused"))
        }

        async fn ping(&self) -> RepositoryResult<()> {
            Err(RepositoryError::connection_failed("refused").during(RepositoryOperation::Ping))
        }
    }

    #[tokio::test]
    async fn test_default_ping_is_healthy() {
        let repo = FixedRepository(vec![]);
        assert!(repo.ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_overridden_ping() {
        let err = UnreachableRepository.ping().await.unwrap_err();
        assert_eq!(err.operation, RepositoryOperation::Ping);
    }

    #[tokio::test]
    async fn test_get_all_authors_returns_storage_order() {
        let repo = FixedRepository(vec![
            AuthorRecord::new("Smith, Jane", "1985 - 2015"),
            AuthorRecord::new("Doe, John", "1990 - 2020"),
        ]);
        let authors = repo.get_all_authors().await.unwrap();
        assert_eq!(authors[0].name, "Smith, Jane");
        assert_eq!(authors[1].name, "Doe, John");
    }
}
