//! In-memory author repository
//!
//! Default backend when no database is configured. Optionally seeded from a
//! JSON file holding an array of `{ "name": ..., "lifespan": ... }` objects.

use std::path::Path;

use super::traits::{AuthorRepository, RepositoryResult};
use crate::{error::Result, models::AuthorRecord};

/// Author repository backed by a vector
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuthorRepository {
    authors: Vec<AuthorRecord>,
}

impl InMemoryAuthorRepository {
    /// Create a repository holding the given authors
    pub fn new(authors: Vec<AuthorRecord>) -> Self {
        Self { authors }
    }

    /// Load authors from a JSON seed file
    pub async fn from_seed_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read(path).await?;
        let authors: Vec<AuthorRecord> = serde_json::from_slice(&raw)?;

        tracing::info!(
            path = %path.display(),
            count = authors.len(),
            "Loaded author seed file"
        );

        Ok(Self::new(authors))
    }

    /// Number of stored authors
    pub fn len(&self) -> usize {
        self.authors.len()
    }

    /// Whether the repository holds no authors
    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }
}

impl AuthorRepository for InMemoryAuthorRepository {
    async fn get_all_authors(&self) -> RepositoryResult<Vec<AuthorRecord>> {
        Ok(self.authors.clone())
    }
}
