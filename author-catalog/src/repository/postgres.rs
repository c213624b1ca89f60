//! PostgreSQL author repository
//!
//! Expects a table shaped like:
//!
//! ```sql
//! CREATE TABLE authors (
//!     id       BIGSERIAL PRIMARY KEY,
//!     name     TEXT NOT NULL,
//!     lifespan TEXT NOT NULL
//! );
//! ```

use sqlx::PgPool;

use super::error::{RepositoryError, RepositoryOperation};
use super::traits::{AuthorRepository, RepositoryResult};
use crate::{config::DatabaseConfig, database, error::Result, models::AuthorRecord};

const SELECT_ALL_AUTHORS: &str = "SELECT name, lifespan FROM authors";

/// Author repository reading from PostgreSQL
#[derive(Debug, Clone)]
pub struct PgAuthorRepository {
    pool: PgPool,
}

impl PgAuthorRepository {
    /// Wrap an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect using the database configuration
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let pool = database::create_pool(config).await?;
        Ok(Self::new(pool))
    }
}

impl AuthorRepository for PgAuthorRepository {
    async fn get_all_authors(&self) -> RepositoryResult<Vec<AuthorRecord>> {
        sqlx::query_as::<_, AuthorRecord>(SELECT_ALL_AUTHORS)
            .fetch_all(&self.pool)
            .await
            .map_err(RepositoryError::from)
    }

    async fn ping(&self) -> RepositoryResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| RepositoryError::from(e).during(RepositoryOperation::Ping))
    }
}
