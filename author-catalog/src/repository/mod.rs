//! Author data access
//!
//! - [`AuthorRepository`]: the capability handlers depend on
//! - [`InMemoryAuthorRepository`]: vector-backed store, optionally seeded from JSON
//! - `PgAuthorRepository`: PostgreSQL store (requires the `database` feature)

mod error;
mod memory;
mod traits;

#[cfg(feature = "database")]
mod postgres;

pub use error::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
pub use memory::InMemoryAuthorRepository;
pub use traits::{AuthorRepository, RepositoryResult};

#[cfg(feature = "database")]
pub use postgres::PgAuthorRepository;
