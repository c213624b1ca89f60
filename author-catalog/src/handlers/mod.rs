//! HTTP handlers
//!
//! Handlers are generic over [`AuthorRepository`](crate::repository::AuthorRepository)
//! and are mounted with the concrete repository type by [`crate::routes::router`].

mod authors;

pub use authors::list_authors;
