//! Application state management

use std::sync::Arc;

use crate::{collation::NameCollator, config::Config, repository::AuthorRepository};

/// Application state shared across handlers
///
/// Read-only after construction; cloning copies three `Arc`s.
pub struct AppState<R>
where
    R: AuthorRepository,
{
    config: Arc<Config>,
    authors: Arc<R>,
    collator: Arc<NameCollator>,
}

impl<R> Clone for AppState<R>
where
    R: AuthorRepository,
{
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            authors: Arc::clone(&self.authors),
            collator: Arc::clone(&self.collator),
        }
    }
}

impl<R> AppState<R>
where
    R: AuthorRepository,
{
    /// Create a new AppState
    pub fn new(config: Config, authors: R, collator: NameCollator) -> Self {
        Self {
            config: Arc::new(config),
            authors: Arc::new(authors),
            collator: Arc::new(collator),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the author repository
    pub fn authors(&self) -> &R {
        &self.authors
    }

    /// Get the name collator
    pub fn collator(&self) -> &NameCollator {
        &self.collator
    }
}
