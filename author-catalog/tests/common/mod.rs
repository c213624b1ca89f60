//! Shared helpers for in-process endpoint tests

#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use author_catalog::prelude::*;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{layer::Context, prelude::*, Layer};

/// Repository double answering with a fixed outcome
#[derive(Clone)]
pub enum StubRepository {
    Authors(Vec<AuthorRecord>),
    Failing(RepositoryError),
}

impl StubRepository {
    pub fn authors(authors: Vec<AuthorRecord>) -> Self {
        Self::Authors(authors)
    }

    pub fn failing(message: &str) -> Self {
        Self::Failing(RepositoryError::database(message))
    }
}

impl AuthorRepository for StubRepository {
    async fn get_all_authors(&self) -> RepositoryResult<Vec<AuthorRecord>> {
        match self {
            Self::Authors(authors) => Ok(authors.clone()),
            Self::Failing(err) => Err(err.clone()),
        }
    }
}

/// Counts events emitted while installed
#[derive(Clone, Default)]
pub struct EventCounter {
    errors: Arc<AtomicUsize>,
    total: Arc<AtomicUsize>,
}

impl EventCounter {
    /// Error-level events
    pub fn count(&self) -> usize {
        self.errors.load(Ordering::SeqCst)
    }

    /// Events at any level
    pub fn total(&self) -> usize {
        self.total.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for EventCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        self.total.fetch_add(1, Ordering::SeqCst);
        if *event.metadata().level() == Level::ERROR {
            self.errors.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Install an event counter as the thread-local subscriber
///
/// `#[tokio::test]` runs on a current-thread runtime, so handler events land
/// on this thread.
pub fn capture_errors() -> (EventCounter, tracing::subscriber::DefaultGuard) {
    let counter = EventCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let guard = tracing::subscriber::set_default(subscriber);
    (counter, guard)
}

pub fn app(repository: StubRepository) -> Router {
    let collator = NameCollator::new("en").unwrap();
    router(AppState::new(Config::default(), repository, collator))
}

/// The router wrapped in the same middleware stack `Server::serve` uses
pub fn served_app(repository: StubRepository) -> Router {
    let config = Config::default();
    let collator = NameCollator::new("en").unwrap();
    let app = router(AppState::new(config.clone(), repository, collator));
    Server::new(config).apply_middleware(app)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

pub fn sample_authors() -> Vec<AuthorRecord> {
    vec![
        AuthorRecord::new("Doe, John", "1990 - 2020"),
        AuthorRecord::new("Smith, Jane", "1985 - 2015"),
        AuthorRecord::new("Williams, Robert", "1980 - 2025"),
    ]
}
