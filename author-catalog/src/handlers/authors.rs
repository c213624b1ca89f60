//! `GET /authors`

use axum::{extract::State, Json};

use crate::{
    error::{Error, Result},
    models::AuthorRecord,
    repository::AuthorRepository,
    state::AppState,
};

/// List every author, sorted by name
///
/// - repository error: 500 `{"message": "Error fetching authors"}`, logged once
/// - empty result: 404 `{"message": "No authors found"}`
/// - otherwise: 200 with the authors sorted by `name` under the pinned collation
pub async fn list_authors<R>(State(state): State<AppState<R>>) -> Result<Json<Vec<AuthorRecord>>>
where
    R: AuthorRepository,
{
    let mut authors = state
        .authors()
        .get_all_authors()
        .await
        .map_err(Error::FetchAuthors)?;

    if authors.is_empty() {
        return Err(Error::NoAuthorsFound);
    }

    state.collator().sort_authors(&mut authors);

    Ok(Json(authors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        collation::NameCollator,
        config::Config,
        repository::{InMemoryAuthorRepository, RepositoryError, RepositoryResult},
    };

    struct BrokenRepository;

    impl AuthorRepository for BrokenRepository {
        async fn get_all_authors(&self) -> RepositoryResult<Vec<AuthorRecord>> {
            Err(RepositoryError::database("Database error"))
        }
    }

    fn state<R: AuthorRepository>(repo: R) -> AppState<R> {
        AppState::new(Config::default(), repo, NameCollator::new("en").unwrap())
    }

    #[tokio::test]
    async fn test_sorts_authors() {
        let repo = InMemoryAuthorRepository::new(vec![
            AuthorRecord::new("Smith, Jane", "1985 - 2015"),
            AuthorRecord::new("Doe, John", "1990 - 2020"),
        ]);

        let Json(authors) = list_authors(State(state(repo))).await.unwrap();

        assert_eq!(
            authors,
            vec![
                AuthorRecord::new("Doe, John", "1990 - 2020"),
                AuthorRecord::new("Smith, Jane", "1985 - 2015"),
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_is_no_authors_found() {
        let result = list_authors(State(state(InMemoryAuthorRepository::default()))).await;
        assert!(matches!(result, Err(Error::NoAuthorsFound)));
    }

    #[tokio::test]
    async fn test_repository_failure_is_fetch_error() {
        let result = list_authors(State(state(BrokenRepository))).await;
        match result {
            Err(Error::FetchAuthors(e)) => assert_eq!(e.message, "Database error"),
            other => panic!("expected FetchAuthors, got {:?}", other.map(|j| j.0)),
        }
    }
}
