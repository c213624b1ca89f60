//! author-catalog service binary

use author_catalog::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    init_tracing(&config)?;

    let collator = NameCollator::new(&config.catalog.collation_locale)?;
    info!(locale = %collator.locale(), "Author names collated");

    #[cfg(feature = "database")]
    if let Some(database) = config.database.clone() {
        let repository = PgAuthorRepository::connect(&database).await?;
        return run(config, repository, collator).await;
    }

    #[cfg(not(feature = "database"))]
    if config.database.is_some() {
        warn!("Database configured but the `database` feature is disabled; using in-memory authors");
    }

    let repository = match config.catalog.seed_file.as_deref() {
        Some(path) => InMemoryAuthorRepository::from_seed_file(path).await?,
        None => {
            warn!("No seed file configured; GET /authors will answer 404");
            InMemoryAuthorRepository::default()
        }
    };

    run(config, repository, collator).await
}

async fn run<R>(config: Config, repository: R, collator: NameCollator) -> Result<()>
where
    R: AuthorRepository,
{
    let state = AppState::new(config.clone(), repository, collator);

    Server::new(config).serve(router(state)).await
}
