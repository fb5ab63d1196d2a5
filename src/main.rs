// src/main.rs

use std::sync::Arc;

use anyhow::Context;
use log::info;

use filmorate::application::commands::popular_films;
use filmorate::application::state::AppState;
use filmorate::config::AppConfig;
use filmorate::db::{create_connection_pool, initialize_database, verify_database_integrity};
use filmorate::events::{create_event_bus, FilmCreated, UserCreated};
use filmorate::repositories::{new_shared_catalog, SnapshotRepository, SqliteSnapshotRepository};
use filmorate::services::PersistenceService;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1. CONFIGURATION
    let config = AppConfig::from_env().context("failed to read configuration")?;
    let db_path = config.database_path();
    info!("Using catalog database at {}", db_path.display());

    // 2. INFRASTRUCTURE
    let pool = Arc::new(create_connection_pool(&db_path)?);
    {
        let conn = pool.get()?;
        initialize_database(&conn)?;
        verify_database_integrity(&conn)?;
    }

    let event_bus = Arc::new(create_event_bus());
    event_bus.subscribe::<FilmCreated, _>(|event| info!("Film added: {}", event.name));
    event_bus.subscribe::<UserCreated, _>(|event| info!("User registered: {}", event.login));

    // 3. CATALOG
    let catalog = new_shared_catalog();
    let snapshot_repo: Arc<dyn SnapshotRepository> =
        Arc::new(SqliteSnapshotRepository::new(pool.clone()));
    let persistence = PersistenceService::new(catalog.clone(), snapshot_repo);
    persistence.load().context("failed to load stored catalog")?;

    // 4. APPLICATION
    let state = AppState::new(&config, catalog.clone(), event_bus);
    {
        let catalog = catalog.read();
        info!(
            "Catalog ready: {} films, {} users",
            catalog.film_count(),
            catalog.user_count()
        );
    }

    let top = popular_films(&state, None)
        .map_err(|e| anyhow::anyhow!("{}: {}", e.message, e.details.unwrap_or_default()))?;
    for (rank, film) in top.iter().enumerate() {
        info!("#{} {} ({} likes)", rank + 1, film.name, film.rate);
    }

    persistence.save().context("failed to store catalog")?;
    Ok(())
}
