// src/application/state.rs

use std::sync::Arc;

use crate::config::AppConfig;
use crate::events::EventBus;
use crate::repositories::{
    FilmRepository, InMemoryFilmRepository, InMemoryUserRepository, SharedCatalog, UserRepository,
};
use crate::services::{FilmService, GenreService, UserService};

/// Application state shared by every command.
/// All services are Arc-wrapped and read the same catalog.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub film_service: Arc<FilmService>,
    pub user_service: Arc<UserService>,
    pub genre_service: Arc<GenreService>,
    pub popular_default_count: usize,
}

impl AppState {
    pub fn new(config: &AppConfig, catalog: SharedCatalog, event_bus: Arc<EventBus>) -> Self {
        let film_repo: Arc<dyn FilmRepository> =
            Arc::new(InMemoryFilmRepository::new(catalog.clone()));
        let user_repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new(catalog));

        let film_service = Arc::new(FilmService::new(
            film_repo,
            user_repo.clone(),
            event_bus.clone(),
        ));
        let user_service = Arc::new(UserService::new(user_repo, event_bus.clone()));

        Self {
            event_bus,
            film_service,
            user_service,
            genre_service: Arc::new(GenreService::new()),
            popular_default_count: config.popular_default_count,
        }
    }
}
