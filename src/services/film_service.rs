// src/services/film_service.rs
//
// Catalog operations: film CRUD, likes and the popularity ranking.
//
// Every mutation runs in the same order:
// 1. validate fields (ValidationError, nothing stored)
// 2. check referenced identities (NotFound, nothing stored)
// 3. mutate through the repository
// 4. emit the domain event

use chrono::NaiveDate;
use log::{info, warn};
use std::sync::Arc;

use crate::domain::{validate_film, Film, FilmId, GenreId, UserId};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, FilmCreated, FilmDeleted, FilmUpdated, LikeAdded, LikeRemoved};
use crate::repositories::{FilmRepository, UserRepository};

#[derive(Debug, Clone)]
pub struct CreateFilmRequest {
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i64,
    pub genres: Vec<GenreId>,
}

/// Full replacement of the mutable film fields.
/// Likes are not part of the request and are never touched by an update.
#[derive(Debug, Clone)]
pub struct UpdateFilmRequest {
    pub film_id: FilmId,
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i64,
    pub genres: Vec<GenreId>,
}

pub struct FilmService {
    film_repo: Arc<dyn FilmRepository>,
    user_repo: Arc<dyn UserRepository>,
    event_bus: Arc<EventBus>,
}

impl FilmService {
    pub fn new(
        film_repo: Arc<dyn FilmRepository>,
        user_repo: Arc<dyn UserRepository>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            film_repo,
            user_repo,
            event_bus,
        }
    }

    pub fn create_film(&self, request: CreateFilmRequest) -> AppResult<Film> {
        let film = Film::new(
            request.name,
            request.description,
            request.release_date,
            request.duration,
        )
        .with_genres(request.genres);

        validate_film(&film).inspect_err(|e| warn!("Rejected new film: {}", e))?;
        let film = self.film_repo.add(film)?;

        self.event_bus
            .emit(FilmCreated::new(film.id, film.name.clone()));
        Ok(film)
    }

    pub fn update_film(&self, request: UpdateFilmRequest) -> AppResult<Film> {
        let mut film = Film::new(
            request.name,
            request.description,
            request.release_date,
            request.duration,
        )
        .with_genres(request.genres);
        film.id = request.film_id;

        validate_film(&film)
            .inspect_err(|e| warn!("Rejected update of film id={}: {}", film.id, e))?;
        self.ensure_film_exists(film.id)?;
        let film = self.film_repo.update(film)?;

        self.event_bus.emit(FilmUpdated::new(film.id));
        Ok(film)
    }

    pub fn get_film_by_id(&self, film_id: FilmId) -> AppResult<Film> {
        self.film_repo.get_by_id(film_id)?.ok_or_else(|| {
            info!("Film id={} not found", film_id);
            film_not_found(film_id)
        })
    }

    /// All films ordered by identity
    pub fn get_all_films(&self) -> AppResult<Vec<Film>> {
        self.film_repo.list_all()
    }

    pub fn delete_film(&self, film_id: FilmId) -> AppResult<()> {
        self.ensure_film_exists(film_id)?;
        self.film_repo.delete(film_id)?;

        self.event_bus.emit(FilmDeleted::new(film_id));
        Ok(())
    }

    /// Liking twice is not an error; the film keeps one like from the user
    pub fn add_like(&self, film_id: FilmId, user_id: UserId) -> AppResult<()> {
        self.ensure_film_exists(film_id)?;
        self.ensure_user_exists(user_id)?;
        if self.film_repo.add_like(film_id, user_id)? {
            self.event_bus.emit(LikeAdded::new(film_id, user_id));
        }
        Ok(())
    }

    pub fn remove_like(&self, film_id: FilmId, user_id: UserId) -> AppResult<()> {
        self.ensure_film_exists(film_id)?;
        self.ensure_user_exists(user_id)?;
        self.film_repo
            .remove_like(film_id, user_id)
            .inspect_err(|e| info!("{}", e))?;

        self.event_bus.emit(LikeRemoved::new(film_id, user_id));
        Ok(())
    }

    /// Users who liked the film, ascending
    pub fn likes_of(&self, film_id: FilmId) -> AppResult<Vec<UserId>> {
        Ok(self.get_film_by_id(film_id)?.likes.into_iter().collect())
    }

    /// Films by descending like count, ties by ascending identity,
    /// at most `count` of them. Recomputed on every call.
    pub fn popular_films(&self, count: usize) -> AppResult<Vec<Film>> {
        if count == 0 {
            return Err(AppError::validation(
                "The number of films in the list must be positive",
            ));
        }

        let mut films = self.film_repo.list_all()?;
        films.sort_by(|a, b| {
            b.like_count()
                .cmp(&a.like_count())
                .then_with(|| a.id.cmp(&b.id))
        });
        films.truncate(count);

        info!("Sent a list of {} films with the most likes", films.len());
        Ok(films)
    }

    fn ensure_film_exists(&self, film_id: FilmId) -> AppResult<()> {
        if !self.film_repo.exists(film_id)? {
            info!("Film id={} not found", film_id);
            return Err(film_not_found(film_id));
        }
        Ok(())
    }

    fn ensure_user_exists(&self, user_id: UserId) -> AppResult<()> {
        if !self.user_repo.exists(user_id)? {
            info!("User id={} not found", user_id);
            return Err(AppError::NotFound(format!("User id={} not found", user_id)));
        }
        Ok(())
    }
}

fn film_not_found(film_id: FilmId) -> AppError {
    AppError::NotFound(format!("Film id={} not found", film_id))
}
