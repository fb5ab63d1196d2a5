// src/application/commands/film_commands.rs
//
// Film Command Handlers
//
// RULES:
// - Accept DTOs
// - Call services
// - Return DTOs
// - Never contain business logic

use log::debug;

use crate::application::commands::{parse_date, require_id, CommandResult};
use crate::application::dto::FilmDto;
use crate::application::error_handling::ToErrorResponse;
use crate::application::state::AppState;
use crate::domain::{FilmId, UserId};
use crate::error::{AppError, AppResult};
use crate::services::{CreateFilmRequest, UpdateFilmRequest};

/// List all films in id order
pub fn list_films(state: &AppState) -> CommandResult<Vec<FilmDto>> {
    let films = state.film_service.get_all_films().to_error_response()?;
    Ok(films.into_iter().map(FilmDto::from).collect())
}

/// Get a single film
pub fn get_film(state: &AppState, film_id: u64) -> CommandResult<FilmDto> {
    let film = state
        .film_service
        .get_film_by_id(FilmId(film_id))
        .to_error_response()?;
    Ok(FilmDto::from(film))
}

/// Create a new film; any id, likes or rate in the payload are ignored
pub fn create_film(state: &AppState, dto: FilmDto) -> CommandResult<FilmDto> {
    debug!("Received a request to add film '{}'", dto.name);
    let request = create_request(dto).to_error_response()?;
    let film = state.film_service.create_film(request).to_error_response()?;
    Ok(FilmDto::from(film))
}

/// Replace the fields of an existing film
pub fn update_film(state: &AppState, dto: FilmDto) -> CommandResult<FilmDto> {
    debug!("Received a request to update film {:?}", dto.id);
    let request = update_request(dto).to_error_response()?;
    let film = state.film_service.update_film(request).to_error_response()?;
    Ok(FilmDto::from(film))
}

pub fn delete_film(state: &AppState, film_id: u64) -> CommandResult<()> {
    state
        .film_service
        .delete_film(FilmId(film_id))
        .to_error_response()
}

pub fn add_like(state: &AppState, film_id: u64, user_id: u64) -> CommandResult<()> {
    state
        .film_service
        .add_like(FilmId(film_id), UserId(user_id))
        .to_error_response()
}

pub fn remove_like(state: &AppState, film_id: u64, user_id: u64) -> CommandResult<()> {
    state
        .film_service
        .remove_like(FilmId(film_id), UserId(user_id))
        .to_error_response()
}

/// Ids of the users who liked a film
pub fn film_likes(state: &AppState, film_id: u64) -> CommandResult<Vec<u64>> {
    let likes = state
        .film_service
        .likes_of(FilmId(film_id))
        .to_error_response()?;
    Ok(likes.into_iter().map(|user| user.0).collect())
}

/// Most-liked films; `count` falls back to the configured default
pub fn popular_films(state: &AppState, count: Option<i64>) -> CommandResult<Vec<FilmDto>> {
    let count = resolve_count(count, state.popular_default_count).to_error_response()?;
    let films = state.film_service.popular_films(count).to_error_response()?;
    Ok(films.into_iter().map(FilmDto::from).collect())
}

fn resolve_count(count: Option<i64>, default: usize) -> AppResult<usize> {
    match count {
        None => Ok(default),
        Some(n) if n > 0 => usize::try_from(n)
            .map_err(|_| AppError::validation(format!("count out of range: {}", n))),
        Some(n) => Err(AppError::validation(format!(
            "count must be positive, got {}",
            n
        ))),
    }
}

fn create_request(dto: FilmDto) -> AppResult<CreateFilmRequest> {
    Ok(CreateFilmRequest {
        release_date: parse_date("releaseDate", &dto.release_date)?,
        genres: dto.genres.iter().map(|g| g.genre_id()).collect(),
        name: dto.name,
        description: dto.description,
        duration: dto.duration,
    })
}

fn update_request(dto: FilmDto) -> AppResult<UpdateFilmRequest> {
    let film_id = FilmId(require_id("Film", dto.id)?);
    Ok(UpdateFilmRequest {
        film_id,
        release_date: parse_date("releaseDate", &dto.release_date)?,
        genres: dto.genres.iter().map(|g| g.genre_id()).collect(),
        name: dto.name,
        description: dto.description,
        duration: dto.duration,
    })
}
