// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod film_service;
pub mod genre_service;
pub mod persistence_service;
pub mod user_service;

#[cfg(test)]
mod user_service_tests;

pub use film_service::{CreateFilmRequest, FilmService, UpdateFilmRequest};

pub use user_service::{CreateUserRequest, UpdateUserRequest, UserService};

pub use genre_service::GenreService;

pub use persistence_service::PersistenceService;
