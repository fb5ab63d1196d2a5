// src/services/genre_service.rs
use log::info;

use crate::domain::{genre, Genre, GenreId};
use crate::error::{AppError, AppResult};

/// Read-only access to the genre catalog
#[derive(Debug, Default, Clone, Copy)]
pub struct GenreService;

impl GenreService {
    pub fn new() -> Self {
        Self
    }

    pub fn get_all_genres(&self) -> Vec<Genre> {
        genre::all().to_vec()
    }

    pub fn get_genre_by_id(&self, genre_id: GenreId) -> AppResult<Genre> {
        genre::find(genre_id).ok_or_else(|| {
            info!("Genre id={} not found", genre_id);
            AppError::NotFound(format!("Genre id={} not found", genre_id))
        })
    }
}
