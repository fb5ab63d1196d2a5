use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::{GenreId, UserId};

/// Film identity, assigned by the store on creation and never reused
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilmId(pub u64);

impl std::fmt::Display for FilmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A film in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Film {
    /// Zero until the store assigns an identity
    pub id: FilmId,

    /// Title, must not be blank
    pub name: String,

    pub description: String,

    pub release_date: NaiveDate,

    /// Running time in minutes
    pub duration: i64,

    /// Genres from the fixed genre catalog
    pub genres: BTreeSet<GenreId>,

    /// Users who liked this film.
    /// Owned by the relationship index; filled in on reads only.
    pub likes: BTreeSet<UserId>,
}

impl Film {
    /// Create a film that has not been stored yet
    pub fn new(name: String, description: String, release_date: NaiveDate, duration: i64) -> Self {
        Self {
            id: FilmId::default(),
            name,
            description,
            release_date,
            duration,
            genres: BTreeSet::new(),
            likes: BTreeSet::new(),
        }
    }

    pub fn with_genres(mut self, genres: impl IntoIterator<Item = GenreId>) -> Self {
        self.genres = genres.into_iter().collect();
        self
    }

    /// Popularity of the film
    pub fn like_count(&self) -> usize {
        self.likes.len()
    }
}
