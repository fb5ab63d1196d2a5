// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// PRINCIPLES:
// - DTOs carry the JSON field contract (id, name, description, releaseDate,
//   duration, email, login, name, birthday)
// - Relationship data (likes, friends, rate) is output-only; anything a
//   client sends in those fields is ignored
// - Conversion FROM domain entities only; commands parse DTOs into requests

use serde::{Deserialize, Serialize};

use crate::domain::{genre, Film, Genre, GenreId, User};

// ============================================================================
// FILM DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmDto {
    /// Absent on create, required on update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// yyyy-MM-dd
    pub release_date: String,
    pub duration: i64,
    #[serde(default)]
    pub genres: Vec<GenreDto>,
    /// Current like count
    #[serde(default, skip_deserializing)]
    pub rate: usize,
    #[serde(default, skip_deserializing)]
    pub likes: Vec<u64>,
}

impl From<Film> for FilmDto {
    fn from(film: Film) -> Self {
        Self {
            id: Some(film.id.0),
            rate: film.like_count(),
            name: film.name,
            description: film.description,
            release_date: film.release_date.format("%Y-%m-%d").to_string(),
            duration: film.duration,
            genres: film
                .genres
                .into_iter()
                .map(|id| match genre::find(id) {
                    Some(found) => GenreDto::from(found),
                    None => GenreDto {
                        id: id.0,
                        name: String::new(),
                    },
                })
                .collect(),
            likes: film.likes.into_iter().map(|user| user.0).collect(),
        }
    }
}

// ============================================================================
// USER DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    /// Absent on create, required on update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub email: String,
    pub login: String,
    /// Blank or absent means "use the login"
    #[serde(default)]
    pub name: Option<String>,
    /// yyyy-MM-dd
    pub birthday: String,
    #[serde(default, skip_deserializing)]
    pub friends: Vec<u64>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: Some(user.id.0),
            email: user.email,
            login: user.login,
            name: Some(user.name),
            birthday: user.birthday.format("%Y-%m-%d").to_string(),
            friends: user.friends.into_iter().map(|friend| friend.0).collect(),
        }
    }
}

// ============================================================================
// GENRE DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreDto {
    pub id: u32,
    /// Filled in on output; clients may send only the id
    #[serde(default)]
    pub name: String,
}

impl From<Genre> for GenreDto {
    fn from(genre: Genre) -> Self {
        Self {
            id: genre.id.0,
            name: genre.name.to_string(),
        }
    }
}

impl GenreDto {
    pub fn genre_id(&self) -> GenreId {
        GenreId(self.id)
    }
}
