// src/domain/mod.rs
//
// Domain Root - entities, identities and invariants
//
// All other modules import from `crate::domain::*`

pub mod film;
pub mod genre;
pub mod user;

pub use film::{validate_film, Film, FilmId, MAX_DESCRIPTION_LENGTH, MIN_RELEASE_DATE};
pub use genre::{Genre, GenreId};
pub use user::{normalize_user, validate_user, validate_user_at, User, UserId};

use thiserror::Error;

/// Domain-level errors
/// These represent violations of field invariants on incoming entities
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
