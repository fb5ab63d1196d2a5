pub mod entity;
pub mod invariants;

pub use entity::{Film, FilmId};
pub use invariants::{validate_film, MAX_DESCRIPTION_LENGTH, MIN_RELEASE_DATE};
