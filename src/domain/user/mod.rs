pub mod entity;
pub mod invariants;

pub use entity::{User, UserId};
pub use invariants::{normalize_user, validate_user, validate_user_at};
