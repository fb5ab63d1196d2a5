// src/repositories/mod.rs
//
// Repository layer
//
// RULES:
// - Repositories own storage and the relationship index
// - Field validation lives in the domain, orchestration in services
// - Existence of referenced entities is re-checked under the catalog lock
// - NO event emission

pub mod catalog_state;
pub mod entity_store;
pub mod film_repository;
pub mod relationship_index;
pub mod snapshot_repository;
pub mod user_repository;

pub use catalog_state::{new_shared_catalog, CatalogState, SharedCatalog};
pub use entity_store::{Entity, EntityId, EntityStore};
pub use film_repository::{FilmRepository, InMemoryFilmRepository};
pub use relationship_index::RelationshipIndex;
pub use snapshot_repository::{CatalogSnapshot, SnapshotRepository, SqliteSnapshotRepository};
pub use user_repository::{InMemoryUserRepository, UserRepository};

#[cfg(test)]
pub use film_repository::MockFilmRepository;
#[cfg(test)]
pub use snapshot_repository::MockSnapshotRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
