// src/lib.rs
// Filmorate - Film catalog with likes, friendships and popularity ranking
//
// Architecture:
// - Domain-centric: entities and their validation rules live in domain/
// - One catalog lock: films, users and relationships change together
// - Event-driven: services emit domain events after successful mutations
// - Explicit: no implicit behavior, no magic
// - Application layer: DTO boundary for an outer surface

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use config::AppConfig;

pub use domain::{
    normalize_user, validate_film, validate_user, DomainError, Film, FilmId, Genre, GenreId,
    User, UserId,
};

pub use error::{AppError, AppResult};

pub use events::{DomainEvent, EventBus};

pub use repositories::{new_shared_catalog, CatalogState, SharedCatalog};

pub use services::{FilmService, GenreService, PersistenceService, UserService};

pub use application::{AppState, ErrorResponse};
