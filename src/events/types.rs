// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// RULES:
// - Events are facts, not commands
// - Events carry only the data needed to react
// - Emitted only after the mutation succeeded

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{FilmId, UserId};

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// FILM EVENTS
// ============================================================================

/// Emitted when a new film is stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilmCreated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub film_id: FilmId,
    pub name: String,
}

impl FilmCreated {
    pub fn new(film_id: FilmId, name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            film_id,
            name,
        }
    }
}

impl DomainEvent for FilmCreated {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "FilmCreated" }
}

/// Emitted when film fields are overwritten
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilmUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub film_id: FilmId,
}

impl FilmUpdated {
    pub fn new(film_id: FilmId) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            film_id,
        }
    }
}

impl DomainEvent for FilmUpdated {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "FilmUpdated" }
}

/// Emitted when a film and its likes are removed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilmDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub film_id: FilmId,
}

impl FilmDeleted {
    pub fn new(film_id: FilmId) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            film_id,
        }
    }
}

impl DomainEvent for FilmDeleted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "FilmDeleted" }
}

/// Emitted when a user likes a film
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub film_id: FilmId,
    pub user_id: UserId,
}

impl LikeAdded {
    pub fn new(film_id: FilmId, user_id: UserId) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            film_id,
            user_id,
        }
    }
}

impl DomainEvent for LikeAdded {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "LikeAdded" }
}

/// Emitted when a user withdraws a like
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeRemoved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub film_id: FilmId,
    pub user_id: UserId,
}

impl LikeRemoved {
    pub fn new(film_id: FilmId, user_id: UserId) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            film_id,
            user_id,
        }
    }
}

impl DomainEvent for LikeRemoved {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "LikeRemoved" }
}

// ============================================================================
// USER EVENTS
// ============================================================================

/// Emitted when a new user is stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub user_id: UserId,
    pub login: String,
}

impl UserCreated {
    pub fn new(user_id: UserId, login: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            user_id,
            login,
        }
    }
}

impl DomainEvent for UserCreated {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "UserCreated" }
}

/// Emitted when user fields are overwritten
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub user_id: UserId,
}

impl UserUpdated {
    pub fn new(user_id: UserId) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            user_id,
        }
    }
}

impl DomainEvent for UserUpdated {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "UserUpdated" }
}

/// Emitted when a user is removed with their likes and friendships
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub user_id: UserId,
}

impl UserDeleted {
    pub fn new(user_id: UserId) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            user_id,
        }
    }
}

impl DomainEvent for UserDeleted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "UserDeleted" }
}

/// Emitted when two users become friends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendshipCreated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub user_id: UserId,
    pub friend_id: UserId,
}

impl FriendshipCreated {
    pub fn new(user_id: UserId, friend_id: UserId) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            user_id,
            friend_id,
        }
    }
}

impl DomainEvent for FriendshipCreated {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "FriendshipCreated" }
}

/// Emitted when a friendship ends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendshipRemoved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub user_id: UserId,
    pub friend_id: UserId,
}

impl FriendshipRemoved {
    pub fn new(user_id: UserId, friend_id: UserId) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            user_id,
            friend_id,
        }
    }
}

impl DomainEvent for FriendshipRemoved {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "FriendshipRemoved" }
}
