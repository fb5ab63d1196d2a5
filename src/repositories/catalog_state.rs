// src/repositories/catalog_state.rs
//
// The whole in-memory catalog behind a single lock.
//
// Films, users and the relationship index share one RwLock, so a compound
// operation (like with both existence checks, symmetric friendship,
// cascading delete) runs inside one critical section.

use std::sync::Arc;

use log::warn;
use parking_lot::RwLock;

use crate::domain::{Film, FilmId, User, UserId};
use crate::error::AppResult;
use crate::repositories::entity_store::EntityStore;
use crate::repositories::relationship_index::RelationshipIndex;
use crate::repositories::snapshot_repository::CatalogSnapshot;

pub type SharedCatalog = Arc<RwLock<CatalogState>>;

/// Create an empty catalog ready to be shared between repositories
pub fn new_shared_catalog() -> SharedCatalog {
    Arc::new(RwLock::new(CatalogState::new()))
}

#[derive(Debug, Default)]
pub struct CatalogState {
    pub(crate) films: EntityStore<Film>,
    pub(crate) users: EntityStore<User>,
    pub(crate) relations: RelationshipIndex,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Film with its current like-set attached
    pub fn film_view(&self, film: &Film) -> Film {
        let mut view = film.clone();
        view.likes = self.relations.likers(film.id);
        view
    }

    /// User with its current friend-set attached
    pub fn user_view(&self, user: &User) -> User {
        let mut view = user.clone();
        view.friends = self.relations.friend_ids(user.id);
        view
    }

    pub fn ensure_film(&self, id: FilmId) -> AppResult<()> {
        self.films.get_by_id(id).map(|_| ())
    }

    pub fn ensure_user(&self, id: UserId) -> AppResult<()> {
        self.users.get_by_id(id).map(|_| ())
    }

    pub fn film_count(&self) -> usize {
        self.films.len()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Capture films, users, relationships and identity counters
    pub fn to_snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            films: self.films.iter().map(|film| self.film_view(film)).collect(),
            users: self.users.iter().map(|user| self.user_view(user)).collect(),
            next_film_id: self.films.last_id() + 1,
            next_user_id: self.users.last_id() + 1,
        }
    }

    /// Rebuild a catalog from a snapshot.
    ///
    /// Likes and friendships pointing at users that are not in the snapshot
    /// are dropped. Friendships are re-inserted as symmetric edges even if
    /// only one side was recorded.
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Self {
        let mut state = Self::new();

        for user in &snapshot.users {
            state.users.restore(user.clone());
        }
        for film in &snapshot.films {
            state.films.restore(film.clone());
        }

        for film in &snapshot.films {
            for liker in &film.likes {
                if state.users.exists(*liker) {
                    state.relations.add_like(film.id, *liker);
                } else {
                    warn!(
                        "Dropping like on film id={} from missing user id={}",
                        film.id, liker
                    );
                }
            }
        }

        for user in &snapshot.users {
            for friend in &user.friends {
                if !state.users.exists(*friend) {
                    warn!(
                        "Dropping friendship of user id={} with missing user id={}",
                        user.id, friend
                    );
                    continue;
                }
                if let Err(e) = state.relations.add_friendship(user.id, *friend) {
                    warn!("Skipping friendship entry: {}", e);
                }
            }
        }

        state
            .films
            .advance_counter(snapshot.next_film_id.saturating_sub(1));
        state
            .users
            .advance_counter(snapshot.next_user_id.saturating_sub(1));

        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn user(login: &str) -> User {
        User::new(
            format!("{}@mail.io", login),
            login.to_string(),
            None,
            date(1990, 1, 1),
        )
    }

    #[test]
    fn test_snapshot_restores_relationships_and_counters() {
        let mut state = CatalogState::new();
        let a = state.users.add(user("a"));
        let b = state.users.add(user("b"));
        let film = state.films.add(Film::new(
            "Matrix".to_string(),
            String::new(),
            date(1999, 3, 31),
            136,
        ));
        state.relations.add_like(film.id, a.id);
        state.relations.add_friendship(a.id, b.id).unwrap();
        state.users.remove(b.id).unwrap();
        state.relations.drop_user(b.id);

        let restored = CatalogState::from_snapshot(state.to_snapshot());

        assert_eq!(restored.user_count(), 1);
        assert!(restored.relations.has_like(film.id, a.id));
        assert!(restored.relations.friend_ids(a.id).is_empty());
        assert_eq!(restored.users.last_id(), 2);
    }

    #[test]
    fn test_snapshot_drops_dangling_references() {
        let mut alice = user("alice");
        alice.id = UserId(1);
        alice.friends.insert(UserId(5));

        let mut film = Film::new("Up".to_string(), String::new(), date(2009, 5, 29), 96);
        film.id = FilmId(3);
        film.likes.insert(UserId(1));
        film.likes.insert(UserId(5));

        let snapshot = CatalogSnapshot {
            films: vec![film],
            users: vec![alice],
            next_film_id: 4,
            next_user_id: 2,
        };

        let state = CatalogState::from_snapshot(snapshot);
        assert_eq!(state.relations.like_count(FilmId(3)), 1);
        assert!(state.relations.friend_ids(UserId(1)).is_empty());
        assert_eq!(state.films.last_id(), 3);
    }

    #[test]
    fn test_one_sided_snapshot_friendship_becomes_symmetric() {
        let mut a = user("a");
        a.id = UserId(1);
        a.friends.insert(UserId(2));
        let mut b = user("b");
        b.id = UserId(2);

        let state = CatalogState::from_snapshot(CatalogSnapshot {
            films: Vec::new(),
            users: vec![a, b],
            next_film_id: 1,
            next_user_id: 3,
        });

        assert!(state.relations.are_friends(UserId(2), UserId(1)));
    }
}
