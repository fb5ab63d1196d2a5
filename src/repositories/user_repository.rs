// src/repositories/user_repository.rs
//
// User persistence over the shared in-memory catalog

use log::{debug, info};

use crate::domain::{User, UserId};
use crate::error::AppResult;
use crate::repositories::catalog_state::SharedCatalog;
use crate::repositories::entity_store::{Entity, EntityId};

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    /// Store a new user and return it with its assigned identity
    fn add(&self, user: User) -> AppResult<User>;
    /// Overwrite user fields; the friend-set is left as it is
    fn update(&self, user: User) -> AppResult<User>;
    fn get_by_id(&self, id: UserId) -> AppResult<Option<User>>;
    fn list_all(&self) -> AppResult<Vec<User>>;
    fn exists(&self, id: UserId) -> AppResult<bool>;
    /// Remove a user, their likes and their friendships
    fn delete(&self, id: UserId) -> AppResult<()>;
    /// Returns false when the two users were already friends
    fn add_friend(&self, user_id: UserId, friend_id: UserId) -> AppResult<bool>;
    fn remove_friend(&self, user_id: UserId, friend_id: UserId) -> AppResult<()>;
    fn friends_of(&self, user_id: UserId) -> AppResult<Vec<User>>;
    fn common_friends(&self, user_id: UserId, other_id: UserId) -> AppResult<Vec<User>>;
}

pub struct InMemoryUserRepository {
    catalog: SharedCatalog,
}

impl InMemoryUserRepository {
    pub fn new(catalog: SharedCatalog) -> Self {
        Self { catalog }
    }
}

impl UserRepository for InMemoryUserRepository {
    fn add(&self, user: User) -> AppResult<User> {
        let mut state = self.catalog.write();
        let stored = state.users.add(user);
        info!("A new user has been added id={}", stored.id);
        Ok(stored)
    }

    fn update(&self, user: User) -> AppResult<User> {
        let mut state = self.catalog.write();
        let stored = state.users.update(user)?;
        info!("User id={} updated", stored.id);
        Ok(state.user_view(&stored))
    }

    fn get_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let state = self.catalog.read();
        Ok(state.users.find(id).map(|user| state.user_view(user)))
    }

    fn list_all(&self) -> AppResult<Vec<User>> {
        let state = self.catalog.read();
        Ok(state.users.iter().map(|user| state.user_view(user)).collect())
    }

    fn exists(&self, id: UserId) -> AppResult<bool> {
        Ok(self.catalog.read().users.exists(id))
    }

    fn delete(&self, id: UserId) -> AppResult<()> {
        let mut state = self.catalog.write();
        state.users.remove(id)?;
        state.relations.drop_user(id);
        info!("User id={} deleted with their likes and friendships", id);
        Ok(())
    }

    fn add_friend(&self, user_id: UserId, friend_id: UserId) -> AppResult<bool> {
        let mut state = self.catalog.write();
        state.ensure_user(user_id)?;
        state.ensure_user(friend_id)?;
        let inserted = state.relations.add_friendship(user_id, friend_id)?;
        if inserted {
            info!("Users id={} and id={} are now friends", user_id, friend_id);
        } else {
            debug!("Users id={} and id={} were already friends", user_id, friend_id);
        }
        Ok(inserted)
    }

    fn remove_friend(&self, user_id: UserId, friend_id: UserId) -> AppResult<()> {
        let mut state = self.catalog.write();
        state.ensure_user(user_id)?;
        state.ensure_user(friend_id)?;
        state.relations.remove_friendship(user_id, friend_id)?;
        info!("Users id={} and id={} are no longer friends", user_id, friend_id);
        Ok(())
    }

    fn friends_of(&self, user_id: UserId) -> AppResult<Vec<User>> {
        let state = self.catalog.read();
        state.ensure_user(user_id)?;
        Ok(state
            .relations
            .friend_ids(user_id)
            .into_iter()
            .filter_map(|id| state.users.find(id))
            .map(|user| state.user_view(user))
            .collect())
    }

    fn common_friends(&self, user_id: UserId, other_id: UserId) -> AppResult<Vec<User>> {
        let state = self.catalog.read();
        state.ensure_user(user_id)?;
        state.ensure_user(other_id)?;
        Ok(state
            .relations
            .common_friend_ids(user_id, other_id)
            .into_iter()
            .filter_map(|id| state.users.find(id))
            .map(|user| state.user_view(user))
            .collect())
    }
}

impl EntityId for UserId {
    fn from_raw(raw: u64) -> Self {
        UserId(raw)
    }

    fn raw(self) -> u64 {
        self.0
    }
}

impl Entity for User {
    type Id = UserId;
    const KIND: &'static str = "User";

    fn id(&self) -> UserId {
        self.id
    }

    fn set_id(&mut self, id: UserId) {
        self.id = id;
    }

    fn clear_relations(&mut self) {
        self.friends.clear();
    }
}
