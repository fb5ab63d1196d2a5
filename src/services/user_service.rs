// src/services/user_service.rs
//
// Social operations: user CRUD, friendships and friend queries.
//
// Incoming users are normalized (blank name -> login) before the pure
// validation step runs.

use chrono::NaiveDate;
use log::{info, warn};
use std::sync::Arc;

use crate::domain::{normalize_user, validate_user, User, UserId};
use crate::error::{AppError, AppResult};
use crate::events::{
    EventBus, FriendshipCreated, FriendshipRemoved, UserCreated, UserDeleted, UserUpdated,
};
use crate::repositories::UserRepository;

#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub email: String,
    pub login: String,
    pub name: Option<String>,
    pub birthday: NaiveDate,
}

/// Full replacement of the mutable user fields; friends are never part of it
#[derive(Debug, Clone)]
pub struct UpdateUserRequest {
    pub user_id: UserId,
    pub email: String,
    pub login: String,
    pub name: Option<String>,
    pub birthday: NaiveDate,
}

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    event_bus: Arc<EventBus>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            user_repo,
            event_bus,
        }
    }

    pub fn create_user(&self, request: CreateUserRequest) -> AppResult<User> {
        let mut user = User::new(request.email, request.login, request.name, request.birthday);
        normalize_user(&mut user);

        validate_user(&user).inspect_err(|e| warn!("Rejected new user: {}", e))?;
        let user = self.user_repo.add(user)?;

        self.event_bus
            .emit(UserCreated::new(user.id, user.login.clone()));
        Ok(user)
    }

    pub fn update_user(&self, request: UpdateUserRequest) -> AppResult<User> {
        let mut user = User::new(request.email, request.login, request.name, request.birthday);
        user.id = request.user_id;
        normalize_user(&mut user);

        validate_user(&user)
            .inspect_err(|e| warn!("Rejected update of user id={}: {}", user.id, e))?;
        self.ensure_user_exists(user.id)?;
        let user = self.user_repo.update(user)?;

        self.event_bus.emit(UserUpdated::new(user.id));
        Ok(user)
    }

    pub fn get_user_by_id(&self, user_id: UserId) -> AppResult<User> {
        self.user_repo.get_by_id(user_id)?.ok_or_else(|| {
            info!("User id={} not found", user_id);
            user_not_found(user_id)
        })
    }

    /// All users ordered by identity
    pub fn get_all_users(&self) -> AppResult<Vec<User>> {
        self.user_repo.list_all()
    }

    /// Removes the user's likes and friendships as well
    pub fn delete_user(&self, user_id: UserId) -> AppResult<()> {
        self.ensure_user_exists(user_id)?;
        self.user_repo.delete(user_id)?;

        self.event_bus.emit(UserDeleted::new(user_id));
        Ok(())
    }

    pub fn add_friend(&self, user_id: UserId, friend_id: UserId) -> AppResult<()> {
        self.ensure_user_exists(user_id)?;
        self.ensure_user_exists(friend_id)?;
        let created = self
            .user_repo
            .add_friend(user_id, friend_id)
            .inspect_err(|e| info!("{}", e))?;

        if created {
            self.event_bus
                .emit(FriendshipCreated::new(user_id, friend_id));
        }
        Ok(())
    }

    pub fn remove_friend(&self, user_id: UserId, friend_id: UserId) -> AppResult<()> {
        self.ensure_user_exists(user_id)?;
        self.ensure_user_exists(friend_id)?;
        self.user_repo
            .remove_friend(user_id, friend_id)
            .inspect_err(|e| info!("{}", e))?;

        self.event_bus
            .emit(FriendshipRemoved::new(user_id, friend_id));
        Ok(())
    }

    pub fn friends_of(&self, user_id: UserId) -> AppResult<Vec<User>> {
        self.ensure_user_exists(user_id)?;
        let friends = self.user_repo.friends_of(user_id)?;
        info!("The friends list of user id={} is sent", user_id);
        Ok(friends)
    }

    pub fn common_friends(&self, user_id: UserId, other_id: UserId) -> AppResult<Vec<User>> {
        self.ensure_user_exists(user_id)?;
        self.ensure_user_exists(other_id)?;
        let common = self.user_repo.common_friends(user_id, other_id)?;
        info!(
            "A shared list of friends of users id={} and id={} is sent",
            user_id, other_id
        );
        Ok(common)
    }

    fn ensure_user_exists(&self, user_id: UserId) -> AppResult<()> {
        if !self.user_repo.exists(user_id)? {
            info!("User id={} not found", user_id);
            return Err(user_not_found(user_id));
        }
        Ok(())
    }
}

fn user_not_found(user_id: UserId) -> AppError {
    AppError::NotFound(format!("User id={} not found", user_id))
}
