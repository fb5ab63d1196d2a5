// src/application/commands/user_commands.rs
//
// User Command Handlers
//
// RULES:
// - Accept DTOs
// - Call services
// - Return DTOs
// - Never contain business logic

use log::debug;

use crate::application::commands::{parse_date, require_id, CommandResult};
use crate::application::dto::UserDto;
use crate::application::error_handling::ToErrorResponse;
use crate::application::state::AppState;
use crate::domain::UserId;
use crate::error::AppResult;
use crate::services::{CreateUserRequest, UpdateUserRequest};

pub fn list_users(state: &AppState) -> CommandResult<Vec<UserDto>> {
    let users = state.user_service.get_all_users().to_error_response()?;
    Ok(users.into_iter().map(UserDto::from).collect())
}

pub fn get_user(state: &AppState, user_id: u64) -> CommandResult<UserDto> {
    let user = state
        .user_service
        .get_user_by_id(UserId(user_id))
        .to_error_response()?;
    Ok(UserDto::from(user))
}

/// Register a user; a blank name is replaced by the login
pub fn create_user(state: &AppState, dto: UserDto) -> CommandResult<UserDto> {
    debug!("Received a request to add user '{}'", dto.login);
    let request = create_request(dto).to_error_response()?;
    let user = state.user_service.create_user(request).to_error_response()?;
    Ok(UserDto::from(user))
}

/// Replace the profile fields of an existing user; friends are untouched
pub fn update_user(state: &AppState, dto: UserDto) -> CommandResult<UserDto> {
    debug!("Received a request to update user {:?}", dto.id);
    let request = update_request(dto).to_error_response()?;
    let user = state.user_service.update_user(request).to_error_response()?;
    Ok(UserDto::from(user))
}

pub fn delete_user(state: &AppState, user_id: u64) -> CommandResult<()> {
    state
        .user_service
        .delete_user(UserId(user_id))
        .to_error_response()
}

pub fn add_friend(state: &AppState, user_id: u64, friend_id: u64) -> CommandResult<()> {
    state
        .user_service
        .add_friend(UserId(user_id), UserId(friend_id))
        .to_error_response()
}

pub fn remove_friend(state: &AppState, user_id: u64, friend_id: u64) -> CommandResult<()> {
    state
        .user_service
        .remove_friend(UserId(user_id), UserId(friend_id))
        .to_error_response()
}

pub fn list_friends(state: &AppState, user_id: u64) -> CommandResult<Vec<UserDto>> {
    let friends = state
        .user_service
        .friends_of(UserId(user_id))
        .to_error_response()?;
    Ok(friends.into_iter().map(UserDto::from).collect())
}

pub fn common_friends(
    state: &AppState,
    user_id: u64,
    other_id: u64,
) -> CommandResult<Vec<UserDto>> {
    let common = state
        .user_service
        .common_friends(UserId(user_id), UserId(other_id))
        .to_error_response()?;
    Ok(common.into_iter().map(UserDto::from).collect())
}

fn create_request(dto: UserDto) -> AppResult<CreateUserRequest> {
    Ok(CreateUserRequest {
        birthday: parse_date("birthday", &dto.birthday)?,
        email: dto.email,
        login: dto.login,
        name: dto.name,
    })
}

fn update_request(dto: UserDto) -> AppResult<UpdateUserRequest> {
    let user_id = UserId(require_id("User", dto.id)?);
    Ok(UpdateUserRequest {
        user_id,
        birthday: parse_date("birthday", &dto.birthday)?,
        email: dto.email,
        login: dto.login,
        name: dto.name,
    })
}
