// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between an outer surface and the services
// - Commands accept DTOs and raw ids, return DTOs
// - Commands convert errors into status-coded ErrorResponses
// - Commands NEVER contain business logic

use chrono::NaiveDate;

use crate::application::error_handling::ErrorResponse;
use crate::error::{AppError, AppResult};

pub mod film_commands;
pub mod genre_commands;
pub mod user_commands;

pub use film_commands::*;
pub use genre_commands::*;
pub use user_commands::*;

pub type CommandResult<T> = Result<T, ErrorResponse>;

/// Parses a yyyy-MM-dd date field
pub(crate) fn parse_date(field: &str, value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| AppError::validation(format!("Invalid {} '{}': {}", field, value, e)))
}

/// Update payloads must name the entity they replace
pub(crate) fn require_id(kind: &str, id: Option<u64>) -> AppResult<u64> {
    id.ok_or_else(|| AppError::validation(format!("{} id is required for update", kind)))
}
