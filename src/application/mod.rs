// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Boundary between an outer surface (HTTP, CLI) and the services
// - Translates DTOs to service requests and entities back to DTOs
// - Maps typed errors to status-coded responses

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use commands::CommandResult;
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use state::AppState;
