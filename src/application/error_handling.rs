// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps typed errors -> status-coded responses for the adapter layer
// - NotFound -> 404, Validation -> 400, InvalidOperation -> 409
// - Infrastructure failures are logged and reported as 500 without details

use log::error;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response for the adapter layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub status: u16,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Referenced film, user or genre does not exist (404)
    NotFound,

    /// Invalid input (400)
    Validation,

    /// Relationship change impossible in the current state (409)
    InvalidOperation,

    /// Anything else (500)
    Internal,
}

impl ErrorType {
    pub fn status_code(self) -> u16 {
        match self {
            ErrorType::NotFound => 404,
            ErrorType::Validation => 400,
            ErrorType::InvalidOperation => 409,
            ErrorType::Internal => 500,
        }
    }
}

impl ErrorResponse {
    fn new(error_type: ErrorType, message: String, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            status: error_type.status_code(),
            message,
            details,
        }
    }

    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::NotFound(message) => Self::new(ErrorType::NotFound, message, None),

            AppError::Validation(domain_error) => Self::new(
                ErrorType::Validation,
                "Validation failed".to_string(),
                Some(domain_error.to_string()),
            ),

            AppError::InvalidOperation(message) => {
                Self::new(ErrorType::InvalidOperation, message, None)
            }

            other => {
                error!("Internal error: {:?}", other);
                Self::new(
                    ErrorType::Internal,
                    "Internal error".to_string(),
                    Some("Check logs for details".to_string()),
                )
            }
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self::from_app_error(error)
    }
}

/// Helper trait to convert Results to ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, ErrorResponse>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, ErrorResponse> {
        self.map_err(ErrorResponse::from_app_error)
    }
}
