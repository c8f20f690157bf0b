//! Error code table

use http::StatusCode;
use std::fmt;

/// Standard API error codes
///
/// The HTTP status for each code is fixed here so every handler maps the
/// same failure to the same status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Payload failed validation (400)
    ValidationFailed,
    /// Malformed or unacceptable request, incl. dangling references (400)
    InvalidRequest,
    /// Resource not found (404)
    NotFound,
    /// Resource already exists (409)
    AlreadyExists,
    /// Authentication required (401)
    NotAuthenticated,
    /// Wrong login or password (401)
    InvalidCredentials,
    /// Token expired (401)
    TokenExpired,
    /// Token signature or shape invalid (401)
    TokenInvalid,
    /// Database error (500)
    DatabaseError,
    /// Internal server error (500)
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationFailed | Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::AlreadyExists => StatusCode::CONFLICT,
            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid => StatusCode::UNAUTHORIZED,
            Self::DatabaseError | Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the default message for this error
    pub fn message(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "Validation failed",
            Self::InvalidRequest => "Invalid request",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::NotAuthenticated => "Please login first",
            Self::InvalidCredentials => "login or password is incorrect",
            Self::TokenExpired => "Token expired",
            Self::TokenInvalid => "Invalid token",
            Self::DatabaseError => "Database error",
            Self::InternalError => "Internal server error",
        }
    }

    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "E0002",
            Self::NotFound => "E0003",
            Self::AlreadyExists => "E0004",
            Self::InvalidRequest => "E0006",
            Self::InvalidCredentials => "E1002",
            Self::NotAuthenticated => "E3001",
            Self::TokenInvalid => "E3002",
            Self::TokenExpired => "E3003",
            Self::InternalError => "E9001",
            Self::DatabaseError => "E9002",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
