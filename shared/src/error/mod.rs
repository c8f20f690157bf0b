//! Unified error codes for the restaurant API
//!
//! Every error response carries a human-readable `error` message plus a
//! stable `code` so clients can branch without string matching.
//!
//! # Error Code Ranges
//!
//! - E0xxx: General errors (validation, not found, conflict)
//! - E1xxx: Credential errors
//! - E3xxx: Token errors
//! - E9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{ErrorBody, ErrorCode};
//!
//! let body = ErrorBody::new(ErrorCode::NotFound, "food not found");
//! assert_eq!(body.code, "E0003");
//! assert_eq!(ErrorCode::NotFound.status_code().as_u16(), 404);
//! ```

mod codes;

pub use codes::ErrorCode;

use serde::{Deserialize, Serialize};

/// JSON body of every error response
///
/// ```json
/// { "error": "food not found", "code": "E0003" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Message shown to the caller
    pub error: String,
    /// Stable error code (see [`ErrorCode::code`])
    pub code: String,
}

impl ErrorBody {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: code.code().to_string(),
        }
    }
}
