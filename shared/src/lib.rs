//! Shared types for the restaurant backend
//!
//! Wire-level types used by the server and by API clients: request payloads,
//! response views, write acknowledgments, paginated pages and error codes.
//! Nothing in here touches the database.

pub mod client;
pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use error::{ErrorBody, ErrorCode};
pub use response::{DeleteAck, InsertAck, InsertManyAck, Page, UpdateAck};
pub use serde::{Deserialize, Serialize};
