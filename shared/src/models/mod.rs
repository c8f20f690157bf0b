//! Data models
//!
//! Request payloads and computed views shared between the server and API
//! clients. Stored documents live in the server's `db::models`.
//!
//! Natural keys are 24-character hex strings (see server `db::object_id`).

pub mod billing;
pub mod dining_table;
pub mod food;
pub mod invoice;
pub mod menu;
pub mod order;
pub mod order_item;

// Re-exports
pub use billing::*;
pub use dining_table::*;
pub use food::*;
pub use invoice::*;
pub use menu::*;
pub use order::*;
pub use order_item::*;

use chrono::{DateTime, Utc};
use validator::ValidationError;

/// Reject instants that are not strictly after now
pub fn validate_future(at: &DateTime<Utc>) -> Result<(), ValidationError> {
    if *at > Utc::now() {
        Ok(())
    } else {
        let mut err = ValidationError::new("future");
        err.message = Some("date must be in the future".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_validate_future() {
        assert!(validate_future(&(Utc::now() + Duration::hours(1))).is_ok());
        assert!(validate_future(&(Utc::now() - Duration::seconds(1))).is_err());
    }
}
