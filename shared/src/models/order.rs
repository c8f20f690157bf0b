//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validate_future;

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderCreate {
    #[validate(custom(function = "validate_future"))]
    pub order_date: DateTime<Utc>,
    /// Natural key of the dining table
    #[validate(length(min = 1))]
    pub table_id: String,
}

/// Update order payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct OrderUpdate {
    #[validate(custom(function = "validate_future"))]
    pub order_date: Option<DateTime<Utc>>,
    pub table_id: Option<String>,
}
