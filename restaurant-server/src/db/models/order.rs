//! Order Model

use super::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(
        default,
        skip_serializing,
        deserialize_with = "serde_helpers::option_record_id::deserialize"
    )]
    pub id: Option<RecordId>,
    pub order_id: String,
    pub order_date: DateTime<Utc>,
    /// Natural key of the dining table
    pub table_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn new(order_id: String, table_id: String, order_date: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            order_id,
            order_date,
            table_id,
            created_at: now,
            updated_at: now,
        }
    }
}
