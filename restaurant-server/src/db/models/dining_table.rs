//! Dining Table Model

use super::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::DiningTableCreate;
use surrealdb::RecordId;

/// Dining table entity (桌台)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTable {
    #[serde(
        default,
        skip_serializing,
        deserialize_with = "serde_helpers::option_record_id::deserialize"
    )]
    pub id: Option<RecordId>,
    pub table_id: String,
    pub number_of_guests: i32,
    pub table_number: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DiningTable {
    pub fn new(table_id: String, data: DiningTableCreate) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            table_id,
            number_of_guests: data.number_of_guests,
            table_number: data.table_number,
            created_at: now,
            updated_at: now,
        }
    }
}
