//! Menu Model

use super::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::MenuCreate;
use surrealdb::RecordId;

/// Menu entity (菜单)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    #[serde(
        default,
        skip_serializing,
        deserialize_with = "serde_helpers::option_record_id::deserialize"
    )]
    pub id: Option<RecordId>,
    pub menu_id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Menu {
    pub fn new(menu_id: String, data: MenuCreate) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            menu_id,
            name: data.name,
            category: data.category,
            start_date: Some(data.start_date),
            end_date: Some(data.end_date),
            created_at: now,
            updated_at: now,
        }
    }
}
