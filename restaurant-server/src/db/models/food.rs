//! Food Model

use super::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::FoodCreate;
use surrealdb::RecordId;

use crate::utils::money::round_money;

/// Food entity (菜品)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    #[serde(
        default,
        skip_serializing,
        deserialize_with = "serde_helpers::option_record_id::deserialize"
    )]
    pub id: Option<RecordId>,
    pub food_id: String,
    pub name: String,
    /// 2 位小数
    pub price: f64,
    pub food_image: String,
    pub menu_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Food {
    pub fn new(food_id: String, data: FoodCreate) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            food_id,
            name: data.name,
            price: round_money(data.price),
            food_image: data.food_image,
            menu_id: data.menu_id,
            created_at: now,
            updated_at: now,
        }
    }
}
