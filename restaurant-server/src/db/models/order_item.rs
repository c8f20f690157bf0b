//! Order Item Model

use super::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::Portion;
use surrealdb::RecordId;

use crate::utils::money::round_money;

/// Order line entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(
        default,
        skip_serializing,
        deserialize_with = "serde_helpers::option_record_id::deserialize"
    )]
    pub id: Option<RecordId>,
    pub order_item_id: String,
    pub quantity: Portion,
    /// 2 位小数
    pub unit_price: f64,
    pub food_id: String,
    pub order_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderItem {
    pub fn new(
        order_item_id: String,
        order_id: String,
        food_id: String,
        quantity: Portion,
        unit_price: f64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            order_item_id,
            quantity,
            unit_price: round_money(unit_price),
            food_id,
            order_id,
            created_at: now,
            updated_at: now,
        }
    }
}
