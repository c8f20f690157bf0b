//! Billing view types
//!
//! 账单视图: order items joined with food and table, grouped per order.

use serde::{Deserialize, Serialize};

use super::order_item::Portion;

/// One enriched order line
///
/// Food, order and table fields are `None` when the join found no match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingLine {
    pub order_item_id: String,
    pub food_id: String,
    pub quantity: Portion,
    pub unit_price: f64,
    /// Price of the food at billing time
    pub amount: Option<f64>,
    pub price: Option<f64>,
    pub food_name: Option<String>,
    pub food_image: Option<String>,
    pub order_id: Option<String>,
    pub table_id: Option<String>,
    pub table_number: Option<i32>,
}

/// Lines of one (order, table) pair with the amount due
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingGroup {
    pub payment_due: f64,
    pub total_count: u64,
    pub table_number: Option<i32>,
    pub order_items: Vec<BillingLine>,
}
