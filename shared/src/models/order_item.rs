//! Order Item Model

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Portion size ordered for a food
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Portion {
    S,
    M,
    L,
}

impl fmt::Display for Portion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Portion::S => "S",
            Portion::M => "M",
            Portion::L => "L",
        };
        f.write_str(s)
    }
}

/// One line of an order-with-items request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderItemInput {
    pub quantity: Portion,
    #[validate(range(min = 0.0))]
    pub unit_price: f64,
    #[validate(length(min = 1))]
    pub food_id: String,
}

/// Order-with-items request: creates an order for the table and all its lines
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderItemPack {
    #[validate(length(min = 1))]
    pub table_id: String,
    #[validate(length(min = 1), nested)]
    pub order_items: Vec<OrderItemInput>,
}

/// Update order item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct OrderItemUpdate {
    pub quantity: Option<Portion>,
    #[validate(range(min = 0.0))]
    pub unit_price: Option<f64>,
    pub food_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portion_wire_format() {
        let p: Portion = serde_json::from_str("\"M\"").unwrap();
        assert_eq!(p, Portion::M);
        assert!(serde_json::from_str::<Portion>("\"XL\"").is_err());
        assert_eq!(serde_json::to_string(&Portion::L).unwrap(), "\"L\"");
    }

    #[test]
    fn test_pack_requires_items() {
        let pack = OrderItemPack {
            table_id: "t".into(),
            order_items: vec![],
        };
        assert!(pack.validate().is_err());
    }

    #[test]
    fn test_pack_validates_each_item() {
        let pack = OrderItemPack {
            table_id: "t".into(),
            order_items: vec![OrderItemInput {
                quantity: Portion::S,
                unit_price: 3.5,
                food_id: String::new(),
            }],
        };
        assert!(pack.validate().is_err());
    }
}
