//! Food Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Create food payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FoodCreate {
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    /// Rounded to 2 dp before storage
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(length(min = 1))]
    pub food_image: String,
    /// Natural key of the owning menu
    #[validate(length(min = 1))]
    pub menu_id: String,
}

/// Update food payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct FoodUpdate {
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    pub food_image: Option<String>,
    pub menu_id: Option<String>,
}
