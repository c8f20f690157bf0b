//! Dining Table Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Create dining table payload (桌台)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DiningTableCreate {
    #[validate(range(min = 1))]
    pub number_of_guests: i32,
    #[validate(range(min = 1))]
    pub table_number: i32,
}

/// Update dining table payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct DiningTableUpdate {
    #[validate(range(min = 1))]
    pub number_of_guests: Option<i32>,
    #[validate(range(min = 1))]
    pub table_number: Option<i32>,
}
