//! Database Models
//!
//! Stored documents. Every entity carries its natural key as a field and as
//! the key of its record id; `id` is read-only and never written back.

// Serde helpers
pub mod serde_helpers;

// Menu Domain
pub mod food;
pub mod menu;

// Location
pub mod dining_table;

// Orders
pub mod invoice;
pub mod order;
pub mod order_item;

// Auth
pub mod user;

// Re-exports
pub use dining_table::DiningTable;
pub use food::Food;
pub use invoice::Invoice;
pub use menu::Menu;
pub use order::Order;
pub use order_item::OrderItem;
pub use user::User;
