//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`users`] - 注册、登录、用户查询
//! - [`foods`] - 菜品管理接口
//! - [`menus`] - 菜单管理接口
//! - [`tables`] - 桌台管理接口
//! - [`orders`] - 订单管理接口
//! - [`order_items`] - 订单明细接口 (含账单视图)
//! - [`invoices`] - 发票管理接口

pub mod extract;
pub mod pagination;

pub mod health;
pub mod users;

// Data models API
pub mod foods;
pub mod invoices;
pub mod menus;
pub mod order_items;
pub mod orders;
pub mod tables;

// Re-export common types for handlers
pub use crate::utils::AppResult;
pub use extract::ValidJson;
pub use pagination::PageParams;
