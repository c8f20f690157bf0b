//! 服务层
//!
//! # 服务列表
//!
//! - [`AccountService`] - 注册、登录、用户查询
//! - [`BillingService`] - 订单账单视图
//! - [`InvoiceService`] - 发票 CRUD 与账单视图
//! - [`HttpService`] - HTTP 服务器

pub mod account;
pub mod billing;
pub mod http;
pub mod invoice;

pub use account::AccountService;
pub use billing::BillingService;
pub use http::HttpService;
pub use invoice::InvoiceService;
