//! Order Item API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /orderItems | GET | 分页获取明细 |
//! | /orderItems | POST | 为桌台创建订单及全部明细 (单事务) |
//! | /orderItems/{id} | GET, PATCH, DELETE | 单条明细 |
//! | /orderItems-order/{id} | GET | 订单账单视图 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/orderItems", routes())
        .route("/orderItems-order/{id}", get(handler::items_by_order))
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .patch(handler::update)
                .delete(handler::delete),
        )
}
