//! 用户 API 模块
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /users/signup | POST | 注册 | 无 |
//! | /users/login | POST | 登录 | 无 |
//! | /users | GET | 分页获取用户 | Bearer |
//! | /users/{id} | GET | 获取单个用户 | Bearer |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/users", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/signup", post(handler::sign_up))
        .route("/login", post(handler::login))
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id))
}
