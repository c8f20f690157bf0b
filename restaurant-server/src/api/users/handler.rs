//! 用户 API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::client::{LoginRequest, LoginResponse, SignUpRequest, UserView};
use shared::{InsertAck, Page};

use crate::api::{PageParams, ValidJson};
use crate::core::ServerState;
use crate::services::AccountService;
use crate::utils::AppResult;

fn service(state: &ServerState) -> AccountService {
    AccountService::new(state.db.clone(), state.jwt_service.clone())
}

/// POST /users/signup - 注册
pub async fn sign_up(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<SignUpRequest>,
) -> AppResult<Json<InsertAck>> {
    let user_id = service(&state).sign_up(payload).await?;
    Ok(Json(InsertAck {
        inserted_id: user_id,
    }))
}

/// POST /users/login - 登录
///
/// 用户不存在和密码错误返回相同的错误
pub async fn login(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    Ok(Json(service(&state).login(payload).await?))
}

/// GET /users - 分页获取用户
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Page<UserView>>> {
    let page = params.to_request()?;
    Ok(Json(service(&state).list(page).await?))
}

/// GET /users/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserView>> {
    Ok(Json(service(&state).get(&id).await?))
}
