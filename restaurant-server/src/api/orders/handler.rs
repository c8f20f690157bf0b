//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::models::{OrderCreate, OrderUpdate};
use shared::{DeleteAck, InsertAck, Page, UpdateAck};

use crate::api::{PageParams, ValidJson};
use crate::core::ServerState;
use crate::db::models::Order;
use crate::db::repository::OrderRepository;
use crate::utils::{AppError, AppResult};

const ITEMS_KEY: &str = "order_items";

/// GET /orders - 分页获取订单
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Page<Order>>> {
    let page = params.to_request()?;
    let repo = OrderRepository::new(state.db.clone());
    let (total, orders) = repo.list(page).await?;
    Ok(Json(Page::new(ITEMS_KEY, total, orders)))
}

/// GET /orders/{id} - 获取单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("order {} not found", id)))?;
    Ok(Json(order))
}

/// POST /orders - 创建订单 (桌台必须存在, 日期必须在未来)
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<OrderCreate>,
) -> AppResult<Json<InsertAck>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo.create(payload).await?;
    tracing::info!(order_id = %order.order_id, table_id = %order.table_id, "Order created");
    Ok(Json(InsertAck {
        inserted_id: order.order_id,
    }))
}

/// PATCH /orders/{id} - 部分更新订单
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidJson(payload): ValidJson<OrderUpdate>,
) -> AppResult<Json<UpdateAck>> {
    let repo = OrderRepository::new(state.db.clone());
    repo.update(&id, payload).await?;
    tracing::info!(order_id = %id, "Order updated");
    Ok(Json(UpdateAck::one()))
}

/// DELETE /orders/{id} - 删除订单
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteAck>> {
    let repo = OrderRepository::new(state.db.clone());
    repo.delete(&id).await?;
    tracing::info!(order_id = %id, "Order deleted");
    Ok(Json(DeleteAck { deleted_count: 1 }))
}
