//! Order Item API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::models::{BillingGroup, OrderItemPack, OrderItemUpdate};
use shared::{DeleteAck, InsertManyAck, Page, UpdateAck};

use crate::api::{PageParams, ValidJson};
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::OrderItem;
use crate::db::repository::{OrderItemRepository, OrderRepository};
use crate::services::BillingService;
use crate::utils::{AppError, AppResult};

const ITEMS_KEY: &str = "order_item_items";

/// GET /orderItems - 分页获取订单明细
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Page<OrderItem>>> {
    let page = params.to_request()?;
    let repo = OrderItemRepository::new(state.db.clone());
    let (total, items) = repo.list(page).await?;
    Ok(Json(Page::new(ITEMS_KEY, total, items)))
}

/// GET /orderItems/{id} - 获取单条明细
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<OrderItem>> {
    let repo = OrderItemRepository::new(state.db.clone());
    let item = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("order item {} not found", id)))?;
    Ok(Json(item))
}

/// POST /orderItems - 创建订单及其明细
pub async fn create(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    ValidJson(payload): ValidJson<OrderItemPack>,
) -> AppResult<Json<InsertManyAck>> {
    let repo = OrderRepository::new(state.db.clone());
    let (order_id, inserted_ids) = repo.create_with_items(payload).await?;
    tracing::info!(
        order_id = %order_id,
        item_count = inserted_ids.len(),
        operator = %current_user.uid,
        "Order created with items"
    );
    Ok(Json(InsertManyAck {
        order_id,
        inserted_ids,
    }))
}

/// PATCH /orderItems/{id} - 部分更新明细
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidJson(payload): ValidJson<OrderItemUpdate>,
) -> AppResult<Json<UpdateAck>> {
    let repo = OrderItemRepository::new(state.db.clone());
    repo.update(&id, payload).await?;
    tracing::info!(order_item_id = %id, "Order item updated");
    Ok(Json(UpdateAck::one()))
}

/// DELETE /orderItems/{id} - 删除明细
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteAck>> {
    let repo = OrderItemRepository::new(state.db.clone());
    repo.delete(&id).await?;
    tracing::info!(order_item_id = %id, "Order item deleted");
    Ok(Json(DeleteAck { deleted_count: 1 }))
}

/// GET /orderItems-order/{id} - 订单账单视图 (无明细时为空数组)
pub async fn items_by_order(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<Vec<BillingGroup>>> {
    let billing = BillingService::new(state.db.clone());
    Ok(Json(billing.items_by_order(&order_id).await?))
}
