//! Invoice API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::models::{InvoiceCreate, InvoiceUpdate, InvoiceView};
use shared::{DeleteAck, InsertAck, Page, UpdateAck};

use crate::api::{PageParams, ValidJson};
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::Invoice;
use crate::services::InvoiceService;
use crate::utils::AppResult;

const ITEMS_KEY: &str = "invoice_items";

/// GET /invoices - 分页获取发票
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Page<Invoice>>> {
    let page = params.to_request()?;
    let service = InvoiceService::new(state.db.clone());
    let (total, invoices) = service.list(page).await?;
    Ok(Json(Page::new(ITEMS_KEY, total, invoices)))
}

/// GET /invoices/{id} - 发票 + 订单账单视图
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<InvoiceView>> {
    let service = InvoiceService::new(state.db.clone());
    Ok(Json(service.get(&id).await?))
}

/// POST /invoices - 为订单开具发票
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<InvoiceCreate>,
) -> AppResult<Json<InsertAck>> {
    let service = InvoiceService::new(state.db.clone());
    let invoice = service.create(payload).await?;
    Ok(Json(InsertAck {
        inserted_id: invoice.invoice_id,
    }))
}

/// PATCH /invoices/{id} - 更新支付方式 / 状态
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidJson(payload): ValidJson<InvoiceUpdate>,
) -> AppResult<Json<UpdateAck>> {
    let service = InvoiceService::new(state.db.clone());
    service.update(&id, payload).await?;
    Ok(Json(UpdateAck::one()))
}

/// DELETE /invoices/{id}
pub async fn delete(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteAck>> {
    let service = InvoiceService::new(state.db.clone());
    service.delete(&id).await?;
    tracing::info!(invoice_id = %id, operator = %current_user.uid, "Invoice deleted");
    Ok(Json(DeleteAck { deleted_count: 1 }))
}
