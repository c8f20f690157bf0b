//! Dining Table API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::models::{DiningTableCreate, DiningTableUpdate};
use shared::{DeleteAck, InsertAck, Page, UpdateAck};

use crate::api::{PageParams, ValidJson};
use crate::core::ServerState;
use crate::db::models::DiningTable;
use crate::db::repository::DiningTableRepository;
use crate::utils::{AppError, AppResult};

const ITEMS_KEY: &str = "table_items";

/// GET /tables - 分页获取桌台
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Page<DiningTable>>> {
    let page = params.to_request()?;
    let repo = DiningTableRepository::new(state.db.clone());
    let (total, tables) = repo.list(page).await?;
    Ok(Json(Page::new(ITEMS_KEY, total, tables)))
}

/// GET /tables/{id} - 获取单个桌台
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DiningTable>> {
    let repo = DiningTableRepository::new(state.db.clone());
    let table = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("table {} not found", id)))?;
    Ok(Json(table))
}

/// POST /tables - 创建桌台
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<DiningTableCreate>,
) -> AppResult<Json<InsertAck>> {
    let repo = DiningTableRepository::new(state.db.clone());
    let table = repo.create(payload).await?;
    tracing::info!(
        table_id = %table.table_id,
        table_number = table.table_number,
        "Table created"
    );
    Ok(Json(InsertAck {
        inserted_id: table.table_id,
    }))
}

/// PATCH /tables/{id} - 部分更新桌台
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidJson(payload): ValidJson<DiningTableUpdate>,
) -> AppResult<Json<UpdateAck>> {
    let repo = DiningTableRepository::new(state.db.clone());
    repo.update(&id, payload).await?;
    tracing::info!(table_id = %id, "Table updated");
    Ok(Json(UpdateAck::one()))
}

/// DELETE /tables/{id} - 删除桌台
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteAck>> {
    let repo = DiningTableRepository::new(state.db.clone());
    repo.delete(&id).await?;
    tracing::info!(table_id = %id, "Table deleted");
    Ok(Json(DeleteAck { deleted_count: 1 }))
}
