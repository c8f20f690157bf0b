//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::models::{MenuCreate, MenuUpdate};
use shared::{DeleteAck, InsertAck, Page, UpdateAck};

use crate::api::{PageParams, ValidJson};
use crate::core::ServerState;
use crate::db::models::Menu;
use crate::db::repository::MenuRepository;
use crate::utils::{AppError, AppResult};

const ITEMS_KEY: &str = "menu_items";

/// GET /menus - 分页获取菜单
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Page<Menu>>> {
    let page = params.to_request()?;
    let repo = MenuRepository::new(state.db.clone());
    let (total, menus) = repo.list(page).await?;
    Ok(Json(Page::new(ITEMS_KEY, total, menus)))
}

/// GET /menus/{id} - 获取单个菜单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Menu>> {
    let repo = MenuRepository::new(state.db.clone());
    let menu = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("menu {} not found", id)))?;
    Ok(Json(menu))
}

/// POST /menus - 创建菜单
///
/// `start_date` 必须在未来, `end_date` 必须晚于 `start_date`
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<MenuCreate>,
) -> AppResult<Json<InsertAck>> {
    let repo = MenuRepository::new(state.db.clone());
    let menu = repo.create(payload).await?;
    tracing::info!(menu_id = %menu.menu_id, name = %menu.name, "Menu created");
    Ok(Json(InsertAck {
        inserted_id: menu.menu_id,
    }))
}

/// PATCH /menus/{id} - 部分更新菜单 (日期需成对提供)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidJson(payload): ValidJson<MenuUpdate>,
) -> AppResult<Json<UpdateAck>> {
    let repo = MenuRepository::new(state.db.clone());
    repo.update(&id, payload).await?;
    tracing::info!(menu_id = %id, "Menu updated");
    Ok(Json(UpdateAck::one()))
}

/// DELETE /menus/{id} - 删除菜单
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteAck>> {
    let repo = MenuRepository::new(state.db.clone());
    repo.delete(&id).await?;
    tracing::info!(menu_id = %id, "Menu deleted");
    Ok(Json(DeleteAck { deleted_count: 1 }))
}
