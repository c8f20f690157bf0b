//! Food API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::models::{FoodCreate, FoodUpdate};
use shared::{DeleteAck, InsertAck, Page, UpdateAck};

use crate::api::{PageParams, ValidJson};
use crate::core::ServerState;
use crate::db::models::Food;
use crate::db::repository::FoodRepository;
use crate::utils::{AppError, AppResult};

const ITEMS_KEY: &str = "food_items";

/// GET /foods - 分页获取菜品
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Page<Food>>> {
    let page = params.to_request()?;
    let repo = FoodRepository::new(state.db.clone());
    let (total, foods) = repo.list(page).await?;
    Ok(Json(Page::new(ITEMS_KEY, total, foods)))
}

/// GET /foods/{id} - 获取单个菜品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Food>> {
    let repo = FoodRepository::new(state.db.clone());
    let food = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("food {} not found", id)))?;
    Ok(Json(food))
}

/// POST /foods - 创建菜品 (菜单必须存在)
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<FoodCreate>,
) -> AppResult<Json<InsertAck>> {
    let repo = FoodRepository::new(state.db.clone());
    let food = repo.create(payload).await?;
    tracing::info!(food_id = %food.food_id, menu_id = %food.menu_id, "Food created");
    Ok(Json(InsertAck {
        inserted_id: food.food_id,
    }))
}

/// PATCH /foods/{id} - 部分更新菜品
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidJson(payload): ValidJson<FoodUpdate>,
) -> AppResult<Json<UpdateAck>> {
    let repo = FoodRepository::new(state.db.clone());
    repo.update(&id, payload).await?;
    tracing::info!(food_id = %id, "Food updated");
    Ok(Json(UpdateAck::one()))
}

/// DELETE /foods/{id} - 删除菜品
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteAck>> {
    let repo = FoodRepository::new(state.db.clone());
    repo.delete(&id).await?;
    tracing::info!(food_id = %id, "Food deleted");
    Ok(Json(DeleteAck { deleted_count: 1 }))
}
