//! Food Repository

use super::{BaseRepository, PageRequest, Patch, RepoResult, non_blank};
use crate::db::models::Food;
use crate::db::object_id;
use crate::db::tables;
use crate::utils::money::round_money;
use shared::models::{FoodCreate, FoodUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct FoodRepository {
    base: BaseRepository,
}

impl FoodRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db, tables::FOOD),
        }
    }

    pub async fn list(&self, page: PageRequest) -> RepoResult<(u64, Vec<Food>)> {
        self.base.paginate(page).await
    }

    pub async fn find_by_id(&self, food_id: &str) -> RepoResult<Option<Food>> {
        self.base.find(food_id).await
    }

    /// Foods whose natural key is in `ids`
    pub async fn find_many(&self, ids: Vec<String>) -> RepoResult<Vec<Food>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let foods: Vec<Food> = self
            .base
            .db()
            .query("SELECT * FROM type::table($tb) WHERE food_id IN $ids")
            .bind(("tb", tables::FOOD))
            .bind(("ids", ids))
            .await?
            .take(0)?;
        Ok(foods)
    }

    /// Create a food under an existing menu
    pub async fn create(&self, data: FoodCreate) -> RepoResult<Food> {
        self.base.ensure_ref(tables::MENU, &data.menu_id).await?;

        let key = object_id::new_key();
        let food = Food::new(key.clone(), data);
        self.base.insert(&key, food).await
    }

    /// Sparse update; a new menu must exist
    pub async fn update(&self, food_id: &str, data: FoodUpdate) -> RepoResult<()> {
        let menu_id = non_blank(data.menu_id);
        if let Some(menu_id) = &menu_id {
            self.base.ensure_ref(tables::MENU, menu_id).await?;
        }

        let mut patch = Patch::new();
        patch.set_text("name", data.name);
        patch.set("price", data.price.map(round_money))?;
        patch.set_text("food_image", data.food_image);
        patch.set_text("menu_id", menu_id);
        self.base.merge(food_id, patch).await
    }

    pub async fn delete(&self, food_id: &str) -> RepoResult<()> {
        self.base.remove(food_id).await
    }
}
