//! Order Item Repository

use super::{BaseRepository, PageRequest, Patch, RepoResult, non_blank};
use crate::db::models::OrderItem;
use crate::db::tables;
use crate::utils::money::round_money;
use shared::models::OrderItemUpdate;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct OrderItemRepository {
    base: BaseRepository,
}

impl OrderItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db, tables::ORDER_ITEM),
        }
    }

    pub async fn list(&self, page: PageRequest) -> RepoResult<(u64, Vec<OrderItem>)> {
        self.base.paginate(page).await
    }

    pub async fn find_by_id(&self, order_item_id: &str) -> RepoResult<Option<OrderItem>> {
        self.base.find(order_item_id).await
    }

    /// All items of one order in natural key order
    pub async fn find_by_order(&self, order_id: &str) -> RepoResult<Vec<OrderItem>> {
        let items: Vec<OrderItem> = self
            .base
            .db()
            .query("SELECT * FROM type::table($tb) WHERE order_id = $order ORDER BY id")
            .bind(("tb", tables::ORDER_ITEM))
            .bind(("order", order_id.to_string()))
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Sparse update; a new food must exist
    pub async fn update(&self, order_item_id: &str, data: OrderItemUpdate) -> RepoResult<()> {
        let food_id = non_blank(data.food_id);
        if let Some(food_id) = &food_id {
            self.base.ensure_ref(tables::FOOD, food_id).await?;
        }

        let mut patch = Patch::new();
        patch.set("quantity", data.quantity)?;
        patch.set("unit_price", data.unit_price.map(round_money))?;
        patch.set_text("food_id", food_id);
        self.base.merge(order_item_id, patch).await
    }

    pub async fn delete(&self, order_item_id: &str) -> RepoResult<()> {
        self.base.remove(order_item_id).await
    }
}
