//! Order Repository

use super::{BaseRepository, PageRequest, Patch, RepoError, RepoResult, non_blank};
use crate::db::models::{Order, OrderItem};
use crate::db::object_id;
use crate::db::tables;
use chrono::Utc;
use shared::models::{OrderCreate, OrderItemPack, OrderUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db, tables::ORDER),
        }
    }

    pub async fn list(&self, page: PageRequest) -> RepoResult<(u64, Vec<Order>)> {
        self.base.paginate(page).await
    }

    pub async fn find_by_id(&self, order_id: &str) -> RepoResult<Option<Order>> {
        self.base.find(order_id).await
    }

    /// Create an order for an existing table
    pub async fn create(&self, data: OrderCreate) -> RepoResult<Order> {
        self.base.ensure_ref(tables::DINING_TABLE, &data.table_id).await?;

        let key = object_id::new_key();
        let order = Order::new(key.clone(), data.table_id, data.order_date);
        self.base.insert(&key, order).await
    }

    /// Create an order dated now together with all its items
    ///
    /// 单个事务: 订单和明细要么全部写入, 要么全部回滚
    ///
    /// Returns the order key and the item keys in input order.
    pub async fn create_with_items(&self, pack: OrderItemPack) -> RepoResult<(String, Vec<String>)> {
        self.base.ensure_ref(tables::DINING_TABLE, &pack.table_id).await?;
        for item in &pack.order_items {
            self.base.ensure_ref(tables::FOOD, &item.food_id).await?;
        }

        let order_key = object_id::new_key();
        let order = Order::new(order_key.clone(), pack.table_id, Utc::now());

        let items: Vec<OrderItem> = pack
            .order_items
            .into_iter()
            .map(|input| {
                OrderItem::new(
                    object_id::new_key(),
                    order_key.clone(),
                    input.food_id,
                    input.quantity,
                    input.unit_price,
                )
            })
            .collect();
        let item_keys: Vec<String> = items.iter().map(|i| i.order_item_id.clone()).collect();

        let mut sql = String::from("BEGIN TRANSACTION;\n");
        sql.push_str("CREATE type::thing($order_tb, $order_key) CONTENT $order;\n");
        for i in 0..items.len() {
            sql.push_str(&format!(
                "CREATE type::thing($item_tb, $item_key_{i}) CONTENT $item_{i};\n"
            ));
        }
        sql.push_str("COMMIT TRANSACTION;");

        let mut query = self
            .base
            .db()
            .query(sql)
            .bind(("order_tb", tables::ORDER))
            .bind(("order_key", order_key.clone()))
            .bind(("order", order))
            .bind(("item_tb", tables::ORDER_ITEM));
        for (i, item) in items.into_iter().enumerate() {
            query = query
                .bind((format!("item_key_{i}"), item.order_item_id.clone()))
                .bind((format!("item_{i}"), item));
        }

        let response = query.await?;
        response.check().map_err(RepoError::from)?;

        Ok((order_key, item_keys))
    }

    /// Sparse update; a new table must exist
    pub async fn update(&self, order_id: &str, data: OrderUpdate) -> RepoResult<()> {
        let table_id = non_blank(data.table_id);
        if let Some(table_id) = &table_id {
            self.base.ensure_ref(tables::DINING_TABLE, table_id).await?;
        }

        let mut patch = Patch::new();
        patch.set("order_date", data.order_date)?;
        patch.set_text("table_id", table_id);
        self.base.merge(order_id, patch).await
    }

    pub async fn delete(&self, order_id: &str) -> RepoResult<()> {
        self.base.remove(order_id).await
    }
}
