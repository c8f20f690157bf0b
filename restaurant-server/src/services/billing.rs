//! 账单视图组装
//!
//! 订单明细 ⟶ 左连接菜品 ⟶ 左连接订单 ⟶ 左连接桌台 ⟶ 按 (order, table, table_number) 分组。
//!
//! 数据库只做四次简单查询, 连接与分组在 [`assemble`] 中完成 (纯函数)。

use std::collections::HashMap;

use shared::models::{BillingGroup, BillingLine};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::{DiningTable, Food, Order, OrderItem};
use crate::db::repository::{
    DiningTableRepository, FoodRepository, OrderItemRepository, OrderRepository, RepoResult,
};

type GroupKey = (Option<String>, Option<String>, Option<i32>);

/// Join items with foods, orders and tables, then group
///
/// Unmatched joins keep the row with `None` fields. Groups and the lines in
/// each group keep input order.
pub fn assemble(
    items: Vec<OrderItem>,
    foods: &HashMap<String, Food>,
    orders: &HashMap<String, Order>,
    tables: &HashMap<String, DiningTable>,
) -> Vec<BillingGroup> {
    let mut groups: Vec<BillingGroup> = Vec::new();
    let mut index: HashMap<GroupKey, usize> = HashMap::new();

    for item in items {
        let food = foods.get(&item.food_id);
        let order = orders.get(&item.order_id);
        let table = order.and_then(|o| tables.get(&o.table_id));

        let line = BillingLine {
            order_item_id: item.order_item_id,
            food_id: item.food_id,
            quantity: item.quantity,
            unit_price: item.unit_price,
            amount: food.map(|f| f.price),
            price: food.map(|f| f.price),
            food_name: food.map(|f| f.name.clone()),
            food_image: food.map(|f| f.food_image.clone()),
            order_id: order.map(|o| o.order_id.clone()),
            table_id: table.map(|t| t.table_id.clone()),
            table_number: table.map(|t| t.table_number),
        };

        let key = (
            line.order_id.clone(),
            line.table_id.clone(),
            line.table_number,
        );
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(BillingGroup {
                payment_due: 0.0,
                total_count: 0,
                table_number: line.table_number,
                order_items: Vec::new(),
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        if let Some(amount) = line.amount {
            group.payment_due += amount;
        }
        group.total_count += 1;
        group.order_items.push(line);
    }

    groups
}

/// Billing view loader
#[derive(Clone)]
pub struct BillingService {
    items: OrderItemRepository,
    foods: FoodRepository,
    orders: OrderRepository,
    tables: DiningTableRepository,
}

impl BillingService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            items: OrderItemRepository::new(db.clone()),
            foods: FoodRepository::new(db.clone()),
            orders: OrderRepository::new(db.clone()),
            tables: DiningTableRepository::new(db),
        }
    }

    /// Billing groups for one order; empty when the order has no items
    pub async fn items_by_order(&self, order_id: &str) -> RepoResult<Vec<BillingGroup>> {
        let items = self.items.find_by_order(order_id).await?;
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut food_ids: Vec<String> = items.iter().map(|i| i.food_id.clone()).collect();
        food_ids.sort();
        food_ids.dedup();
        let foods: HashMap<String, Food> = self
            .foods
            .find_many(food_ids)
            .await?
            .into_iter()
            .map(|f| (f.food_id.clone(), f))
            .collect();

        let mut orders = HashMap::new();
        let mut tables = HashMap::new();
        if let Some(order) = self.orders.find_by_id(order_id).await? {
            if let Some(table) = self.tables.find_by_id(&order.table_id).await? {
                tables.insert(table.table_id.clone(), table);
            }
            orders.insert(order.order_id.clone(), order);
        }

        let groups = assemble(items, &foods, &orders, &tables);
        tracing::debug!(order_id = %order_id, groups = groups.len(), "Billing view assembled");
        Ok(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::models::Portion;

    fn food(id: &str, price: f64) -> Food {
        Food {
            id: None,
            food_id: id.into(),
            name: format!("food {id}"),
            price,
            food_image: format!("{id}.png"),
            menu_id: "m1".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn item(id: &str, order_id: &str, food_id: &str) -> OrderItem {
        OrderItem::new(id.into(), order_id.into(), food_id.into(), Portion::M, 1.0)
    }

    fn order(id: &str, table_id: &str) -> Order {
        Order::new(id.into(), table_id.into(), Utc::now())
    }

    fn table(id: &str, number: i32) -> DiningTable {
        DiningTable {
            id: None,
            table_id: id.into(),
            number_of_guests: 4,
            table_number: number,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn by_key<T>(values: Vec<T>, key: impl Fn(&T) -> String) -> HashMap<String, T> {
        values.into_iter().map(|v| (key(&v), v)).collect()
    }

    #[test]
    fn test_single_order_bill() {
        let foods = by_key(vec![food("f1", 10.0), food("f2", 15.5)], |f| f.food_id.clone());
        let orders = by_key(vec![order("o1", "t1")], |o| o.order_id.clone());
        let tables = by_key(vec![table("t1", 7)], |t| t.table_id.clone());
        let items = vec![item("i1", "o1", "f1"), item("i2", "o1", "f2")];

        let groups = assemble(items, &foods, &orders, &tables);
        assert_eq!(groups.len(), 1);
        let group = &groups[0];
        assert_eq!(group.payment_due, 25.5);
        assert_eq!(group.total_count, 2);
        assert_eq!(group.table_number, Some(7));
        assert_eq!(group.order_items.len(), 2);
        assert_eq!(group.order_items[0].order_item_id, "i1");
        assert_eq!(group.order_items[1].food_name.as_deref(), Some("food f2"));
        assert_eq!(group.order_items[1].quantity, Portion::M);
    }

    #[test]
    fn test_missing_food_keeps_row() {
        let foods = by_key(vec![food("f1", 10.0)], |f| f.food_id.clone());
        let orders = by_key(vec![order("o1", "t1")], |o| o.order_id.clone());
        let tables = by_key(vec![table("t1", 3)], |t| t.table_id.clone());
        let items = vec![item("i1", "o1", "f1"), item("i2", "o1", "gone")];

        let groups = assemble(items, &foods, &orders, &tables);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].payment_due, 10.0);
        assert_eq!(groups[0].total_count, 2);
        assert!(groups[0].order_items[1].amount.is_none());
        assert!(groups[0].order_items[1].food_name.is_none());
    }

    #[test]
    fn test_missing_order_and_table() {
        let foods = by_key(vec![food("f1", 4.25)], |f| f.food_id.clone());
        let items = vec![item("i1", "o1", "f1")];

        let groups = assemble(items, &foods, &HashMap::new(), &HashMap::new());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].table_number, None);
        assert_eq!(groups[0].order_items[0].order_id, None);
        assert_eq!(groups[0].payment_due, 4.25);
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let foods = by_key(vec![food("f1", 1.0)], |f| f.food_id.clone());
        let orders = by_key(vec![order("o1", "t1"), order("o2", "t2")], |o| {
            o.order_id.clone()
        });
        let tables = by_key(vec![table("t1", 1), table("t2", 2)], |t| t.table_id.clone());
        let items = vec![
            item("i1", "o2", "f1"),
            item("i2", "o1", "f1"),
            item("i3", "o2", "f1"),
        ];

        let groups = assemble(items, &foods, &orders, &tables);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].table_number, Some(2));
        assert_eq!(groups[0].total_count, 2);
        assert_eq!(groups[1].table_number, Some(1));
    }

    #[test]
    fn test_no_items_no_groups() {
        let groups = assemble(vec![], &HashMap::new(), &HashMap::new(), &HashMap::new());
        assert!(groups.is_empty());
    }
}
