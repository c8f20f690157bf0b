//! Database Module
//!
//! Embedded SurrealDB (RocksDB backend): connection lifecycle and schema.

pub mod models;
pub mod object_id;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::db::repository::RepoError;

/// Table names
pub mod tables {
    pub const FOOD: &str = "food";
    pub const MENU: &str = "menu";
    pub const DINING_TABLE: &str = "dining_table";
    pub const ORDER: &str = "order";
    pub const ORDER_ITEM: &str = "order_item";
    pub const INVOICE: &str = "invoice";
    pub const USER: &str = "user";
}

/// Schema: schemaless tables, uniqueness on user email/phone
const SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS `food` SCHEMALESS;
DEFINE TABLE IF NOT EXISTS `menu` SCHEMALESS;
DEFINE TABLE IF NOT EXISTS `dining_table` SCHEMALESS;
DEFINE TABLE IF NOT EXISTS `order` SCHEMALESS;
DEFINE TABLE IF NOT EXISTS `order_item` SCHEMALESS;
DEFINE TABLE IF NOT EXISTS `invoice` SCHEMALESS;
DEFINE TABLE IF NOT EXISTS `user` SCHEMALESS;
DEFINE INDEX IF NOT EXISTS user_email ON TABLE `user` COLUMNS email UNIQUE;
DEFINE INDEX IF NOT EXISTS user_phone ON TABLE `user` COLUMNS phone UNIQUE;
DEFINE INDEX IF NOT EXISTS order_item_order ON TABLE `order_item` COLUMNS order_id;
DEFINE INDEX IF NOT EXISTS invoice_order ON TABLE `invoice` COLUMNS order_id;
"#;

/// Database service, owns the embedded SurrealDB handle
#[derive(Clone, Debug)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the database at `path` and define the schema
    pub async fn open(path: &Path, namespace: &str, database: &str) -> Result<Self, RepoError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(path).await?;
        db.use_ns(namespace).use_db(database).await?;
        tracing::info!(path = %path.display(), namespace, database, "Database connection established");

        let service = Self { db };
        service.define_schema().await?;
        Ok(service)
    }

    /// Wrap an already opened handle
    pub fn from_handle(db: Surreal<Db>) -> Self {
        Self { db }
    }

    async fn define_schema(&self) -> Result<(), RepoError> {
        self.db.query(SCHEMA).await?.check()?;
        tracing::info!("Database schema defined");
        Ok(())
    }

    /// Release the handle; RocksDB closes once the last clone drops
    pub async fn close(self) {
        drop(self.db);
        tracing::info!("Database handle closed");
    }
}
