//! Repository Module
//!
//! Provides CRUD and pagination over SurrealDB tables keyed by natural key.

// Menu Domain
pub mod food;
pub mod menu;

// Location
pub mod dining_table;

// Orders
pub mod invoice;
pub mod order;
pub mod order_item;

// Auth
pub mod user;

// Re-exports
pub use dining_table::DiningTableRepository;
pub use food::FoodRepository;
pub use invoice::InvoiceRepository;
pub use menu::MenuRepository;
pub use order::OrderRepository;
pub use order_item::OrderItemRepository;
pub use user::UserRepository;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// A referenced record (menu, food, table, order) does not exist
    #[error("Invalid reference: {0}")]
    InvalidReference(String),
}

impl RepoError {
    /// Classify a database error message
    ///
    /// unique index: "Database index `x` already contains ..."
    /// duplicate id: "Database record `t:k` already exists"
    fn from_db_message(msg: String) -> Self {
        if msg.contains("already contains") || msg.contains("already exists") {
            RepoError::Duplicate(msg)
        } else {
            RepoError::Database(msg)
        }
    }
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::from_db_message(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// One page window, `(page - 1) * size` based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
}

impl PageRequest {
    pub fn new(page: u64, size: u64) -> Self {
        Self {
            page: page.max(1),
            size: size.max(1),
        }
    }

    /// Offset of the first row, saturating at `u64::MAX`
    pub fn start(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.size)
    }

    /// Offset of the first row; None when it does not fit a database integer
    pub fn checked_start(&self) -> Option<u64> {
        self.page
            .saturating_sub(1)
            .checked_mul(self.size)
            .filter(|start| *start <= i64::MAX as u64)
    }
}

/// `None` for a missing or blank string; blanks count as "not supplied"
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Sparse merge document: only supplied fields plus `updated_at`
#[derive(Debug, Default)]
pub struct Patch(Map<String, Value>);

impl Patch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `field` when `value` is `Some`
    pub fn set<T: Serialize>(&mut self, field: &str, value: Option<T>) -> RepoResult<&mut Self> {
        if let Some(v) = value {
            let v = serde_json::to_value(v).map_err(|e| RepoError::Validation(e.to_string()))?;
            self.0.insert(field.to_string(), v);
        }
        Ok(self)
    }

    /// Set `field` when `value` is a non-empty string
    pub fn set_text(&mut self, field: &str, value: Option<String>) -> &mut Self {
        if let Some(v) = non_blank(value) {
            self.0.insert(field.to_string(), Value::String(v));
        }
        self
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Finish with the `updated_at` stamp
    pub fn into_value(mut self) -> RepoResult<Value> {
        let now = serde_json::to_value(chrono::Utc::now())
            .map_err(|e| RepoError::Database(e.to_string()))?;
        self.0.insert("updated_at".to_string(), now);
        Ok(Value::Object(self.0))
    }
}

#[derive(Debug, serde::Deserialize)]
struct CountRow {
    total: u64,
}

/// Only the record id of a returned document
#[derive(Debug, serde::Deserialize)]
struct Touched {
    #[allow(dead_code)]
    id: surrealdb::RecordId,
}

// =============================================================================
// ID Convention: record id 的 key 即 natural key
// =============================================================================
//
//   - 创建: db.create((table, key)).content(doc)
//   - 读取: db.select((table, key))
//   - 排序: ORDER BY id  (key 为定长十六进制, 字典序 = 生成顺序)

/// Base repository with database reference and shared CRUD helpers
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
    table: &'static str,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>, table: &'static str) -> Self {
        Self { db, table }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    /// Insert `doc` under record id `table:key`
    pub async fn insert<T>(&self, key: &str, doc: T) -> RepoResult<T>
    where
        T: Serialize + DeserializeOwned + 'static,
    {
        let created: Option<T> = self
            .db
            .create((self.table, key))
            .content(doc)
            .await?;
        created.ok_or_else(|| RepoError::Database(format!("Failed to create {}", self.table)))
    }

    pub async fn find<T>(&self, key: &str) -> RepoResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        let found: Option<T> = self.db.select((self.table, key)).await?;
        Ok(found)
    }

    /// Whether `table:key` exists in any table
    pub async fn exists_in(&self, table: &'static str, key: &str) -> RepoResult<bool> {
        let mut result = self
            .db
            .query("SELECT VALUE id FROM type::thing($tb, $key)")
            .bind(("tb", table))
            .bind(("key", key.to_string()))
            .await?;
        let ids: Vec<surrealdb::RecordId> = result.take(0)?;
        Ok(!ids.is_empty())
    }

    /// Fail with InvalidReference unless `table:key` exists
    pub async fn ensure_ref(&self, table: &'static str, key: &str) -> RepoResult<()> {
        if crate::db::object_id::is_valid(key) && self.exists_in(table, key).await? {
            Ok(())
        } else {
            Err(RepoError::InvalidReference(format!(
                "{} {} was not found",
                table.replace('_', " "),
                key
            )))
        }
    }

    /// Merge `patch` into `table:key`; NotFound when no record matches
    pub async fn merge(&self, key: &str, patch: Patch) -> RepoResult<()> {
        let patch = patch.into_value()?;
        let mut result = self
            .db
            .query("UPDATE type::thing($tb, $key) MERGE $patch RETURN AFTER")
            .bind(("tb", self.table))
            .bind(("key", key.to_string()))
            .bind(("patch", patch))
            .await?;
        let updated: Vec<Touched> = result.take(0)?;
        if updated.is_empty() {
            return Err(RepoError::NotFound(format!(
                "{} {} not found",
                self.table, key
            )));
        }
        Ok(())
    }

    /// Delete `table:key`; NotFound when no record matches
    pub async fn remove(&self, key: &str) -> RepoResult<()> {
        let mut result = self
            .db
            .query("DELETE type::thing($tb, $key) RETURN BEFORE")
            .bind(("tb", self.table))
            .bind(("key", key.to_string()))
            .await?;
        let removed: Vec<Touched> = result.take(0)?;
        if removed.is_empty() {
            return Err(RepoError::NotFound(format!(
                "{} {} not found",
                self.table, key
            )));
        }
        Ok(())
    }

    /// Total count plus one window in natural key order
    pub async fn paginate<T>(&self, page: PageRequest) -> RepoResult<(u64, Vec<T>)>
    where
        T: DeserializeOwned,
    {
        let mut result = self
            .db
            .query("SELECT count() AS total FROM type::table($tb) GROUP ALL")
            .query("SELECT * FROM type::table($tb) ORDER BY id LIMIT $limit START $start")
            .bind(("tb", self.table))
            .bind(("limit", page.size))
            .bind(("start", page.start()))
            .await?;
        let count: Option<CountRow> = result.take(0)?;
        let items: Vec<T> = result.take(1)?;
        Ok((count.map(|c| c.total).unwrap_or(0), items))
    }
}
