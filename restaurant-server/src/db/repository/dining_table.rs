//! Dining Table Repository

use super::{BaseRepository, PageRequest, Patch, RepoResult};
use crate::db::models::DiningTable;
use crate::db::object_id;
use crate::db::tables;
use shared::models::{DiningTableCreate, DiningTableUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct DiningTableRepository {
    base: BaseRepository,
}

impl DiningTableRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db, tables::DINING_TABLE),
        }
    }

    pub async fn list(&self, page: PageRequest) -> RepoResult<(u64, Vec<DiningTable>)> {
        self.base.paginate(page).await
    }

    /// Find table by natural key
    pub async fn find_by_id(&self, table_id: &str) -> RepoResult<Option<DiningTable>> {
        self.base.find(table_id).await
    }

    /// Create a new dining table
    pub async fn create(&self, data: DiningTableCreate) -> RepoResult<DiningTable> {
        let key = object_id::new_key();
        let table = DiningTable::new(key.clone(), data);
        self.base.insert(&key, table).await
    }

    /// Update a dining table
    pub async fn update(&self, table_id: &str, data: DiningTableUpdate) -> RepoResult<()> {
        let mut patch = Patch::new();
        patch.set("number_of_guests", data.number_of_guests)?;
        patch.set("table_number", data.table_number)?;
        self.base.merge(table_id, patch).await
    }

    /// Hard delete a dining table
    pub async fn delete(&self, table_id: &str) -> RepoResult<()> {
        self.base.remove(table_id).await
    }
}
