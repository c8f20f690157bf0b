//! Menu Repository

use super::{BaseRepository, PageRequest, Patch, RepoResult};
use crate::db::models::Menu;
use crate::db::object_id;
use crate::db::tables;
use shared::models::{MenuCreate, MenuUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct MenuRepository {
    base: BaseRepository,
}

impl MenuRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db, tables::MENU),
        }
    }

    pub async fn list(&self, page: PageRequest) -> RepoResult<(u64, Vec<Menu>)> {
        self.base.paginate(page).await
    }

    pub async fn find_by_id(&self, menu_id: &str) -> RepoResult<Option<Menu>> {
        self.base.find(menu_id).await
    }

    pub async fn create(&self, data: MenuCreate) -> RepoResult<Menu> {
        let key = object_id::new_key();
        let menu = Menu::new(key.clone(), data);
        self.base.insert(&key, menu).await
    }

    /// Sparse update; dates only as a validated pair
    pub async fn update(&self, menu_id: &str, data: MenuUpdate) -> RepoResult<()> {
        let span = data.date_span();

        let mut patch = Patch::new();
        patch.set_text("name", data.name);
        patch.set_text("category", data.category);
        if let Some((start, end)) = span {
            patch.set("start_date", Some(start))?;
            patch.set("end_date", Some(end))?;
        }
        self.base.merge(menu_id, patch).await
    }

    pub async fn delete(&self, menu_id: &str) -> RepoResult<()> {
        self.base.remove(menu_id).await
    }
}
