//! Invoice Repository

use super::{BaseRepository, PageRequest, Patch, RepoResult};
use crate::db::models::Invoice;
use crate::db::object_id;
use crate::db::tables;
use shared::models::{InvoiceCreate, InvoiceUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct InvoiceRepository {
    base: BaseRepository,
}

impl InvoiceRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db, tables::INVOICE),
        }
    }

    pub async fn list(&self, page: PageRequest) -> RepoResult<(u64, Vec<Invoice>)> {
        self.base.paginate(page).await
    }

    pub async fn find_by_id(&self, invoice_id: &str) -> RepoResult<Option<Invoice>> {
        self.base.find(invoice_id).await
    }

    /// Create an invoice for an existing order
    pub async fn create(&self, data: InvoiceCreate) -> RepoResult<Invoice> {
        self.base.ensure_ref(tables::ORDER, &data.order_id).await?;

        let key = object_id::new_key();
        let invoice = Invoice::new(
            key.clone(),
            data.order_id,
            data.payment_method,
            data.payment_status,
        );
        self.base.insert(&key, invoice).await
    }

    /// Patch payment method / status
    pub async fn update(&self, invoice_id: &str, data: InvoiceUpdate) -> RepoResult<()> {
        let mut patch = Patch::new();
        patch.set("payment_method", data.payment_method)?;
        patch.set("payment_status", data.payment_status)?;
        self.base.merge(invoice_id, patch).await
    }

    pub async fn delete(&self, invoice_id: &str) -> RepoResult<()> {
        self.base.remove(invoice_id).await
    }
}
