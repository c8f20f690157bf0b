//! Invoice service
//!
//! CRUD goes straight to [`InvoiceRepository`]; reads are joined with the
//! order's billing view.

use shared::models::{BillingGroup, InvoiceCreate, InvoiceUpdate, InvoiceView};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::Invoice;
use crate::db::repository::{InvoiceRepository, PageRequest};
use crate::services::billing::BillingService;
use crate::utils::{AppError, AppResult};

const NULL_PAYMENT_METHOD: &str = "null";

#[derive(Clone)]
pub struct InvoiceService {
    repo: InvoiceRepository,
    billing: BillingService,
}

impl InvoiceService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            repo: InvoiceRepository::new(db.clone()),
            billing: BillingService::new(db),
        }
    }

    pub async fn list(&self, page: PageRequest) -> AppResult<(u64, Vec<Invoice>)> {
        Ok(self.repo.list(page).await?)
    }

    /// Invoice plus the first billing group of its order
    pub async fn get(&self, invoice_id: &str) -> AppResult<InvoiceView> {
        let invoice = self
            .repo
            .find_by_id(invoice_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("invoice {invoice_id} not found")))?;

        let group = self
            .billing
            .items_by_order(&invoice.order_id)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::not_found("no billing data for order"))?;

        Ok(build_view(invoice, group))
    }

    pub async fn create(&self, data: InvoiceCreate) -> AppResult<Invoice> {
        let invoice = self.repo.create(data).await?;
        tracing::info!(
            invoice_id = %invoice.invoice_id,
            order_id = %invoice.order_id,
            "Invoice created"
        );
        Ok(invoice)
    }

    pub async fn update(&self, invoice_id: &str, data: InvoiceUpdate) -> AppResult<()> {
        self.repo.update(invoice_id, data).await?;
        tracing::info!(invoice_id = %invoice_id, "Invoice updated");
        Ok(())
    }

    pub async fn delete(&self, invoice_id: &str) -> AppResult<()> {
        Ok(self.repo.delete(invoice_id).await?)
    }
}

fn build_view(invoice: Invoice, group: BillingGroup) -> InvoiceView {
    InvoiceView {
        invoice_id: invoice.invoice_id,
        payment_method: invoice
            .payment_method
            .map(|m| m.as_str())
            .unwrap_or(NULL_PAYMENT_METHOD)
            .to_string(),
        order_id: invoice.order_id,
        payment_status: invoice.payment_status,
        payment_due: group.payment_due,
        table_number: group.table_number,
        payment_due_date: invoice.payment_due_date,
        order_details: group.order_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{PaymentMethod, PaymentStatus};

    fn group() -> BillingGroup {
        BillingGroup {
            payment_due: 25.5,
            total_count: 0,
            table_number: Some(4),
            order_items: vec![],
        }
    }

    #[test]
    fn test_view_without_payment_method() {
        let invoice = Invoice::new("inv".into(), "ord".into(), None, None);
        let due = invoice.payment_due_date;
        let view = build_view(invoice, group());
        assert_eq!(view.payment_method, "null");
        assert_eq!(view.payment_status, PaymentStatus::Pending);
        assert_eq!(view.payment_due, 25.5);
        assert_eq!(view.table_number, Some(4));
        assert_eq!(view.payment_due_date, due);
    }

    #[test]
    fn test_view_with_payment_method() {
        let invoice = Invoice::new(
            "inv".into(),
            "ord".into(),
            Some(PaymentMethod::Cash),
            Some(PaymentStatus::Paid),
        );
        let view = build_view(invoice, group());
        assert_eq!(view.payment_method, "CASH");
        assert_eq!(view.payment_status, PaymentStatus::Paid);
        assert_eq!(view.order_id, "ord");
    }
}
