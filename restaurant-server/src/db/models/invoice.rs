//! Invoice Model

use super::serde_helpers;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use shared::models::{PaymentMethod, PaymentStatus};
use surrealdb::RecordId;

/// Invoice entity (账单)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(
        default,
        skip_serializing,
        deserialize_with = "serde_helpers::option_record_id::deserialize"
    )]
    pub id: Option<RecordId>,
    pub invoice_id: String,
    pub order_id: String,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    pub payment_due_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Invoice {
    /// New invoice, due one day after creation
    pub fn new(
        invoice_id: String,
        order_id: String,
        payment_method: Option<PaymentMethod>,
        payment_status: Option<PaymentStatus>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            invoice_id,
            order_id,
            payment_method,
            payment_status: payment_status.unwrap_or_default(),
            payment_due_date: now + Duration::days(1),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_invoice_defaults() {
        let invoice = Invoice::new("i".into(), "o".into(), None, None);
        assert_eq!(invoice.payment_status, PaymentStatus::Pending);
        assert!(invoice.payment_method.is_none());
        assert_eq!(
            invoice.payment_due_date - invoice.created_at,
            Duration::days(1)
        );
    }
}
