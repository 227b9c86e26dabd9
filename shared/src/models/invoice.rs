//! Invoice Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Product;

/// Invoice entity
///
/// Terminal artifact of checkout; immutable once created except for
/// administrative deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub invoice_id: Option<i64>,
    /// Owning user reference.
    pub user_id: Option<i64>,
    /// Delivery address reference.
    pub address_id: Option<i64>,
    pub total_amount: Decimal,
    pub invoice_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub products: Vec<Product>,
}
