//! Cart Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Cart summary DTO
///
/// `product_ids` is kept as raw JSON values: historical carts contain
/// null and non-numeric entries, which consumers skip individually
/// instead of rejecting the whole summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub cart_id: Option<i64>,
    /// Owning user reference.
    pub user_id: Option<i64>,
    #[serde(default)]
    pub product_ids: Vec<Value>,
    /// Server-computed total; authoritative over any locally derived sum.
    pub total_price: Option<Decimal>,
    pub cart_date: Option<DateTime<Utc>>,
}

impl CartSummary {
    /// Product identities that are actually usable: present and numeric.
    pub fn valid_product_ids(&self) -> Vec<i64> {
        self.product_ids.iter().filter_map(Value::as_i64).collect()
    }

    /// Whether any raw entry is not a usable numeric identity.
    pub fn has_malformed_entries(&self) -> bool {
        self.product_ids.iter().any(|value| !value.is_i64())
    }

    /// Membership test by identity equality.
    pub fn contains(&self, product_id: i64) -> bool {
        self.product_ids
            .iter()
            .any(|value| value.as_i64() == Some(product_id))
    }

    pub fn is_empty(&self) -> bool {
        self.product_ids.is_empty()
    }
}

/// Checkout request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    /// Delivery address, resolved before submission.
    pub address_id: i64,
}
