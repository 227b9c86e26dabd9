//! Product Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a listed product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductStatus {
    Available,
    Reserved,
    Sold,
}

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Identity assigned by the backend. Absent on records the backend
    /// failed to fully materialize; consumers must not trust it to exist.
    pub product_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Non-negative decimal price.
    pub price: Decimal,
    pub status: ProductStatus,
    /// Owning user reference.
    pub user_id: Option<i64>,
    pub image: Option<String>,
    pub size: Option<String>,
    pub publication_date: Option<DateTime<Utc>>,
    pub category_id: Option<i64>,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub user_id: i64,
    pub image: Option<String>,
    pub size: Option<String>,
    pub category_id: Option<i64>,
}

/// Update product payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub status: Option<ProductStatus>,
    pub image: Option<String>,
    pub size: Option<String>,
    pub category_id: Option<i64>,
}
