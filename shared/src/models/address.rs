//! Address Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Address entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address_id: Option<i64>,
    pub street: String,
    pub number: String,
    pub city: String,
    pub country: String,
    pub postal_code: String,
    /// Owning user reference.
    pub user_id: Option<i64>,
}

/// Create/update address payload
///
/// All five fields must be non-empty before persistence is attempted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddressCreate {
    #[validate(length(min = 1, message = "street is required"))]
    pub street: String,
    #[validate(length(min = 1, message = "number is required"))]
    pub number: String,
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "country is required"))]
    pub country: String,
    #[validate(length(min = 1, message = "postal code is required"))]
    pub postal_code: String,
}
