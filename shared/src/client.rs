//! Client-related types shared with the backend auth surface
//!
//! Request/response DTOs for the authentication endpoints, plus the
//! error body shape the backend attaches to failed requests.

use serde::{Deserialize, Serialize};

use crate::models::User;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Username or email.
    pub name_or_email: String,
    pub password: String,
}

/// Login response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub data: Option<User>,
    #[serde(default)]
    pub message: String,
}

/// Register request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
    /// Primary address, created together with the account.
    pub address: RegisterAddress,
}

/// Address block of a registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterAddress {
    pub street: String,
    pub number: String,
    pub city: String,
    pub country: String,
    pub postal_code: String,
}

/// Register response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub user: Option<User>,
    #[serde(default)]
    pub message: String,
}

// =============================================================================
// Error body
// =============================================================================

/// Error payload attached by the backend to non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
