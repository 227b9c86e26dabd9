//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport failed before a response was obtained
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// No authenticated session
    #[error("authentication required")]
    Unauthenticated,

    /// Action attempted by a party not entitled to it
    #[error("permission denied: {0}")]
    AuthorizationDenied(String),

    /// Client-side pre-flight validation failed; no request was issued
    #[error("validation failed: {0}")]
    Validation(String),

    /// Local working set is malformed (e.g. cart referencing products
    /// without a usable identity)
    #[error("data integrity: {0}")]
    DataIntegrity(String),

    /// Server returned an unexpected shape
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Server violated a documented invariant; fatal for the operation
    #[error("contract violation: {0}")]
    ContractViolation(String),

    /// Remote failure originating server-side (5xx class)
    #[error("server error ({status}): {message}")]
    ServerFailure { status: u16, message: String },

    /// Remote rejection originating client-side (4xx class, other than
    /// 401/403 which map to their own variants)
    #[error("request rejected ({status}): {message}")]
    RequestRejected { status: u16, message: String },

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Whether the failure originated on the server side (or in
    /// transport), as opposed to being rejected because of this request.
    /// Used to pick the user-facing message family.
    pub fn is_server_side(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::ServerFailure { .. } | Self::ContractViolation(_)
        )
    }

    /// Whether retrying the same request unchanged can succeed.
    pub fn is_retryable(&self) -> bool {
        self.is_server_side()
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
