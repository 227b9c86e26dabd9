//! Shared types for the trueque marketplace client
//!
//! Wire-level data model used by the client crates: entities for the
//! five backend resources, request/response DTOs, and normalization
//! helpers for historical payload shapes.

pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
