//! Data models
//!
//! Wire entities shared between the resource client and the
//! orchestrators. All IDs are `i64` (the backend is a numeric-ID system
//! of record); records carry their own identity as `Option<i64>` because
//! historical payloads cannot be trusted to include it.

pub mod address;
pub mod cart;
pub mod exchange;
pub mod invoice;
pub mod product;
pub mod user;

// Re-exports
pub use address::*;
pub use cart::*;
pub use exchange::*;
pub use invoice::*;
pub use product::*;
pub use user::*;
