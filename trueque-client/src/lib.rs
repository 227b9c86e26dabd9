//! Trueque Client - orchestration core for the marketplace REST API
//!
//! Provides the typed resource client, the explicitly passed session
//! context, and the cart/exchange orchestrators built on top of them.

pub mod address_book;
pub mod api;
pub mod cart;
pub mod config;
pub mod error;
pub mod exchange;
pub mod http;
pub mod session;

pub use address_book::AddressBook;
pub use api::{AddressApi, CartApi, ExchangeApi, ProductApi, UserApi};
pub use cart::{AddressSelection, CartOrchestrator, CheckoutState};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use exchange::{ExchangeActions, ExchangeOrchestrator, ExchangeRole, ExchangeSides, ExchangeTab};
pub use http::HttpClient;
pub use session::Session;

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, RegisterRequest};
pub use shared::models;
