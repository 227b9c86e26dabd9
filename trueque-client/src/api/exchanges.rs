//! Exchange endpoints

use async_trait::async_trait;
use serde_json::Value;
use shared::models::{Exchange, ExchangeProposal};

use crate::{ClientResult, HttpClient};

/// Exchange resource operations
#[async_trait]
pub trait ExchangeApi {
    /// Every exchange touching the user, as either party. Malformed
    /// records are dropped from the result, never surfaced as an error.
    async fn user_exchanges(&self, user_id: i64) -> ClientResult<Vec<Exchange>>;

    /// Create a PENDING exchange between two owners.
    async fn propose_exchange(&self, proposal: &ExchangeProposal) -> ClientResult<Exchange>;

    /// Owner accepts the proposal.
    async fn accept_exchange(&self, exchange_id: i64) -> ClientResult<Exchange>;

    /// Owner rejects the proposal.
    async fn reject_exchange(&self, exchange_id: i64) -> ClientResult<Exchange>;

    /// Requester withdraws the proposal. Implemented by the backend as
    /// deletion; no history is retained.
    async fn cancel_exchange(&self, exchange_id: i64) -> ClientResult<()>;
}

#[async_trait]
impl ExchangeApi for HttpClient {
    async fn user_exchanges(&self, user_id: i64) -> ClientResult<Vec<Exchange>> {
        let raw: Value = self.get(&format!("api/exchanges/user/{user_id}")).await?;
        Ok(Exchange::from_value_lenient(raw))
    }

    async fn propose_exchange(&self, proposal: &ExchangeProposal) -> ClientResult<Exchange> {
        self.post("api/exchanges", proposal).await
    }

    async fn accept_exchange(&self, exchange_id: i64) -> ClientResult<Exchange> {
        self.put_empty(&format!("api/exchanges/{exchange_id}/accept"))
            .await
    }

    async fn reject_exchange(&self, exchange_id: i64) -> ClientResult<Exchange> {
        self.put_empty(&format!("api/exchanges/{exchange_id}/reject"))
            .await
    }

    async fn cancel_exchange(&self, exchange_id: i64) -> ClientResult<()> {
        self.delete_empty(&format!("api/exchanges/{exchange_id}")).await
    }
}
