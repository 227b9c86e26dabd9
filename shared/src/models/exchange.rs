//! Exchange Model
//!
//! A proposed barter of one product for another between two users. The
//! party identities historically appear under two field names
//! (`ownerId`/`owner` and `requesterId`/`requester`); both shapes are
//! accepted on ingestion and normalized into the canonical fields here,
//! so no consumer ever re-checks the aliases.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Product;

/// Lifecycle status of an exchange proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExchangeStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
}

impl ExchangeStatus {
    /// Terminal states admit no further client-issued transition.
    /// ACCEPTED is intermediate: external settlement advances it to
    /// COMPLETED, which this client only observes.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Completed)
    }
}

/// Exchange entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exchange {
    pub exchange_id: i64,
    /// Holder of the desired product.
    #[serde(alias = "owner")]
    pub owner_id: i64,
    /// Proposer, offering their own product.
    #[serde(alias = "requester")]
    pub requester_id: i64,
    pub owner_product_id: Option<i64>,
    pub requester_product_id: Option<i64>,
    /// Both products involved, when the backend embeds them.
    #[serde(default)]
    pub products: Vec<Product>,
    pub status: ExchangeStatus,
    /// Proposal timestamp.
    pub exchange_date: Option<DateTime<Utc>>,
    pub completion_date: Option<DateTime<Utc>>,
}

impl Exchange {
    /// Whether the given user is one of the two counter-parties.
    pub fn touches_user(&self, user_id: i64) -> bool {
        self.owner_id == user_id || self.requester_id == user_id
    }

    /// Ingest a raw exchange listing.
    ///
    /// A non-array payload yields an empty working set, and individual
    /// records that do not deserialize (missing status, wrong field
    /// shapes) are dropped, never surfaced as a hard failure.
    pub fn from_value_lenient(value: Value) -> Vec<Exchange> {
        let Value::Array(items) = value else {
            tracing::warn!("exchange listing is not an array, ignoring payload");
            return Vec::new();
        };
        items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<Exchange>(item) {
                Ok(exchange) => Some(exchange),
                Err(err) => {
                    tracing::warn!(error = %err, "dropping malformed exchange record");
                    None
                }
            })
            .collect()
    }
}

/// Propose-exchange payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeProposal {
    /// Holder of the desired product.
    pub owner_id: i64,
    /// Proposer, offering `requester_product_id` in return.
    pub requester_id: i64,
    pub owner_product_id: i64,
    pub requester_product_id: i64,
}

impl ExchangeProposal {
    /// An exchange always references two distinct users and two distinct
    /// products.
    pub fn involves_distinct_parties(&self) -> bool {
        self.owner_id != self.requester_id
            && self.owner_product_id != self.requester_product_id
    }
}
