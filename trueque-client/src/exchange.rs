//! Exchange orchestration: the bilateral barter workflow
//!
//! Manages the lifecycle of barter proposals and enforces who may act
//! on them:
//!
//! ```text
//!         propose
//!  (none) --------> PENDING
//!                     | accept (owner only)     -> ACCEPTED -> COMPLETED (observed)
//!                     | reject (owner only)     -> REJECTED
//!                     | cancel (requester only) -> removed
//! ```
//!
//! Transitions are invoked on the backend and the working set is
//! re-fetched afterwards; no local status mutation is trusted.

use shared::models::{Exchange, ExchangeProposal, ExchangeStatus, Product};

use crate::api::ExchangeApi;
use crate::{ClientError, ClientResult, Session};

/// Role of the session user within one exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeRole {
    /// Holder of the desired product.
    Owner,
    /// Proposer of the barter.
    Requester,
    /// The session user is not a party to the exchange.
    Unknown,
}

/// Status filter tabs for the exchange listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeTab {
    All,
    Pending,
    /// Accepted and completed exchanges share a tab.
    Accepted,
    Rejected,
}

impl ExchangeTab {
    pub fn matches(self, status: ExchangeStatus) -> bool {
        match self {
            Self::All => true,
            Self::Pending => status == ExchangeStatus::Pending,
            Self::Accepted => {
                matches!(status, ExchangeStatus::Accepted | ExchangeStatus::Completed)
            }
            Self::Rejected => status == ExchangeStatus::Rejected,
        }
    }
}

/// Actions the session user may take on one exchange.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExchangeActions {
    pub can_accept: bool,
    pub can_reject: bool,
    pub can_cancel: bool,
}

/// Product split for display: what the session user receives vs gives.
#[derive(Debug, Default)]
pub struct ExchangeSides<'a> {
    pub receiving: Vec<&'a Product>,
    pub giving: Vec<&'a Product>,
}

/// Role of the session user, from the canonical (post-alias) party ids.
pub fn role_for(exchange: &Exchange, session: &Session) -> ExchangeRole {
    match session.current_user_id() {
        Some(user_id) if user_id == exchange.owner_id => ExchangeRole::Owner,
        Some(user_id) if user_id == exchange.requester_id => ExchangeRole::Requester,
        _ => ExchangeRole::Unknown,
    }
}

/// Which transitions the session user may issue. Only the owner of a
/// PENDING exchange may accept or reject; only the requester of a
/// PENDING exchange may cancel; every other combination is read-only.
pub fn available_actions(exchange: &Exchange, session: &Session) -> ExchangeActions {
    if exchange.status != ExchangeStatus::Pending {
        return ExchangeActions::default();
    }
    match role_for(exchange, session) {
        ExchangeRole::Owner => ExchangeActions {
            can_accept: true,
            can_reject: true,
            can_cancel: false,
        },
        ExchangeRole::Requester => ExchangeActions {
            can_cancel: true,
            ..ExchangeActions::default()
        },
        ExchangeRole::Unknown => ExchangeActions::default(),
    }
}

/// Split the exchange's products into "what I receive" vs "what I give"
/// by comparing each product's owning user against the role-appropriate
/// counter-party. A product with no resolvable owner is excluded from
/// both sides rather than guessed into one.
pub fn product_sides<'a>(exchange: &'a Exchange, session: &Session) -> ExchangeSides<'a> {
    let (receive_from, give_from) = match role_for(exchange, session) {
        ExchangeRole::Owner => (exchange.requester_id, exchange.owner_id),
        ExchangeRole::Requester => (exchange.owner_id, exchange.requester_id),
        ExchangeRole::Unknown => return ExchangeSides::default(),
    };

    let mut sides = ExchangeSides::default();
    for product in &exchange.products {
        match product.user_id {
            Some(owner) if owner == receive_from => sides.receiving.push(product),
            Some(owner) if owner == give_from => sides.giving.push(product),
            _ => {}
        }
    }
    sides
}

/// Orchestrates the barter workflow against a resource client.
pub struct ExchangeOrchestrator<C> {
    client: C,
    exchanges: Vec<Exchange>,
}

impl<C: ExchangeApi> ExchangeOrchestrator<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            exchanges: Vec::new(),
        }
    }

    /// The current working set.
    pub fn exchanges(&self) -> &[Exchange] {
        &self.exchanges
    }

    /// Fetch every exchange touching the session user, as either party.
    pub async fn load_exchanges(&mut self, session: &Session) -> ClientResult<&[Exchange]> {
        let user_id = session.require_user_id()?;
        self.exchanges = self.client.user_exchanges(user_id).await?;
        Ok(&self.exchanges)
    }

    /// Pure view-level status partition; no server round-trip per tab.
    pub fn filtered(&self, tab: ExchangeTab) -> Vec<&Exchange> {
        self.exchanges
            .iter()
            .filter(|exchange| tab.matches(exchange.status))
            .collect()
    }

    /// Propose a barter of `requester_product_id` for
    /// `owner_product_id`, then refresh the working set.
    pub async fn propose_exchange(
        &mut self,
        session: &Session,
        proposal: ExchangeProposal,
    ) -> ClientResult<Exchange> {
        session.require_user_id()?;
        if !proposal.involves_distinct_parties() {
            return Err(ClientError::Validation(
                "an exchange needs two distinct users and two distinct products".to_string(),
            ));
        }

        let exchange = self.client.propose_exchange(&proposal).await?;
        tracing::debug!(exchange_id = exchange.exchange_id, "exchange proposed");
        self.load_exchanges(session).await?;
        Ok(exchange)
    }

    /// Accept a pending proposal. Owner only.
    pub async fn accept_exchange(&mut self, session: &Session, exchange_id: i64) -> ClientResult<()> {
        self.authorize(session, exchange_id, |actions| actions.can_accept)?;
        self.client.accept_exchange(exchange_id).await?;
        tracing::debug!(exchange_id, "exchange accepted");
        self.load_exchanges(session).await?;
        Ok(())
    }

    /// Reject a pending proposal. Owner only.
    pub async fn reject_exchange(&mut self, session: &Session, exchange_id: i64) -> ClientResult<()> {
        self.authorize(session, exchange_id, |actions| actions.can_reject)?;
        self.client.reject_exchange(exchange_id).await?;
        tracing::debug!(exchange_id, "exchange rejected");
        self.load_exchanges(session).await?;
        Ok(())
    }

    /// Withdraw a pending proposal. Requester only; the record is
    /// removed rather than transitioned.
    pub async fn cancel_exchange(&mut self, session: &Session, exchange_id: i64) -> ClientResult<()> {
        self.authorize(session, exchange_id, |actions| actions.can_cancel)?;
        self.client.cancel_exchange(exchange_id).await?;
        tracing::debug!(exchange_id, "exchange cancelled");
        self.load_exchanges(session).await?;
        Ok(())
    }

    /// Gate a transition on the session user's role and the exchange's
    /// status, against the working set.
    fn authorize(
        &self,
        session: &Session,
        exchange_id: i64,
        permitted: impl Fn(&ExchangeActions) -> bool,
    ) -> ClientResult<()> {
        session.require_user_id()?;
        let exchange = self
            .exchanges
            .iter()
            .find(|exchange| exchange.exchange_id == exchange_id)
            .ok_or_else(|| {
                ClientError::AuthorizationDenied(format!(
                    "exchange {exchange_id} is not in the current listing"
                ))
            })?;

        let actions = available_actions(exchange, session);
        if !permitted(&actions) {
            return Err(ClientError::AuthorizationDenied(format!(
                "action not available for exchange {exchange_id}"
            )));
        }
        Ok(())
    }
}
