//! Cart orchestration: cart maintenance and the checkout pipeline
//!
//! Turns a live cart into a completed purchase while keeping the cart,
//! product, address, and invoice views consistent. Every mutation is
//! followed by a full reload from the source of truth; local state is
//! never patched optimistically, so the view cannot drift from
//! server-computed totals.

use std::time::Duration;

use rust_decimal::Decimal;
use shared::models::{Address, AddressCreate, CartSummary, CheckoutRequest, Invoice, Product};
use validator::Validate;

use crate::api::{AddressApi, CartApi, ProductApi};
use crate::{ClientError, ClientResult, Session};

/// Delay before the post-checkout cart re-read, giving the backend time
/// to converge. A tolerance for eventual consistency, not a
/// synchronization guarantee.
const CHECKOUT_RELOAD_DELAY: Duration = Duration::from_secs(1);

/// Delivery address choice for checkout.
#[derive(Debug, Clone)]
pub enum AddressSelection {
    /// A saved address, selected by identity.
    Existing(i64),
    /// A new address, created in the same transaction.
    New(AddressCreate),
}

/// Checkout dialog state, captured when the dialog opens.
#[derive(Debug, Clone)]
pub struct CheckoutState {
    /// The user's saved addresses at the time the dialog opened.
    pub addresses: Vec<Address>,
    /// No saved addresses exist, so the new-address path is the only one.
    pub needs_new_address: bool,
}

/// Orchestrates the cart-to-invoice pipeline against a resource client.
pub struct CartOrchestrator<C> {
    client: C,
    reload_delay: Duration,
    summary: Option<CartSummary>,
    products: Vec<Product>,
    checkout: Option<CheckoutState>,
}

impl<C> CartOrchestrator<C>
where
    C: CartApi + ProductApi + AddressApi,
{
    pub fn new(client: C) -> Self {
        Self {
            client,
            reload_delay: CHECKOUT_RELOAD_DELAY,
            summary: None,
            products: Vec::new(),
            checkout: None,
        }
    }

    /// Override the post-checkout reload delay. Tests pass zero.
    pub fn with_reload_delay(mut self, delay: Duration) -> Self {
        self.reload_delay = delay;
        self
    }

    /// The last loaded product snapshot.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The last loaded cart summary.
    pub fn summary(&self) -> Option<&CartSummary> {
        self.summary.as_ref()
    }

    /// Open checkout dialog state, if any.
    pub fn checkout_state(&self) -> Option<&CheckoutState> {
        self.checkout.as_ref()
    }

    /// Sum of the snapshot prices. Display aid only; the server total in
    /// the summary stays authoritative.
    pub fn total(&self) -> Decimal {
        self.products.iter().map(|product| product.price).sum()
    }

    /// Fetch the cart summary and resolve each identity to a full
    /// product snapshot.
    ///
    /// Identities that are non-numeric, fail to resolve, or resolve to a
    /// record without its own identity are dropped instead of failing
    /// the whole load, so one bad reference does not blank the cart
    /// view.
    pub async fn load_cart(&mut self, session: &Session) -> ClientResult<&[Product]> {
        let user_id = session.require_user_id()?;
        let summary = self.client.cart(user_id).await?;

        let mut products = Vec::with_capacity(summary.product_ids.len());
        for product_id in summary.valid_product_ids() {
            match self.client.product(product_id).await {
                Ok(product) if product.product_id.is_some() => products.push(product),
                Ok(_) => {
                    tracing::warn!(product_id, "dropping cart product with no identity");
                }
                Err(err) => {
                    tracing::warn!(product_id, error = %err, "dropping unresolvable cart product");
                }
            }
        }

        self.summary = Some(summary);
        self.products = products;
        Ok(&self.products)
    }

    /// Add the product if absent from the last loaded cart, remove it if
    /// present, then reload from the source of truth.
    pub async fn toggle_cart_membership(
        &mut self,
        session: &Session,
        product_id: i64,
    ) -> ClientResult<&[Product]> {
        let user_id = session.require_user_id()?;
        let in_cart = self
            .summary
            .as_ref()
            .is_some_and(|summary| summary.contains(product_id));

        if in_cart {
            self.client.remove_from_cart(user_id, product_id).await?;
            tracing::debug!(user_id, product_id, "product removed from cart");
        } else {
            self.client.add_to_cart(user_id, product_id).await?;
            tracing::debug!(user_id, product_id, "product added to cart");
        }

        self.load_cart(session).await
    }

    /// Empty the cart. Clearing an already-empty cart succeeds.
    pub async fn clear_cart(&mut self, session: &Session) -> ClientResult<()> {
        let user_id = session.require_user_id()?;
        self.client.clear_cart(user_id).await?;
        tracing::debug!(user_id, "cart cleared");
        self.load_cart(session).await?;
        Ok(())
    }

    /// Validate the current view and load saved addresses for checkout.
    ///
    /// Refused before any network call when the cart contents are
    /// malformed. When the user has no saved addresses, the new-address
    /// path is forced.
    pub async fn open_checkout(&mut self, session: &Session) -> ClientResult<&CheckoutState> {
        let user_id = session.require_user_id()?;
        self.ensure_cart_integrity(user_id)?;

        let addresses = self.client.user_addresses(user_id).await?;
        let needs_new_address = addresses.is_empty();
        let state = self.checkout.insert(CheckoutState {
            addresses,
            needs_new_address,
        });
        Ok(state)
    }

    /// Convert the current cart into an invoice delivered to the
    /// selected address.
    ///
    /// A new address is persisted before the checkout submission; the
    /// two phases are sequential and non-atomic, so an address created
    /// for a submission that then fails is left in place. On any
    /// failure the checkout state stays open for retry.
    pub async fn checkout(
        &mut self,
        session: &Session,
        selection: AddressSelection,
    ) -> ClientResult<Invoice> {
        let user_id = session.require_user_id()?;
        // Re-validate: the cart may have drifted since the dialog opened.
        self.ensure_cart_integrity(user_id)?;

        let address_id = match selection {
            AddressSelection::Existing(address_id) => address_id,
            AddressSelection::New(fields) => {
                fields
                    .validate()
                    .map_err(|err| ClientError::Validation(err.to_string()))?;
                let created = self.client.create_address(user_id, &fields).await?;
                created.address_id.ok_or_else(|| {
                    ClientError::ContractViolation(
                        "created address has no numeric identity".to_string(),
                    )
                })?
            }
        };

        let invoice = self
            .client
            .checkout(user_id, &CheckoutRequest { address_id })
            .await?;
        tracing::debug!(user_id, address_id, total = %invoice.total_amount, "checkout completed");

        // The purchase already succeeded; a failed clear must not
        // surface as a checkout failure.
        if let Err(err) = self.client.clear_cart(user_id).await {
            tracing::warn!(user_id, error = %err, "post-checkout cart clear failed");
        }
        self.checkout = None;

        if !self.reload_delay.is_zero() {
            tokio::time::sleep(self.reload_delay).await;
        }
        if let Err(err) = self.load_cart(session).await {
            tracing::warn!(user_id, error = %err, "post-checkout cart reload failed");
        }

        Ok(invoice)
    }

    /// Checkout pre-flight: the cart must be non-empty, reference only
    /// numeric product identities, carry a fully identified product
    /// snapshot, and hold no product the user already owns.
    fn ensure_cart_integrity(&self, user_id: i64) -> ClientResult<()> {
        let Some(summary) = self.summary.as_ref() else {
            return Err(ClientError::Validation("cart has not been loaded".to_string()));
        };
        if summary.has_malformed_entries() {
            return Err(ClientError::DataIntegrity(
                "cart references products without a valid identity".to_string(),
            ));
        }
        if self
            .products
            .iter()
            .any(|product| product.product_id.is_none())
        {
            return Err(ClientError::DataIntegrity(
                "cart view holds a product without a valid identity".to_string(),
            ));
        }
        if self
            .products
            .iter()
            .any(|product| product.user_id == Some(user_id))
        {
            return Err(ClientError::DataIntegrity(
                "cart holds a product already owned by its user".to_string(),
            ));
        }
        if summary.is_empty() {
            return Err(ClientError::Validation("cart is empty".to_string()));
        }
        Ok(())
    }
}
