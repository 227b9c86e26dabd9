//! Shopping cart endpoints

use async_trait::async_trait;
use shared::models::{CartSummary, CheckoutRequest, Invoice};

use crate::{ClientResult, HttpClient};

/// Cart resource operations
#[async_trait]
pub trait CartApi {
    /// Fetch the cart summary for a user.
    async fn cart(&self, user_id: i64) -> ClientResult<CartSummary>;

    /// Add a product to the user's cart.
    async fn add_to_cart(&self, user_id: i64, product_id: i64) -> ClientResult<CartSummary>;

    /// Remove a product from the user's cart.
    async fn remove_from_cart(&self, user_id: i64, product_id: i64) -> ClientResult<CartSummary>;

    /// Empty the cart. Clearing an already-empty cart succeeds.
    async fn clear_cart(&self, user_id: i64) -> ClientResult<()>;

    /// Convert the cart plus a delivery address into an invoice.
    async fn checkout(&self, user_id: i64, request: &CheckoutRequest) -> ClientResult<Invoice>;
}

#[async_trait]
impl CartApi for HttpClient {
    async fn cart(&self, user_id: i64) -> ClientResult<CartSummary> {
        self.get(&format!("api/carts/user/{user_id}")).await
    }

    async fn add_to_cart(&self, user_id: i64, product_id: i64) -> ClientResult<CartSummary> {
        self.post_empty(&format!("api/carts/user/{user_id}/products/{product_id}"))
            .await
    }

    async fn remove_from_cart(&self, user_id: i64, product_id: i64) -> ClientResult<CartSummary> {
        self.delete(&format!("api/carts/user/{user_id}/products/{product_id}"))
            .await
    }

    async fn clear_cart(&self, user_id: i64) -> ClientResult<()> {
        self.delete_empty(&format!("api/carts/user/{user_id}/clear"))
            .await
    }

    async fn checkout(&self, user_id: i64, request: &CheckoutRequest) -> ClientResult<Invoice> {
        self.post(&format!("api/carts/user/{user_id}/checkout"), request)
            .await
    }
}
