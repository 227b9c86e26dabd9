//! User and invoice endpoints

use async_trait::async_trait;
use shared::models::{Invoice, User};

use crate::{ClientResult, HttpClient};

/// User and purchase-history operations
#[async_trait]
pub trait UserApi {
    /// A single user by identity.
    async fn user(&self, user_id: i64) -> ClientResult<User>;

    /// Invoices issued to one user.
    async fn user_invoices(&self, user_id: i64) -> ClientResult<Vec<Invoice>>;

    /// A single invoice by identity.
    async fn invoice(&self, invoice_id: i64) -> ClientResult<Invoice>;
}

#[async_trait]
impl UserApi for HttpClient {
    async fn user(&self, user_id: i64) -> ClientResult<User> {
        self.get(&format!("api/users/{user_id}")).await
    }

    async fn user_invoices(&self, user_id: i64) -> ClientResult<Vec<Invoice>> {
        self.get(&format!("api/users/{user_id}/invoices")).await
    }

    async fn invoice(&self, invoice_id: i64) -> ClientResult<Invoice> {
        self.get(&format!("api/invoices/{invoice_id}")).await
    }
}
