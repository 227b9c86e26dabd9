//! Address endpoints

use async_trait::async_trait;
use shared::models::{Address, AddressCreate};

use crate::{ClientResult, HttpClient};

/// Address resource operations
#[async_trait]
pub trait AddressApi {
    /// Every address in the system.
    async fn addresses(&self) -> ClientResult<Vec<Address>>;

    /// A single address by identity.
    async fn address(&self, address_id: i64) -> ClientResult<Address>;

    /// Addresses saved by one user.
    async fn user_addresses(&self, user_id: i64) -> ClientResult<Vec<Address>>;

    /// Persist a new address for a user. The backend guarantees the
    /// returned record carries a numeric identity.
    async fn create_address(&self, user_id: i64, address: &AddressCreate)
    -> ClientResult<Address>;

    async fn update_address(&self, address_id: i64, address: &AddressCreate)
    -> ClientResult<Address>;

    async fn delete_address(&self, address_id: i64) -> ClientResult<()>;
}

#[async_trait]
impl AddressApi for HttpClient {
    async fn addresses(&self) -> ClientResult<Vec<Address>> {
        self.get("api/addresses").await
    }

    async fn address(&self, address_id: i64) -> ClientResult<Address> {
        self.get(&format!("api/addresses/{address_id}")).await
    }

    async fn user_addresses(&self, user_id: i64) -> ClientResult<Vec<Address>> {
        self.get(&format!("api/users/{user_id}/addresses")).await
    }

    async fn create_address(
        &self,
        user_id: i64,
        address: &AddressCreate,
    ) -> ClientResult<Address> {
        self.post(&format!("api/addresses/user/{user_id}"), address)
            .await
    }

    async fn update_address(
        &self,
        address_id: i64,
        address: &AddressCreate,
    ) -> ClientResult<Address> {
        self.put(&format!("api/addresses/{address_id}"), address)
            .await
    }

    async fn delete_address(&self, address_id: i64) -> ClientResult<()> {
        self.delete_empty(&format!("api/addresses/{address_id}")).await
    }
}
