//! Saved-address maintenance
//!
//! Keeps the user's saved addresses consistent with the backend. Follows
//! the same policy as the cart: every mutation is followed by a full
//! authoritative reload.

use shared::models::{Address, AddressCreate};
use validator::Validate;

use crate::api::AddressApi;
use crate::{ClientError, ClientResult, Session};

/// Orchestrates saved-address maintenance against a resource client.
pub struct AddressBook<C> {
    client: C,
    addresses: Vec<Address>,
}

impl<C: AddressApi> AddressBook<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            addresses: Vec::new(),
        }
    }

    /// The last loaded snapshot.
    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    /// Fetch the user's saved addresses.
    pub async fn load(&mut self, session: &Session) -> ClientResult<&[Address]> {
        let user_id = session.require_user_id()?;
        self.addresses = self.client.user_addresses(user_id).await?;
        Ok(&self.addresses)
    }

    /// Create a new address, or update the one identified by
    /// `address_id`. All five fields must be non-empty before the
    /// request is issued.
    pub async fn save(
        &mut self,
        session: &Session,
        address_id: Option<i64>,
        fields: AddressCreate,
    ) -> ClientResult<&[Address]> {
        let user_id = session.require_user_id()?;
        fields
            .validate()
            .map_err(|err| ClientError::Validation(err.to_string()))?;

        match address_id {
            Some(address_id) => {
                self.client.update_address(address_id, &fields).await?;
                tracing::debug!(user_id, address_id, "address updated");
            }
            None => {
                self.client.create_address(user_id, &fields).await?;
                tracing::debug!(user_id, "address created");
            }
        }

        self.load(session).await
    }

    /// Delete a saved address.
    ///
    /// Once a user has an address, at least one must remain; deleting
    /// the last one is refused before any request is issued.
    pub async fn delete(&mut self, session: &Session, address_id: i64) -> ClientResult<&[Address]> {
        let user_id = session.require_user_id()?;
        if self.addresses.len() <= 1 {
            return Err(ClientError::Validation(
                "the last remaining address cannot be deleted".to_string(),
            ));
        }

        self.client.delete_address(address_id).await?;
        tracing::debug!(user_id, address_id, "address deleted");
        self.load(session).await
    }
}
