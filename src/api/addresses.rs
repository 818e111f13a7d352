//! Address Service interface

use crate::core::error::Error;
use crate::models::Address;
use crate::Result;
use async_trait::async_trait;

/// Interface to the remote Address Service
#[async_trait]
pub trait AddressService: Send + Sync {
    /// Lists the caller's saved addresses
    async fn list_addresses(&self) -> Result<Vec<Address>>;

    /// Saves a new address and returns it with its assigned id
    async fn add_address(&self, address: &Address) -> Result<Address>;

    /// Marks the address with the given id as the default
    async fn set_default(&self, address_id: &str) -> Result<()>;

    /// Deletes the address with the given id
    async fn delete_address(&self, address_id: &str) -> Result<()>;
}

/// Thin client over the Address Service
pub struct AddressClient {
    /// The remote service implementation
    service: Box<dyn AddressService>,
}

impl AddressClient {
    /// Creates a new AddressClient over a service implementation
    pub fn new(service: Box<dyn AddressService>) -> Self {
        Self { service }
    }

    /// Lists the caller's saved addresses
    pub async fn list(&self) -> Result<Vec<Address>> {
        self.service.list_addresses().await.map_err(Self::interpret)
    }

    /// Saves a new address
    pub async fn add(&self, address: &Address) -> Result<Address> {
        self.service.add_address(address).await.map_err(Self::interpret)
    }

    /// Marks an address as the default
    pub async fn set_default(&self, address_id: &str) -> Result<()> {
        self.service
            .set_default(address_id)
            .await
            .map_err(Self::interpret)
    }

    /// Deletes an address
    pub async fn delete(&self, address_id: &str) -> Result<()> {
        self.service
            .delete_address(address_id)
            .await
            .map_err(Self::interpret)
    }

    /// The default address, or the first saved one when no default is set
    ///
    /// Returns `None` when the user has no saved addresses; checkout cannot
    /// proceed past address selection until one is added.
    pub async fn default_or_first(&self) -> Result<Option<Address>> {
        let addresses = self.list().await?;

        Ok(addresses
            .iter()
            .find(|a| a.is_default)
            .cloned()
            .or_else(|| addresses.into_iter().next()))
    }

    /// Maps service failures onto the crate error taxonomy
    fn interpret(err: Error) -> Error {
        match err {
            Error::Network(_) | Error::Validation(_) => err,
            other => Error::Network(other.to_string()),
        }
    }
}
