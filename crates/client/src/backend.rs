//! The five resource families bundled for the screens.

use std::sync::Arc;

use stockdesk_inventory::{Inventory, Item, Transaction};
use stockdesk_parties::{Employee, Supplier};

use crate::api::SharedResource;
use crate::config::{ClientConfig, ConfigError};
use crate::http::HttpResource;
use crate::memory::InMemoryResource;

#[derive(Clone)]
pub struct Backend {
    pub items: SharedResource<Item>,
    pub inventories: SharedResource<Inventory>,
    pub transactions: SharedResource<Transaction>,
    pub employees: SharedResource<Employee>,
    pub suppliers: SharedResource<Supplier>,
}

impl Backend {
    /// HTTP backend sharing one connection pool across resources.
    pub fn http(config: &ClientConfig) -> Result<Self, ConfigError> {
        let client = config.http_client()?;
        let base = config.api_url.as_str();
        tracing::info!(api_url = base, timeout_secs = config.timeout.as_secs(), "using HTTP backend");

        Ok(Self {
            items: Arc::new(HttpResource::<Item>::new(client.clone(), base)),
            inventories: Arc::new(HttpResource::<Inventory>::new(client.clone(), base)),
            transactions: Arc::new(HttpResource::<Transaction>::new(client.clone(), base)),
            employees: Arc::new(HttpResource::<Employee>::new(client.clone(), base)),
            suppliers: Arc::new(HttpResource::<Supplier>::new(client, base)),
        })
    }

    /// Empty in-memory backend.
    pub fn in_memory() -> Self {
        Self {
            items: Arc::new(InMemoryResource::<Item>::new()),
            inventories: Arc::new(InMemoryResource::<Inventory>::new()),
            transactions: Arc::new(InMemoryResource::<Transaction>::new()),
            employees: Arc::new(InMemoryResource::<Employee>::new()),
            suppliers: Arc::new(InMemoryResource::<Supplier>::new()),
        }
    }
}

impl core::fmt::Debug for Backend {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Backend").finish_non_exhaustive()
    }
}
