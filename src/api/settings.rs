//! Settings Service interface

use crate::core::error::Error;
use crate::models::StoreSettings;
use crate::Result;
use async_trait::async_trait;

/// Interface to the remote Settings Service
#[async_trait]
pub trait SettingsService: Send + Sync {
    /// Fetches the current store settings
    async fn get_settings(&self) -> Result<StoreSettings>;
}

/// Client that fetches and caches store settings
///
/// Pricing degrades gracefully while settings are unavailable, so a failed
/// refresh keeps whatever was cached last instead of erasing it.
pub struct SettingsClient {
    /// The remote service implementation
    service: Box<dyn SettingsService>,
    /// Most recently fetched settings
    cached: Option<StoreSettings>,
}

impl SettingsClient {
    /// Creates a new SettingsClient over a service implementation
    pub fn new(service: Box<dyn SettingsService>) -> Self {
        Self {
            service,
            cached: None,
        }
    }

    /// Fetches fresh settings from the service and caches them
    pub async fn refresh(&mut self) -> Result<&StoreSettings> {
        match self.service.get_settings().await {
            Ok(settings) => {
                log::debug!(
                    "Settings refreshed: delivery {}, tax {}%",
                    settings.delivery_charge,
                    settings.tax_rate
                );
                Ok(&*self.cached.insert(settings))
            }
            Err(err) => {
                log::warn!("Settings refresh failed: {}", err);
                Err(match err {
                    Error::Network(_) => err,
                    other => Error::Network(other.to_string()),
                })
            }
        }
    }

    /// The most recently fetched settings, if any
    pub fn current(&self) -> Option<&StoreSettings> {
        self.cached.as_ref()
    }
}
