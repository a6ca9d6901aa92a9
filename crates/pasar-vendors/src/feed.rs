//! Source of raw vendor collections.
//!
//! [`VendorFeed`] is the seam between orchestration and transport: the
//! server and the CLI use [`HttpVendorFeed`], tests substitute in-memory
//! feeds.

use futures::future::BoxFuture;
use pasar_core::{AppConfig, Vendor, VendorEndpoints};
use serde_json::Value;

use crate::client::VendorClient;
use crate::error::FetchError;

/// Produces the raw record collection for a vendor.
pub trait VendorFeed: Send + Sync {
    fn fetch_raw(&self, vendor: Vendor) -> BoxFuture<'_, Result<Vec<Value>, FetchError>>;
}

/// Feed backed by the vendors' HTTP endpoints.
#[derive(Debug, Clone)]
pub struct HttpVendorFeed {
    client: VendorClient,
    endpoints: VendorEndpoints,
}

impl HttpVendorFeed {
    #[must_use]
    pub fn new(client: VendorClient, endpoints: VendorEndpoints) -> Self {
        Self { client, endpoints }
    }

    /// Builds the client and endpoint table from application config.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the HTTP client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        let client = VendorClient::new(
            config.fetch_timeout_secs,
            &config.fetch_user_agent,
            config.fetch_max_retries,
            config.fetch_retry_backoff_ms,
        )?;
        Ok(Self::new(client, config.endpoints.clone()))
    }
}

impl VendorFeed for HttpVendorFeed {
    fn fetch_raw(&self, vendor: Vendor) -> BoxFuture<'_, Result<Vec<Value>, FetchError>> {
        Box::pin(async move {
            let url = self
                .endpoints
                .get(vendor)
                .ok_or(FetchError::NotConfigured { vendor })?;
            self.client.fetch_collection(url).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_vendor_is_reported() {
        let client = VendorClient::new(1, "pasar-test/0.1", 0, 0).unwrap();
        let feed = HttpVendorFeed::new(client, VendorEndpoints::default());
        let err = feed.fetch_raw(Vendor::C).await.unwrap_err();
        assert!(
            matches!(err, FetchError::NotConfigured { vendor: Vendor::C }),
            "{err:?}"
        );
    }
}
