#![allow(missing_docs)]

use crate::cache::TokenCache;
use crate::client::JaniceClient;
use crate::constants::{DEFAULT_CACHE_CAPACITY, JANICE_SERVICE_NAME};
use crate::error::Result;
use crate::markets::MarketDirectory;

/// Service wrapper owning the client, the interaction token cache and the
/// market directory shared by all flows.
pub struct JaniceService {
    client: JaniceClient,
    cache: TokenCache,
    markets: MarketDirectory,
}

impl JaniceService {
    pub const SERVICE_TYPE: &'static str = JANICE_SERVICE_NAME;

    /// Start the service against the default endpoint and fetch the live
    /// market list once.
    pub async fn start(api_key: &str) -> Result<Self> {
        Self::start_with_base_url(None, api_key).await
    }

    pub async fn start_with_base_url(base_url: Option<&str>, api_key: &str) -> Result<Self> {
        let client = JaniceClient::new(base_url, api_key)?;
        let markets = MarketDirectory::new();

        match client.get_markets().await {
            Ok(list) => markets.update(list),
            // The engine stays usable without the live list; selectors are
            // simply not offered until a refresh succeeds.
            Err(e) => tracing::warn!(error = %e, "could not fetch live market list"),
        }

        Ok(Self {
            client,
            cache: TokenCache::new(DEFAULT_CACHE_CAPACITY),
            markets,
        })
    }

    /// Re-fetch the live market list.
    pub async fn refresh_markets(&self) -> Result<()> {
        let list = self.client.get_markets().await?;
        self.markets.update(list);
        Ok(())
    }

    #[must_use]
    pub fn client(&self) -> &JaniceClient {
        &self.client
    }

    #[must_use]
    pub fn cache(&self) -> &TokenCache {
        &self.cache
    }

    #[must_use]
    pub fn markets(&self) -> &MarketDirectory {
        &self.markets
    }
}
