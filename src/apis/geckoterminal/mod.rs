/// GeckoTerminal API client
///
/// API Documentation: https://www.geckoterminal.com/dex-api
///
/// Endpoints implemented:
/// 1. /networks/{network}/tokens/{token}/pools - Get all pools for a token
///    (with base_token, quote_token and dex entities requested inline)
pub mod types;

// Re-export types for external use
pub use self::types::{
    DexInfo, Pool, PoolsResponse, PriceChangePercentage, TokenInfo, TransactionWindow,
    Transactions, VolumeUsd,
};

use crate::constants::{GECKO_TERMINAL_API, NETWORK, REQUEST_TIMEOUT_SECS};
use crate::logger;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// GeckoTerminal API client
pub struct GeckoTerminalClient {
    client: Client,
    timeout: Duration,
}

impl GeckoTerminalClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }

    async fn get_json<T>(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<T, String>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", GECKO_TERMINAL_API, endpoint);

        let response = self
            .client
            .get(&url)
            .query(query)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(format!("GeckoTerminal API error {}: {}", status, body));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    /// Fetches all pools containing the given token, with related entities
    /// requested inline, and resolves them into fully-populated [`Pool`]s.
    ///
    /// Fails soft: any network, HTTP or parse failure is logged and yields
    /// an empty list so the fetch loop can continue with the next token.
    pub async fn fetch_pools_for_token(&self, mint: &str) -> Vec<Pool> {
        let endpoint = format!("networks/{}/tokens/{}/pools", NETWORK, mint);

        logger::debug(&format!(
            "[GECKOTERMINAL] Fetching pools: token={}, network={}",
            mint, NETWORK
        ));

        match self
            .get_json::<PoolsResponse>(&endpoint, &[("include", "base_token,quote_token,dex")])
            .await
        {
            Ok(response) => response.into_pools(),
            Err(err) => {
                logger::error(&format!(
                    "Failed to fetch pools for token {}: {}",
                    mint, err
                ));
                Vec::new()
            }
        }
    }
}

impl Default for GeckoTerminalClient {
    fn default() -> Self {
        Self::new()
    }
}
