/// Global constants used across the MegaGecko pool fetcher
///
/// This module contains system-wide constants that are not configurable
/// and are used across multiple modules.

// ============================================================================
// GECKOTERMINAL API
// ============================================================================

/// GeckoTerminal API base URL
pub const GECKO_TERMINAL_API: &str = "https://api.geckoterminal.com/api/v2";

/// Network identifier used for all pool queries
pub const NETWORK: &str = "solana";

/// Prefix GeckoTerminal prepends to entity identifiers on this network,
/// e.g. `solana_EPjFWdd5...` for a token mint
pub const NETWORK_ID_PREFIX: &str = "solana_";

/// Request timeout in seconds - GeckoTerminal can have latency spikes, 10s is safe
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Rate limit per minute - GeckoTerminal has strict limits, 30/min is safe
pub const RATE_LIMIT_PER_MINUTE: usize = 30;

// ============================================================================
// FILTER THRESHOLDS
// ============================================================================

/// Minimum pool liquidity in USD for all filtered pools
pub const MIN_LIQUIDITY_USD: f64 = 1_000.0;

/// Minimum 24h volume in USD for target token pair pools
pub const MIN_VOLUME_24H_USD: f64 = 1_000.0;

/// Minimum 24h volume in USD for USDC-only pools. Stricter than the
/// target-pair bar since these pools carry more counterparty risk.
pub const MIN_VOLUME_24H_USDC_ONLY_USD: f64 = 100_000.0;
