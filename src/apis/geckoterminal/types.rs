/// GeckoTerminal wire types and the domain `Pool` they resolve into
///
/// The API speaks JSON:API: pool records reference their base token, quote
/// token and DEX by relationship id, and the referenced entities ride along
/// in a shared `included` side-list. Everything is parsed once into the
/// explicit optional-field structs below; downstream code only ever sees
/// the fully-resolved [`Pool`].
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::constants::NETWORK_ID_PREFIX;

// ============================================================================
// WIRE TYPES (JSON:API response shape)
// ============================================================================

/// Top-level response for `/networks/{network}/tokens/{token}/pools`
#[derive(Debug, Deserialize)]
pub struct PoolsResponse {
    #[serde(default)]
    pub data: Vec<RawPool>,
    #[serde(default)]
    pub included: Vec<IncludedItem>,
}

/// One pool record as returned by the API, relationships unresolved
#[derive(Debug, Deserialize)]
pub struct RawPool {
    #[serde(default)]
    pub attributes: RawPoolAttributes,
    #[serde(default)]
    pub relationships: Option<Relationships>,
}

/// Pool attributes. Everything is optional at the boundary; defaults are
/// applied during resolution.
#[derive(Debug, Default, Deserialize)]
pub struct RawPoolAttributes {
    pub address: Option<String>,
    pub name: Option<String>,
    pub pool_created_at: Option<String>,
    pub reserve_in_usd: Option<String>,
    pub volume_usd: Option<VolumeUsd>,
    pub price_change_percentage: Option<PriceChangePercentage>,
    pub transactions: Option<Transactions>,
    pub base_token_price_usd: Option<String>,
    pub base_token_price_native_currency: Option<String>,
    pub quote_token_price_usd: Option<String>,
    pub base_token_price_quote_token: Option<String>,
    pub quote_token_price_base_token: Option<String>,
    pub fdv_usd: Option<String>,
    pub market_cap_usd: Option<String>,
    pub locked_liquidity_percentage: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Relationships {
    pub base_token: Option<RelationshipEntry>,
    pub quote_token: Option<RelationshipEntry>,
    pub dex: Option<RelationshipEntry>,
}

#[derive(Debug, Deserialize)]
pub struct RelationshipEntry {
    pub data: Option<RelationshipData>,
}

#[derive(Debug, Deserialize)]
pub struct RelationshipData {
    pub id: String,
}

/// Entry in the `included` side-list. Tokens and DEXes share the list and
/// are told apart by `type`; the attribute payload may be entirely absent.
#[derive(Debug, Deserialize)]
pub struct IncludedItem {
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(default)]
    pub attributes: IncludedAttributes,
}

/// Union of token and DEX attributes, all optional
#[derive(Debug, Default, Clone, Deserialize)]
pub struct IncludedAttributes {
    pub address: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub decimals: Option<u8>,
}

// ============================================================================
// SHARED METADATA TYPES (wire and domain)
// ============================================================================

/// Volume in USD broken out by time window
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeUsd {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m5: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m15: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m30: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h6: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h24: Option<String>,
}

/// Price change percentage per time window
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceChangePercentage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m5: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m15: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m30: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h6: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h24: Option<String>,
}

/// Buy/sell counts for one time window
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionWindow {
    #[serde(default)]
    pub buys: u64,
    #[serde(default)]
    pub sells: u64,
    #[serde(default)]
    pub buyers: u64,
    #[serde(default)]
    pub sellers: u64,
}

/// Transaction counts per time window
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transactions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m5: Option<TransactionWindow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m15: Option<TransactionWindow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m30: Option<TransactionWindow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h1: Option<TransactionWindow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h6: Option<TransactionWindow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h24: Option<TransactionWindow>,
}

// ============================================================================
// DOMAIN TYPES (fully resolved)
// ============================================================================

/// A pool-side token, resolved from the `included` list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenInfo {
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// The DEX hosting a pool
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DexInfo {
    pub id: String,
    pub name: String,
}

/// A fully-resolved liquidity pool
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pool {
    pub address: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_created_at: Option<String>,
    pub base_token: TokenInfo,
    pub quote_token: TokenInfo,
    pub dex: DexInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserve_in_usd: Option<String>,
    pub volume_usd: VolumeUsd,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_change_percentage: Option<PriceChangePercentage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Transactions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_token_price_usd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_token_price_native_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_token_price_usd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_token_price_quote_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_token_price_base_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fdv_usd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap_usd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked_liquidity_percentage: Option<String>,
}

impl Pool {
    /// Reserve value in USD; missing or unparsable values count as zero
    pub fn liquidity_usd(&self) -> f64 {
        parse_decimal(self.reserve_in_usd.as_deref())
    }

    /// 24h volume in USD; missing or unparsable values count as zero
    pub fn volume_h24_usd(&self) -> f64 {
        parse_decimal(self.volume_usd.h24.as_deref())
    }

    /// 1h volume in USD; missing or unparsable values count as zero
    pub fn volume_h1_usd(&self) -> f64 {
        parse_decimal(self.volume_usd.h1.as_deref())
    }
}

/// Parses a decimal string field, treating missing/unparsable input as zero
pub fn parse_decimal(value: Option<&str>) -> f64 {
    value.and_then(|v| v.parse::<f64>().ok()).unwrap_or(0.0)
}

// ============================================================================
// ENTITY RESOLUTION
// ============================================================================

/// Extracts a bare address from a relationship identifier, stripping exactly
/// one network-qualifying prefix (`solana_`) if present
pub fn extract_address(id: &str) -> &str {
    id.strip_prefix(NETWORK_ID_PREFIX).unwrap_or(id)
}

impl PoolsResponse {
    /// Resolves the normalized response into fully-populated pools.
    ///
    /// Builds one lookup map per entity type from the `included` side-list,
    /// then resolves every pool's relationships through them. Pools whose
    /// base or quote token cannot be resolved to an address are dropped.
    pub fn into_pools(self) -> Vec<Pool> {
        let mut token_map: HashMap<String, IncludedAttributes> = HashMap::new();
        let mut dex_map: HashMap<String, IncludedAttributes> = HashMap::new();

        for item in self.included {
            match item.item_type.as_str() {
                "token" => {
                    token_map.insert(item.id, item.attributes);
                }
                "dex" => {
                    dex_map.insert(item.id, item.attributes);
                }
                _ => {}
            }
        }

        self.data
            .into_iter()
            .filter_map(|raw| raw.resolve(&token_map, &dex_map))
            .collect()
    }
}

impl RawPool {
    fn resolve(
        self,
        token_map: &HashMap<String, IncludedAttributes>,
        dex_map: &HashMap<String, IncludedAttributes>,
    ) -> Option<Pool> {
        let relationships = self.relationships.unwrap_or_default();

        let base_token = resolve_token(relationship_id(&relationships.base_token)?, token_map)?;
        let quote_token = resolve_token(relationship_id(&relationships.quote_token)?, token_map)?;
        let dex = resolve_dex(relationship_id(&relationships.dex), dex_map);

        let attributes = self.attributes;
        // A pool without an address cannot be keyed into the aggregate set
        let address = attributes.address?;

        Some(Pool {
            name: attributes.name.unwrap_or_else(|| {
                format!("{} / {}", base_token.symbol, quote_token.symbol)
            }),
            address,
            pool_created_at: attributes.pool_created_at,
            base_token,
            quote_token,
            dex,
            reserve_in_usd: attributes.reserve_in_usd,
            volume_usd: attributes.volume_usd.unwrap_or_default(),
            price_change_percentage: attributes.price_change_percentage,
            transactions: attributes.transactions,
            base_token_price_usd: attributes.base_token_price_usd,
            base_token_price_native_currency: attributes.base_token_price_native_currency,
            quote_token_price_usd: attributes.quote_token_price_usd,
            base_token_price_quote_token: attributes.base_token_price_quote_token,
            quote_token_price_base_token: attributes.quote_token_price_base_token,
            fdv_usd: attributes.fdv_usd,
            market_cap_usd: attributes.market_cap_usd,
            locked_liquidity_percentage: attributes.locked_liquidity_percentage,
        })
    }
}

fn relationship_id(entry: &Option<RelationshipEntry>) -> Option<&str> {
    entry
        .as_ref()
        .and_then(|e| e.data.as_ref())
        .map(|d| d.id.as_str())
}

/// Resolves a token relationship id into full token info, falling back to
/// the address embedded in the identifier when attributes are absent
fn resolve_token(id: &str, token_map: &HashMap<String, IncludedAttributes>) -> Option<TokenInfo> {
    let attributes = token_map.get(id).cloned().unwrap_or_default();

    let address = attributes
        .address
        .filter(|a| !a.is_empty())
        .unwrap_or_else(|| extract_address(id).to_string());
    if address.is_empty() {
        return None;
    }

    Some(TokenInfo {
        address,
        name: attributes.name.unwrap_or_else(|| "Unknown".to_string()),
        symbol: attributes.symbol.unwrap_or_else(|| "UNKNOWN".to_string()),
        decimals: attributes.decimals.unwrap_or(9),
    })
}

fn resolve_dex(id: Option<&str>, dex_map: &HashMap<String, IncludedAttributes>) -> DexInfo {
    match id {
        Some(id) => DexInfo {
            id: id.to_string(),
            name: dex_map
                .get(id)
                .and_then(|a| a.name.clone())
                .unwrap_or_else(|| id.to_string()),
        },
        None => DexInfo {
            id: "unknown".to_string(),
            name: "unknown".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_address_strips_exactly_one_prefix() {
        assert_eq!(extract_address("solana_Mint111"), "Mint111");
        // Identity when no prefix is present
        assert_eq!(extract_address("Mint111"), "Mint111");
        // Only one prefix is stripped
        assert_eq!(extract_address("solana_solana_Mint111"), "solana_Mint111");
        assert_eq!(extract_address(""), "");
    }

    #[test]
    fn test_parse_decimal_defaults_to_zero() {
        assert_eq!(parse_decimal(Some("5000.25")), 5000.25);
        assert_eq!(parse_decimal(Some("not-a-number")), 0.0);
        assert_eq!(parse_decimal(Some("")), 0.0);
        assert_eq!(parse_decimal(None), 0.0);
    }

    fn sample_response() -> &'static str {
        r#"{
            "data": [
                {
                    "id": "solana_PoolAAA",
                    "type": "pool",
                    "attributes": {
                        "address": "PoolAAA",
                        "name": "WBTC / USDC",
                        "pool_created_at": "2024-01-15T00:00:00Z",
                        "reserve_in_usd": "5000",
                        "volume_usd": { "h1": "120.5", "h24": "2000" },
                        "base_token_price_usd": "65000.1",
                        "fdv_usd": "123456"
                    },
                    "relationships": {
                        "base_token": { "data": { "id": "solana_MintWBTC", "type": "token" } },
                        "quote_token": { "data": { "id": "solana_MintUSDC", "type": "token" } },
                        "dex": { "data": { "id": "raydium", "type": "dex" } }
                    }
                },
                {
                    "id": "solana_PoolBBB",
                    "type": "pool",
                    "attributes": {
                        "address": "PoolBBB",
                        "reserve_in_usd": "10"
                    },
                    "relationships": {
                        "base_token": { "data": { "id": "solana_MintGhost", "type": "token" } },
                        "quote_token": { "data": { "id": "solana_MintUSDC", "type": "token" } },
                        "dex": { "data": { "id": "mystery_dex", "type": "dex" } }
                    }
                },
                {
                    "id": "solana_PoolCCC",
                    "type": "pool",
                    "attributes": { "address": "PoolCCC" },
                    "relationships": {
                        "quote_token": { "data": { "id": "solana_MintUSDC", "type": "token" } },
                        "dex": { "data": { "id": "raydium", "type": "dex" } }
                    }
                }
            ],
            "included": [
                {
                    "id": "solana_MintWBTC",
                    "type": "token",
                    "attributes": {
                        "address": "MintWBTC",
                        "name": "Wrapped BTC",
                        "symbol": "WBTC",
                        "decimals": 8
                    }
                },
                {
                    "id": "solana_MintUSDC",
                    "type": "token",
                    "attributes": {
                        "address": "MintUSDC",
                        "name": "USD Coin",
                        "symbol": "USDC",
                        "decimals": 6
                    }
                },
                {
                    "id": "raydium",
                    "type": "dex",
                    "attributes": { "name": "Raydium" }
                }
            ]
        }"#
    }

    #[test]
    fn test_resolution_populates_tokens_and_dex() {
        let response: PoolsResponse = serde_json::from_str(sample_response()).unwrap();
        let pools = response.into_pools();

        let pool = pools.iter().find(|p| p.address == "PoolAAA").unwrap();
        assert_eq!(pool.base_token.symbol, "WBTC");
        assert_eq!(pool.base_token.decimals, 8);
        assert_eq!(pool.quote_token.address, "MintUSDC");
        assert_eq!(pool.dex.id, "raydium");
        assert_eq!(pool.dex.name, "Raydium");
        assert_eq!(pool.liquidity_usd(), 5000.0);
        assert_eq!(pool.volume_h24_usd(), 2000.0);
        assert_eq!(pool.volume_h1_usd(), 120.5);
    }

    #[test]
    fn test_resolution_defaults_missing_entities() {
        let response: PoolsResponse = serde_json::from_str(sample_response()).unwrap();
        let pools = response.into_pools();

        // MintGhost has no included entry: address comes from the id with
        // the network prefix stripped, everything else is defaulted
        let pool = pools.iter().find(|p| p.address == "PoolBBB").unwrap();
        assert_eq!(pool.base_token.address, "MintGhost");
        assert_eq!(pool.base_token.name, "Unknown");
        assert_eq!(pool.base_token.symbol, "UNKNOWN");
        assert_eq!(pool.base_token.decimals, 9);
        // mystery_dex has no included entry: id doubles as display name
        assert_eq!(pool.dex.name, "mystery_dex");
        // Missing name falls back to the symbol pair
        assert_eq!(pool.name, "UNKNOWN / USDC");
    }

    #[test]
    fn test_pool_without_base_token_is_dropped() {
        let response: PoolsResponse = serde_json::from_str(sample_response()).unwrap();
        let pools = response.into_pools();

        assert_eq!(pools.len(), 2);
        assert!(!pools.iter().any(|p| p.address == "PoolCCC"));
    }
}
