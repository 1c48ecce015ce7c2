/// Trading config derivation
///
/// Converts filtered pools into the config schema consumed by the
/// downstream trading system. Field casing follows that schema: the
/// routing fields are camelCase (`programId`, `tokenA`, `ammId`), the
/// metadata projection keeps the API's snake_case names verbatim.
use serde::Serialize;

use crate::apis::geckoterminal::{
    DexInfo, Pool, PriceChangePercentage, TokenInfo, Transactions, VolumeUsd,
};
use crate::dex::{resolve_dex_program, PoolType};

/// One token side of a config entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeConfigToken {
    pub address: String,
    pub decimals: u8,
    pub symbol: String,
}

/// Type-specific account reference. Exactly one key is set, selected by
/// the resolved pool type: `state` for clmm, `ammId` for amm, `market`
/// for orderbook.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TradeConfigAccounts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(rename = "ammId", skip_serializing_if = "Option::is_none")]
    pub amm_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,
}

/// Price data projection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeConfigPrices {
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
}

/// Market metrics projection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeConfigMarketMetrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fdv_usd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap_usd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked_liquidity_percentage: Option<String>,
}

/// Config entry for one pool in the downstream trading schema
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeConfig {
    pub id: String,
    #[serde(rename = "type")]
    pub pool_type: PoolType,
    #[serde(rename = "programId")]
    pub program_id: String,
    #[serde(rename = "tokenA")]
    pub token_a: TradeConfigToken,
    #[serde(rename = "tokenB")]
    pub token_b: TradeConfigToken,
    pub accounts: TradeConfigAccounts,
    // Pool metadata
    pub address: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_created_at: Option<String>,
    // Liquidity and volume
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liquidity_usd: Option<String>,
    pub volume_usd: VolumeUsd,
    // Price data
    pub prices: TradeConfigPrices,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_change_percentage: Option<PriceChangePercentage>,
    // Transaction data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Transactions>,
    // Market metrics
    pub market_metrics: TradeConfigMarketMetrics,
    // DEX info
    pub dex: DexInfo,
}

impl TradeConfig {
    /// Derives a config entry from a pool and its run-wide sequence index.
    ///
    /// Token sides are ordered lexically by symbol so the id and the
    /// tokenA/tokenB assignment are deterministic regardless of the
    /// API-assigned base/quote order.
    pub fn from_pool(pool: &Pool, index: usize) -> Self {
        let dex_id = pool.dex.id.to_lowercase();
        let dex_info = resolve_dex_program(&dex_id);

        let mut tokens = [&pool.base_token, &pool.quote_token];
        tokens.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        let [token_a, token_b] = tokens;

        let id = format!(
            "gecko-{}-{}-{}-{}",
            dex_id,
            token_a.symbol.to_lowercase(),
            token_b.symbol.to_lowercase(),
            index
        );

        let mut accounts = TradeConfigAccounts::default();
        match dex_info.pool_type {
            PoolType::Clmm => accounts.state = Some(pool.address.clone()),
            PoolType::Amm => accounts.amm_id = Some(pool.address.clone()),
            PoolType::Orderbook => accounts.market = Some(pool.address.clone()),
        }

        let config_token = |t: &TokenInfo| TradeConfigToken {
            address: t.address.clone(),
            decimals: t.decimals,
            symbol: t.symbol.clone(),
        };

        Self {
            id,
            pool_type: dex_info.pool_type,
            program_id: dex_info.program_id.to_string(),
            token_a: config_token(token_a),
            token_b: config_token(token_b),
            accounts,
            address: pool.address.clone(),
            name: pool.name.clone(),
            pool_created_at: pool.pool_created_at.clone(),
            liquidity_usd: pool.reserve_in_usd.clone(),
            volume_usd: pool.volume_usd.clone(),
            prices: TradeConfigPrices {
                base_token_price_usd: pool.base_token_price_usd.clone(),
                base_token_price_native_currency: pool.base_token_price_native_currency.clone(),
                quote_token_price_usd: pool.quote_token_price_usd.clone(),
                base_token_price_quote_token: pool.base_token_price_quote_token.clone(),
                quote_token_price_base_token: pool.quote_token_price_base_token.clone(),
            },
            price_change_percentage: pool.price_change_percentage.clone(),
            transactions: pool.transactions.clone(),
            market_metrics: TradeConfigMarketMetrics {
                fdv_usd: pool.fdv_usd.clone(),
                market_cap_usd: pool.market_cap_usd.clone(),
                locked_liquidity_percentage: pool.locked_liquidity_percentage.clone(),
            },
            dex: pool.dex.clone(),
        }
    }
}

/// Derives config entries for all grouped pools, assigning sequence
/// indexes in group-then-pool iteration order
pub fn build_trade_configs(groups: &[(String, Vec<Pool>)]) -> Vec<TradeConfig> {
    let mut configs = Vec::new();
    let mut index = 0usize;

    for (_, pools) in groups {
        for pool in pools {
            configs.push(TradeConfig::from_pool(pool, index));
            index += 1;
        }
    }

    configs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pools::fixtures::pool;
    use crate::pools::grouping::group_by_pair;

    const USDC: (&str, &str) = ("USDC", "MintUSDC");
    const WBTC: (&str, &str) = ("WBTC", "MintWBTC");
    const BONK: (&str, &str) = ("BONK", "MintBONK");

    #[test]
    fn test_tokens_are_ordered_by_symbol() {
        // API assigns WBTC as base; the config must still put USDC first
        let config = TradeConfig::from_pool(&pool("P1", WBTC, USDC, "raydium", "5000", "2000"), 0);

        assert_eq!(config.token_a.symbol, "USDC");
        assert_eq!(config.token_b.symbol, "WBTC");
        assert_eq!(config.id, "gecko-raydium-usdc-wbtc-0");
    }

    #[test]
    fn test_account_key_matches_pool_type() {
        let amm = TradeConfig::from_pool(&pool("PoolAmm", WBTC, USDC, "raydium", "0", "0"), 0);
        assert_eq!(amm.accounts.amm_id.as_deref(), Some("PoolAmm"));
        assert!(amm.accounts.state.is_none() && amm.accounts.market.is_none());

        let clmm =
            TradeConfig::from_pool(&pool("PoolClmm", WBTC, USDC, "orca_whirlpool", "0", "0"), 1);
        assert_eq!(clmm.accounts.state.as_deref(), Some("PoolClmm"));
        assert!(clmm.accounts.amm_id.is_none() && clmm.accounts.market.is_none());

        let book = TradeConfig::from_pool(&pool("PoolBook", WBTC, USDC, "phoenix", "0", "0"), 2);
        assert_eq!(book.accounts.market.as_deref(), Some("PoolBook"));
        assert!(book.accounts.state.is_none() && book.accounts.amm_id.is_none());
    }

    #[test]
    fn test_unknown_dex_uses_fallback_mapping() {
        let config = TradeConfig::from_pool(&pool("P1", WBTC, USDC, "NewDex", "0", "0"), 0);

        assert_eq!(config.pool_type, PoolType::Clmm);
        assert_eq!(config.accounts.state.as_deref(), Some("P1"));
        // The id still carries the lowercased original dex id
        assert!(config.id.starts_with("gecko-newdex-"));
    }

    #[test]
    fn test_ids_are_deterministic_and_distinct() {
        let pools = vec![
            pool("P1", WBTC, USDC, "raydium", "0", "0"),
            pool("P2", BONK, USDC, "orca", "0", "0"),
            pool("P3", USDC, WBTC, "meteora_dlmm", "0", "0"),
        ];
        let groups = group_by_pair(&pools);

        let configs = build_trade_configs(&groups);
        let rerun = build_trade_configs(&groups);
        assert_eq!(configs, rerun);

        let mut ids: Vec<&str> = configs.iter().map(|c| c.id.as_str()).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);

        // Sequence indexes are strictly increasing in group-then-pool order
        assert!(configs[0].id.ends_with("-0"));
        assert!(configs[1].id.ends_with("-1"));
        assert!(configs[2].id.ends_with("-2"));
    }

    #[test]
    fn test_serialized_schema_keys() {
        let config = TradeConfig::from_pool(&pool("P1", WBTC, USDC, "raydium", "5000", "2000"), 0);
        let value = serde_json::to_value(&config).unwrap();

        assert!(value.get("programId").is_some());
        assert!(value.get("tokenA").is_some());
        assert!(value.get("tokenB").is_some());
        assert_eq!(value["type"], "amm");
        assert_eq!(value["accounts"]["ammId"], "P1");
        assert_eq!(value["liquidity_usd"], "5000");
        assert_eq!(value["volume_usd"]["h24"], "2000");
    }
}
