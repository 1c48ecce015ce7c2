/// Shared pool construction helpers for tests
use crate::apis::geckoterminal::{DexInfo, Pool, TokenInfo, VolumeUsd};

/// Builds a pool with the fields the filter/config stages care about.
/// Token tuples are (symbol, address).
pub fn pool(
    address: &str,
    base: (&str, &str),
    quote: (&str, &str),
    dex_id: &str,
    reserve_in_usd: &str,
    volume_h24: &str,
) -> Pool {
    let token = |(symbol, address): (&str, &str)| TokenInfo {
        address: address.to_string(),
        name: symbol.to_string(),
        symbol: symbol.to_string(),
        decimals: 9,
    };

    Pool {
        address: address.to_string(),
        name: format!("{} / {}", base.0, quote.0),
        pool_created_at: Some("2024-01-15T00:00:00Z".to_string()),
        base_token: token(base),
        quote_token: token(quote),
        dex: DexInfo {
            id: dex_id.to_string(),
            name: dex_id.to_string(),
        },
        reserve_in_usd: Some(reserve_in_usd.to_string()),
        volume_usd: VolumeUsd {
            h24: Some(volume_h24.to_string()),
            ..Default::default()
        },
        price_change_percentage: None,
        transactions: None,
        base_token_price_usd: None,
        base_token_price_native_currency: None,
        quote_token_price_usd: None,
        base_token_price_quote_token: None,
        quote_token_price_base_token: None,
        fdv_usd: None,
        market_cap_usd: None,
        locked_liquidity_percentage: None,
    }
}
