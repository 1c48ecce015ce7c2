/// Target token registry
///
/// Compiled-in mapping of symbol -> Solana mint address. These are the
/// tokens the downstream arbitrage logic cares about; the fetch loop issues
/// one GeckoTerminal query per entry, in declaration order.
use std::collections::{BTreeMap, HashSet};

/// A registry entry: symbol plus on-chain mint address
#[derive(Debug, Clone, Copy)]
pub struct TargetToken {
    pub symbol: &'static str,
    pub address: &'static str,
}

/// Target tokens for arbitrage. Extend here when new pairs become relevant.
pub static TARGET_TOKENS: &[TargetToken] = &[
    TargetToken {
        symbol: "USDC",
        address: "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
    },
    TargetToken {
        symbol: "cbBTC",
        address: "cbbtcf3aa214zXHbiAZQwf4122FBYbraNdFqgw4iMij",
    },
    TargetToken {
        symbol: "WBTC",
        address: "5XZw2LKTyrfvfiskJ78AMpackRjPcyCif1WhUsPDuVqQ",
    },
];

/// Returns the USDC mint address, the anchor side of the USDC-only filter
pub fn usdc_address() -> &'static str {
    TARGET_TOKENS
        .iter()
        .find(|t| t.symbol == "USDC")
        .map(|t| t.address)
        .unwrap_or("")
}

/// Returns the set of registry addresses, lowercased for
/// case-insensitive comparison against API data
pub fn target_address_set() -> HashSet<String> {
    TARGET_TOKENS
        .iter()
        .map(|t| t.address.to_lowercase())
        .collect()
}

/// Registry snapshot (symbol -> address) for the run log entry
pub fn registry_snapshot() -> BTreeMap<String, String> {
    TARGET_TOKENS
        .iter()
        .map(|t| (t.symbol.to_string(), t.address.to_string()))
        .collect()
}
