/// Aggregate pool set
///
/// The same pool shows up in the results of several per-token queries
/// (any pool pairing two registry tokens appears once per side). The set
/// keys pools by address so each physical pool is kept once, with the
/// last-fetched record winning, while iteration preserves first-insertion
/// order for deterministic downstream output.
use std::collections::HashMap;

use crate::apis::geckoterminal::Pool;

/// Address-keyed, insertion-ordered pool collection
#[derive(Debug, Default)]
pub struct PoolSet {
    pools: Vec<Pool>,
    index: HashMap<String, usize>,
}

impl PoolSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a pool, overwriting any earlier record with the same address
    pub fn insert(&mut self, pool: Pool) {
        match self.index.get(&pool.address) {
            Some(&slot) => {
                self.pools[slot] = pool;
            }
            None => {
                self.index.insert(pool.address.clone(), self.pools.len());
                self.pools.push(pool);
            }
        }
    }

    pub fn extend<I: IntoIterator<Item = Pool>>(&mut self, pools: I) {
        for pool in pools {
            self.insert(pool);
        }
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// All pools, in first-insertion order
    pub fn pools(&self) -> &[Pool] {
        &self.pools
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::geckoterminal::{DexInfo, TokenInfo, VolumeUsd};

    fn make_pool(address: &str, reserve: &str) -> Pool {
        let token = |symbol: &str| TokenInfo {
            address: format!("Mint{}", symbol),
            name: symbol.to_string(),
            symbol: symbol.to_string(),
            decimals: 9,
        };
        Pool {
            address: address.to_string(),
            name: "A / B".to_string(),
            pool_created_at: None,
            base_token: token("A"),
            quote_token: token("B"),
            dex: DexInfo {
                id: "raydium".to_string(),
                name: "Raydium".to_string(),
            },
            reserve_in_usd: Some(reserve.to_string()),
            volume_usd: VolumeUsd::default(),
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

    #[test]
    fn test_duplicate_addresses_collapse_to_one_entry() {
        let mut set = PoolSet::new();
        set.insert(make_pool("PoolA", "100"));
        set.insert(make_pool("PoolB", "200"));
        set.insert(make_pool("PoolA", "999"));

        assert_eq!(set.len(), 2);
        // Last write for a given address wins
        assert_eq!(
            set.pools()[0].reserve_in_usd.as_deref(),
            Some("999")
        );
    }

    #[test]
    fn test_iteration_preserves_first_insertion_order() {
        let mut set = PoolSet::new();
        set.extend([
            make_pool("PoolC", "1"),
            make_pool("PoolA", "2"),
            make_pool("PoolB", "3"),
            make_pool("PoolC", "4"),
        ]);

        let order: Vec<&str> = set.pools().iter().map(|p| p.address.as_str()).collect();
        assert_eq!(order, vec!["PoolC", "PoolA", "PoolB"]);
    }
}
