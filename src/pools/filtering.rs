/// Predicate filters and the composed filter pipeline
///
/// Three pure predicates (target pair, USDC-only, liquidity/volume) and the
/// composition used by the run: target pairs pass the (1000, 1000)
/// thresholds, USDC-only pools the stricter (1000, 100000) thresholds, and
/// the two survivor sets are concatenated target-pairs-first. The two pair
/// predicates are mutually exclusive by construction, so the concatenation
/// needs no further dedup.
use std::collections::HashSet;

use crate::apis::geckoterminal::Pool;
use crate::constants::{MIN_LIQUIDITY_USD, MIN_VOLUME_24H_USD, MIN_VOLUME_24H_USDC_ONLY_USD};
use crate::tokens;

/// Keeps a pool iff both sides belong to the target registry
pub fn is_target_pair(pool: &Pool, target_addresses: &HashSet<String>) -> bool {
    let base = pool.base_token.address.to_lowercase();
    let quote = pool.quote_token.address.to_lowercase();

    target_addresses.contains(&base) && target_addresses.contains(&quote)
}

/// Keeps a pool iff exactly one side is USDC and the other side is NOT a
/// registry token, i.e. the pool pairs USDC with some external token
pub fn is_usdc_only(
    pool: &Pool,
    target_addresses: &HashSet<String>,
    usdc_address: &str,
) -> bool {
    let base = pool.base_token.address.to_lowercase();
    let quote = pool.quote_token.address.to_lowercase();
    let usdc = usdc_address.to_lowercase();

    if base == usdc {
        return !target_addresses.contains(&quote);
    }
    if quote == usdc {
        return !target_addresses.contains(&base);
    }

    false
}

/// Keeps a pool iff its reserve and 24h volume both meet the thresholds.
/// Missing or unparsable values count as zero.
pub fn meets_liquidity_and_volume(pool: &Pool, min_liquidity: f64, min_volume_24h: f64) -> bool {
    pool.liquidity_usd() >= min_liquidity && pool.volume_h24_usd() >= min_volume_24h
}

/// The filter pipeline's intermediate and final sets, kept for reporting
#[derive(Debug, Default)]
pub struct FilterReport {
    /// Pools pairing two registry tokens, before threshold filtering
    pub relevant: Vec<Pool>,
    /// Target-pair pools that passed the (liquidity, volume) thresholds
    pub target_pairs: Vec<Pool>,
    /// Pools pairing USDC with a non-registry token, before thresholds
    pub usdc_candidates: Vec<Pool>,
    /// USDC-only pools that passed the stricter thresholds
    pub usdc_only: Vec<Pool>,
    /// Final set: filtered target pairs followed by filtered USDC-only pools
    pub filtered: Vec<Pool>,
}

/// Runs the composed filter pipeline over the aggregated pools
pub fn apply_filter_pipeline(pools: &[Pool]) -> FilterReport {
    let target_addresses = tokens::target_address_set();
    let usdc = tokens::usdc_address();

    let relevant: Vec<Pool> = pools
        .iter()
        .filter(|p| is_target_pair(p, &target_addresses))
        .cloned()
        .collect();

    let target_pairs: Vec<Pool> = relevant
        .iter()
        .filter(|p| meets_liquidity_and_volume(p, MIN_LIQUIDITY_USD, MIN_VOLUME_24H_USD))
        .cloned()
        .collect();

    let usdc_candidates: Vec<Pool> = pools
        .iter()
        .filter(|p| is_usdc_only(p, &target_addresses, usdc))
        .cloned()
        .collect();

    let usdc_only: Vec<Pool> = usdc_candidates
        .iter()
        .filter(|p| {
            meets_liquidity_and_volume(p, MIN_LIQUIDITY_USD, MIN_VOLUME_24H_USDC_ONLY_USD)
        })
        .cloned()
        .collect();

    let mut filtered = Vec::with_capacity(target_pairs.len() + usdc_only.len());
    filtered.extend(target_pairs.iter().cloned());
    filtered.extend(usdc_only.iter().cloned());

    FilterReport {
        relevant,
        target_pairs,
        usdc_candidates,
        usdc_only,
        filtered,
    }
}
