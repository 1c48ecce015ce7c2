/// Grouping filtered pools by unordered token pair
///
/// The pair key is symmetric: base/quote order is API-assigned, not
/// canonical, so the two symbols are sorted lexically before joining.
/// Groups keep first-seen order and pools keep insertion order within
/// their group, which makes config id assignment deterministic.
use crate::apis::geckoterminal::Pool;

/// Unordered pair key for a pool, e.g. `USDC/WBTC`
pub fn pair_key(pool: &Pool) -> String {
    let mut symbols = [
        pool.base_token.symbol.as_str(),
        pool.quote_token.symbol.as_str(),
    ];
    symbols.sort();
    symbols.join("/")
}

/// Buckets pools by pair key, preserving first-seen group ordering and
/// within-group insertion order
pub fn group_by_pair(pools: &[Pool]) -> Vec<(String, Vec<Pool>)> {
    let mut groups: Vec<(String, Vec<Pool>)> = Vec::new();

    for pool in pools {
        let key = pair_key(pool);
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(pool.clone()),
            None => groups.push((key, vec![pool.clone()])),
        }
    }

    groups
}
