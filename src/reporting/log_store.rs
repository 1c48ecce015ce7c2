/// Per-day run logs
///
/// Two files per calendar day under the logs directory:
/// - `pools-YYYY-MM-DD.json`: an ordered array of [`LogEntry`] values, one
///   appended per run via read-modify-write. A corrupt or missing file
///   starts a fresh sequence; a bare object body is wrapped into an array.
/// - `pools-YYYY-MM-DD.txt`: human-readable report, strictly appended to
///   and never parsed back.
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::apis::geckoterminal::{DexInfo, Pool, TokenInfo, VolumeUsd};
use crate::constants::{MIN_LIQUIDITY_USD, MIN_VOLUME_24H_USD};
use crate::trade_config::TradeConfig;

/// Run summary counts recorded with every log entry
#[derive(Debug, Clone, Serialize)]
pub struct LogSummary {
    pub total_pools_fetched: usize,
    pub relevant_pools: usize,
    pub filtered_pools: usize,
    pub configs_generated: usize,
    pub min_liquidity: f64,
    pub min_volume_24h: f64,
}

/// Trimmed pool projection kept in the JSON log
#[derive(Debug, Clone, Serialize)]
pub struct RawPoolSnapshot {
    pub address: String,
    pub name: String,
    pub dex: DexInfo,
    pub base_token: TokenInfo,
    pub quote_token: TokenInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liquidity_usd: Option<String>,
    pub volume_usd: VolumeUsd,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_created_at: Option<String>,
}

impl RawPoolSnapshot {
    pub fn from_pool(pool: &Pool) -> Self {
        Self {
            address: pool.address.clone(),
            name: pool.name.clone(),
            dex: pool.dex.clone(),
            base_token: pool.base_token.clone(),
            quote_token: pool.quote_token.clone(),
            liquidity_usd: pool.reserve_in_usd.clone(),
            volume_usd: pool.volume_usd.clone(),
            pool_created_at: pool.pool_created_at.clone(),
        }
    }
}

/// One record per run in the per-day JSON log
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub summary: LogSummary,
    pub target_tokens: BTreeMap<String, String>,
    pub configs: Vec<TradeConfig>,
    pub raw_pools: Vec<RawPoolSnapshot>,
}

impl LogEntry {
    pub fn new(
        timestamp: String,
        total_pools_fetched: usize,
        relevant_pools: usize,
        filtered: &[Pool],
        configs: Vec<TradeConfig>,
    ) -> Self {
        Self {
            timestamp,
            summary: LogSummary {
                total_pools_fetched,
                relevant_pools,
                filtered_pools: filtered.len(),
                configs_generated: configs.len(),
                min_liquidity: MIN_LIQUIDITY_USD,
                min_volume_24h: MIN_VOLUME_24H_USD,
            },
            target_tokens: crate::tokens::registry_snapshot(),
            configs,
            raw_pools: filtered.iter().map(RawPoolSnapshot::from_pool).collect(),
        }
    }
}

/// Appends one entry to the per-day JSON log via read-modify-write.
///
/// The existing file is parsed leniently: a corrupt body starts a fresh
/// sequence, a single-object body is wrapped into a one-element array.
/// Returns the number of entries now in the file.
pub fn append_json_log_entry(path: &Path, entry: &LogEntry) -> Result<usize> {
    let mut entries: Vec<Value> = match fs::read_to_string(path) {
        Ok(raw) => match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(existing)) => existing,
            Ok(other) => vec![other],
            // Corrupt log file: discard and start fresh
            Err(_) => Vec::new(),
        },
        Err(_) => Vec::new(),
    };

    entries.push(serde_json::to_value(entry).context("serializing log entry")?);

    let body = serde_json::to_string_pretty(&entries).context("serializing log sequence")?;
    fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;

    Ok(entries.len())
}

/// Appends to the per-day human-readable log. Never parses or rewrites
/// existing content.
pub fn append_text_log(path: &Path, content: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("appending to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pools::fixtures::pool;
    use crate::pools::grouping::group_by_pair;
    use crate::trade_config::build_trade_configs;

    fn sample_entry(timestamp: &str) -> LogEntry {
        let filtered = vec![pool(
            "PoolAAA",
            ("WBTC", "MintWBTC"),
            ("USDC", "MintUSDC"),
            "raydium",
            "5000",
            "2000",
        )];
        let configs = build_trade_configs(&group_by_pair(&filtered));
        LogEntry::new(timestamp.to_string(), 10, 3, &filtered, configs)
    }

    #[test]
    fn test_round_trip_appends_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pools-2026-08-24.json");

        let first = sample_entry("2026-08-24T10:00:00Z");
        let count = append_json_log_entry(&path, &first).unwrap();
        assert_eq!(count, 1);

        let body: Vec<Value> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(body.len(), 1);
        assert_eq!(body[0], serde_json::to_value(&first).unwrap());

        // Second run appends; the first entry is unchanged
        let second = sample_entry("2026-08-24T11:00:00Z");
        let count = append_json_log_entry(&path, &second).unwrap();
        assert_eq!(count, 2);

        let body: Vec<Value> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(body.len(), 2);
        assert_eq!(body[0], serde_json::to_value(&first).unwrap());
        assert_eq!(body[1], serde_json::to_value(&second).unwrap());
    }

    #[test]
    fn test_corrupt_log_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pools.json");
        fs::write(&path, "{ not json at all").unwrap();

        let count = append_json_log_entry(&path, &sample_entry("t")).unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_single_object_body_is_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pools.json");
        fs::write(&path, r#"{"timestamp": "older-run"}"#).unwrap();

        let count = append_json_log_entry(&path, &sample_entry("t")).unwrap();
        assert_eq!(count, 2);

        let body: Vec<Value> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(body[0]["timestamp"], "older-run");
    }

    #[test]
    fn test_text_log_is_append_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pools.txt");

        append_text_log(&path, "first run\n").unwrap();
        append_text_log(&path, "second run\n").unwrap();

        let body = fs::read_to_string(&path).unwrap();
        assert_eq!(body, "first run\nsecond run\n");
    }
}
