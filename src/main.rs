use chrono::{SecondsFormat, Utc};

use megagecko::apis::client::RequestPacer;
use megagecko::apis::geckoterminal::GeckoTerminalClient;
use megagecko::constants::RATE_LIMIT_PER_MINUTE;
use megagecko::pools::{filtering, grouping, PoolSet};
use megagecko::reporting::{log_store, summary, ConsoleReporter, LogEntry};
use megagecko::trade_config;
use megagecko::{arguments, logger, paths, tokens};

/// Main entry point for the MegaGecko pool fetcher
///
/// One sequential pass: fetch pools per target token (paced to the
/// GeckoTerminal rate limit), aggregate, filter, group, derive trading
/// configs, then report. Per-token fetch failures only cost that token's
/// contribution; the run always reaches the reporting stage.
#[tokio::main]
async fn main() {
    if arguments::is_help_requested() {
        arguments::print_help();
        return;
    }

    // Logs directory must exist before anything writes to it
    if let Err(e) = paths::ensure_all_directories() {
        logger::error(&format!("Failed to create logs directory: {}", e));
        std::process::exit(1);
    }

    let reporter = ConsoleReporter::new(arguments::is_json_only_enabled());

    reporter.print_banner();
    reporter.print_target_tokens();

    let client = GeckoTerminalClient::new();
    let pacer = RequestPacer::per_minute(RATE_LIMIT_PER_MINUTE);
    let mut all_pools = PoolSet::new();

    for token in tokens::TARGET_TOKENS {
        pacer.wait().await;
        reporter.info(&format!(
            "Fetching pools for {} ({})...",
            token.symbol, token.address
        ));
        let pools = client.fetch_pools_for_token(token.address).await;
        reporter.info(&format!("  Found {} pools\n", pools.len()));
        all_pools.extend(pools);
    }

    reporter.info(&format!("Total unique pools: {}\n", all_pools.len()));

    let report = filtering::apply_filter_pipeline(all_pools.pools());
    reporter.print_filter_stats(&report, all_pools.len());

    let groups = grouping::group_by_pair(&report.filtered);
    reporter.print_grouped_pools(&groups);

    let configs = trade_config::build_trade_configs(&groups);
    reporter.print_configs_banner();

    // The config dump is the machine-readable contract of this tool:
    // always emitted to stdout, quiet or not
    match serde_json::to_string_pretty(&configs) {
        Ok(json) => println!("{}", json),
        Err(e) => logger::error(&format!("Failed to serialize configs: {}", e)),
    }

    let now = Utc::now();
    let entry = LogEntry::new(
        now.to_rfc3339_opts(SecondsFormat::Millis, true),
        all_pools.len(),
        report.relevant.len(),
        &report.filtered,
        configs.clone(),
    );

    let date = now.date_naive();
    let json_path = paths::get_json_log_path(date);
    match log_store::append_json_log_entry(&json_path, &entry) {
        Ok(count) => reporter.success(&format!(
            "Run {} logged to {}",
            count,
            json_path.display()
        )),
        Err(e) => logger::error(&format!("Failed to write JSON log: {:#}", e)),
    }

    let text_path = paths::get_text_log_path(date);
    let rendered = summary::render_human_log(&now, &entry.summary, &groups, &configs);
    match log_store::append_text_log(&text_path, &rendered) {
        Ok(()) => reporter.success(&format!("Report appended to {}", text_path.display())),
        Err(e) => logger::error(&format!("Failed to write text log: {:#}", e)),
    }
}
