/// Console narration and the human-readable report
///
/// [`ConsoleReporter`] owns the run's narration policy: constructed once
/// with the quiet flag (driven by `--json`), it decides at one place
/// whether anything is printed. The rendered text report is what gets
/// appended to the per-day text log. Formatting mirrors the downstream
/// team's expected report layout.
use chrono::{DateTime, SecondsFormat, Utc};

use crate::apis::geckoterminal::Pool;
use crate::constants::{MIN_LIQUIDITY_USD, MIN_VOLUME_24H_USD, MIN_VOLUME_24H_USDC_ONLY_USD};
use crate::logger;
use crate::pools::FilterReport;
use crate::tokens::TARGET_TOKENS;
use crate::trade_config::TradeConfig;

// ============================================================================
// NUMBER FORMATTING
// ============================================================================

/// Formats a USD amount with thousands separators and a fixed number of
/// decimal places
pub fn format_usd(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Formats a token price: up to six decimal places, trailing zeros trimmed
/// down to a minimum of two
fn format_price(value: f64) -> String {
    let s = format_usd(value, 6);
    match s.find('.') {
        Some(dot) => {
            let mut end = s.len();
            while end - dot - 1 > 2 && s.as_bytes()[end - 1] == b'0' {
                end -= 1;
            }
            s[..end].to_string()
        }
        None => s,
    }
}

// ============================================================================
// CONSOLE NARRATION
// ============================================================================

fn rule() -> String {
    "━".repeat(53)
}

/// Run narration with an explicit output policy.
///
/// All console narration flows through one reporter instance so the quiet
/// decision is made in exactly one place. In quiet mode the config JSON
/// dump is the only thing the run writes to stdout.
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    fn plain(&self, message: &str) {
        if !self.quiet {
            logger::plain(message);
        }
    }

    /// Standard informational narration
    pub fn info(&self, message: &str) {
        if !self.quiet {
            logger::info(message);
        }
    }

    /// Completed milestones
    pub fn success(&self, message: &str) {
        if !self.quiet {
            logger::success(message);
        }
    }

    pub fn print_banner(&self) {
        self.plain(&rule());
        self.plain("🦎 MEGAGECKO POOL FETCHER");
        self.plain(&format!("{}\n", rule()));
    }

    pub fn print_target_tokens(&self) {
        self.plain("Target tokens:");
        for token in TARGET_TOKENS {
            self.plain(&format!("  {}: {}", token.symbol, token.address));
        }
        self.plain("");
    }

    /// Narrates the filter pipeline counts after aggregation
    pub fn print_filter_stats(&self, report: &FilterReport, total_pools: usize) {
        self.plain(&rule());
        self.plain(&format!(
            "✅ Found {} target token pair pools (out of {} total)",
            report.relevant.len(),
            total_pools
        ));
        self.plain(&format!("{}\n", rule()));

        self.plain(&format!(
            "📊 Filtering target token pairs: min liquidity ${}, min 24h volume ${}",
            format_usd(MIN_LIQUIDITY_USD, 0),
            format_usd(MIN_VOLUME_24H_USD, 0)
        ));
        self.plain(&format!(
            "✅ {} target token pair pools passed filters (out of {} relevant pools)\n",
            report.target_pairs.len(),
            report.relevant.len()
        ));

        self.plain(&format!(
            "🔍 Found {} USDC pools with non-target tokens\n",
            report.usdc_candidates.len()
        ));
        self.plain(&format!(
            "📊 Filtering USDC-only pools: min liquidity ${}, min 24h volume ${}",
            format_usd(MIN_LIQUIDITY_USD, 0),
            format_usd(MIN_VOLUME_24H_USDC_ONLY_USD, 0)
        ));
        self.plain(&format!(
            "✅ {} USDC-only pools passed filters (out of {} USDC-only pools)\n",
            report.usdc_only.len(),
            report.usdc_candidates.len()
        ));

        self.plain(&format!(
            "📊 Total filtered pools: {} ({} target pairs + {} USDC-only)\n",
            report.filtered.len(),
            report.target_pairs.len(),
            report.usdc_only.len()
        ));
    }

    /// Narrates the grouped pools, one block per pair
    pub fn print_grouped_pools(&self, groups: &[(String, Vec<Pool>)]) {
        for (pair, pools) in groups {
            self.plain(&format!("\n{} ({} pools):", pair, pools.len()));
            for (idx, pool) in pools.iter().enumerate() {
                self.plain(&format!("  {}. {}", idx + 1, pool.address));
                self.plain(&format!("     DEX: {} ({})", pool.dex.name, pool.dex.id));
                self.plain(&format!(
                    "     Liquidity: ${}",
                    format_usd(pool.liquidity_usd(), 0)
                ));
                self.plain(&format!(
                    "     Volume 24h: ${}",
                    format_usd(pool.volume_h24_usd(), 0)
                ));
            }
        }
    }

    pub fn print_configs_banner(&self) {
        self.plain(&format!("\n{}", rule()));
        self.plain("📋 GENERATED CONFIG ENTRIES");
        self.plain(&format!("{}\n", rule()));
    }
}

// ============================================================================
// HUMAN-READABLE TEXT REPORT
// ============================================================================

/// Renders the full text report appended to the per-day text log
pub fn render_human_log(
    now: &DateTime<Utc>,
    summary: &crate::reporting::LogSummary,
    groups: &[(String, Vec<Pool>)],
    configs: &[TradeConfig],
) -> String {
    let heavy = "═".repeat(79);
    let medium = "━".repeat(77);
    let light = "─".repeat(80);
    let timestamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);

    let mut out = String::new();

    out.push_str(&format!("{}\n", heavy));
    out.push_str("🦎 MEGAGECKO POOL FETCHER - FETCH LOG\n");
    out.push_str(&format!("{}\n\n", heavy));
    out.push_str(&format!("Timestamp: {}\n", timestamp));
    out.push_str(&format!(
        "Date: {}\n\n",
        now.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    out.push_str(&format!("{}\n", medium));
    out.push_str("📊 SUMMARY\n");
    out.push_str(&format!("{}\n\n", medium));
    out.push_str(&format!(
        "Total Pools Fetched:      {}\n",
        summary.total_pools_fetched
    ));
    out.push_str(&format!(
        "Relevant Pools:           {}\n",
        summary.relevant_pools
    ));
    out.push_str(&format!(
        "Filtered Pools:           {}\n",
        summary.filtered_pools
    ));
    out.push_str(&format!(
        "Configs Generated:        {}\n",
        summary.configs_generated
    ));
    out.push_str(&format!(
        "Min Liquidity Filter:     ${}\n",
        format_usd(summary.min_liquidity, 0)
    ));
    out.push_str(&format!(
        "Min 24h Volume Filter:    ${}\n\n",
        format_usd(summary.min_volume_24h, 0)
    ));

    out.push_str(&format!("{}\n", medium));
    out.push_str("🎯 TARGET TOKENS\n");
    out.push_str(&format!("{}\n\n", medium));
    for token in TARGET_TOKENS {
        out.push_str(&format!("{:<10} {}\n", token.symbol, token.address));
    }
    out.push('\n');

    out.push_str(&format!("{}\n", medium));
    out.push_str("💧 FILTERED POOLS\n");
    out.push_str(&format!("{}\n\n", medium));

    for (pair, pools) in groups {
        out.push_str(&format!(
            "\n{} ({} pool{}):\n",
            pair,
            pools.len(),
            if pools.len() > 1 { "s" } else { "" }
        ));
        out.push_str(&format!("{}\n", light));

        for (idx, pool) in pools.iter().enumerate() {
            out.push_str(&render_pool_detail(idx + 1, pool));
        }
        out.push('\n');
    }

    out.push_str(&format!("\n{}\n", medium));
    out.push_str("⚙️  GENERATED CONFIGS\n");
    out.push_str(&format!("{}\n\n", medium));

    for (idx, config) in configs.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", idx + 1, config.id));
        out.push_str(&format!(
            "   Type:        {}\n",
            config.pool_type.as_str().to_uppercase()
        ));
        out.push_str(&format!("   Program ID:  {}\n", config.program_id));
        out.push_str(&format!(
            "   Token A:     {} ({})\n",
            config.token_a.symbol, config.token_a.address
        ));
        out.push_str(&format!(
            "   Token B:     {} ({})\n",
            config.token_b.symbol, config.token_b.address
        ));
        if let Some(state) = &config.accounts.state {
            out.push_str(&format!("   State:       {}\n", state));
        } else if let Some(amm_id) = &config.accounts.amm_id {
            out.push_str(&format!("   AMM ID:      {}\n", amm_id));
        } else if let Some(market) = &config.accounts.market {
            out.push_str(&format!("   Market:      {}\n", market));
        }
        out.push('\n');
    }

    out.push_str(&format!("{}\n", heavy));
    out.push_str(&format!("End of log - {}\n", timestamp));
    out.push_str(&format!("{}\n", heavy));

    out
}

fn render_pool_detail(position: usize, pool: &Pool) -> String {
    let price_change_24h = pool
        .price_change_percentage
        .as_ref()
        .and_then(|c| c.h24.clone())
        .unwrap_or_else(|| "N/A".to_string());
    let tx_24h = pool
        .transactions
        .as_ref()
        .and_then(|t| t.h24.clone())
        .unwrap_or_default();

    let mut out = String::new();
    out.push_str(&format!("\n{}. Pool Address: {}\n", position, pool.address));
    out.push_str(&format!("   Name:           {}\n", pool.name));
    out.push_str(&format!(
        "   DEX:            {} ({})\n",
        pool.dex.name, pool.dex.id
    ));
    out.push_str(&format!(
        "   Created:        {}\n",
        pool.pool_created_at.as_deref().unwrap_or("N/A")
    ));
    out.push_str(&format!(
        "   Liquidity:      ${}\n",
        format_usd(pool.liquidity_usd(), 2)
    ));
    out.push_str(&format!(
        "   Volume 24h:     ${}\n",
        format_usd(pool.volume_h24_usd(), 2)
    ));
    out.push_str(&format!(
        "   Volume 1h:      ${}\n",
        format_usd(pool.volume_h1_usd(), 2)
    ));
    out.push_str(&format!("   Price Change:   {}% (24h)\n", price_change_24h));
    out.push_str(&format!(
        "   Transactions:   {} buys, {} sells (24h)\n",
        tx_24h.buys, tx_24h.sells
    ));
    out.push_str(&format!(
        "   Base Token:     {} ({})\n",
        pool.base_token.symbol, pool.base_token.address
    ));
    out.push_str(&format!(
        "   Quote Token:    {} ({})\n",
        pool.quote_token.symbol, pool.quote_token.address
    ));

    if let Some(price) = pool
        .base_token_price_usd
        .as_deref()
        .and_then(|p| p.parse::<f64>().ok())
    {
        out.push_str(&format!("   Base Price:     ${}\n", format_price(price)));
    }
    if let Some(price) = pool
        .quote_token_price_usd
        .as_deref()
        .and_then(|p| p.parse::<f64>().ok())
    {
        out.push_str(&format!("   Quote Price:    ${}\n", format_price(price)));
    }

    out
}
