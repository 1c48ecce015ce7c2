/// Centralized argument handling for the MegaGecko pool fetcher
///
/// Consolidates all command-line argument parsing and flag checking:
/// - Centralized CMD_ARGS storage with thread-safe access
/// - Flag checking functions for all modules
/// - Help text printing
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

/// Global command-line arguments storage
/// Thread-safe singleton that stores arguments for access throughout the application
pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// Sets the global command-line arguments
/// Used by tests to override the default env::args() collection
pub fn set_cmd_args(args: Vec<String>) {
    if let Ok(mut cmd_args) = CMD_ARGS.lock() {
        *cmd_args = args;
    }
}

/// Gets a copy of the current command-line arguments
/// Returns a vector clone to avoid holding the mutex lock
pub fn get_cmd_args() -> Vec<String> {
    match CMD_ARGS.lock() {
        Ok(args) => args.clone(),
        Err(_) => {
            // Fallback to env::args if mutex is poisoned
            env::args().collect()
        }
    }
}

/// Checks if a specific argument is present in the command line
pub fn has_arg(arg: &str) -> bool {
    get_cmd_args().iter().any(|a| a == arg)
}

// =============================================================================
// FLAG CHECKING FUNCTIONS
// =============================================================================

/// JSON-only output mode: suppresses console narration while still
/// emitting the final config JSON dump to stdout
pub fn is_json_only_enabled() -> bool {
    has_arg("--json")
}

/// API calls debug mode
pub fn is_debug_api_enabled() -> bool {
    has_arg("--debug-api")
}

/// Help requested
pub fn is_help_requested() -> bool {
    has_arg("--help") || has_arg("-h")
}

/// Prints usage information
pub fn print_help() {
    println!("MegaGecko Pool Fetcher");
    println!();
    println!("Fetches Solana DEX pools for the configured target tokens from the");
    println!("GeckoTerminal API, filters them by liquidity and volume, and emits");
    println!("trading config entries plus per-day JSON and text logs.");
    println!();
    println!("USAGE:");
    println!("    megagecko [FLAGS]");
    println!();
    println!("FLAGS:");
    println!("    --json         Output the generated configs as JSON only (no narration)");
    println!("    --debug-api    Show API request details");
    println!("    -h, --help     Print this help text");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_arg_after_override() {
        set_cmd_args(vec![
            "megagecko".to_string(),
            "--json".to_string(),
            "--debug-api".to_string(),
        ]);

        assert!(has_arg("--json"));
        assert!(has_arg("--debug-api"));
        assert!(!has_arg("--verbose"));
        assert!(is_json_only_enabled());
        assert!(is_debug_api_enabled());

        // Restore real args so other tests are unaffected
        set_cmd_args(std::env::args().collect());
    }
}
