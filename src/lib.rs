pub mod apis;
pub mod arguments;
pub mod constants;
pub mod dex;
pub mod logger;
pub mod paths;
pub mod pools;
pub mod reporting;
pub mod tokens;
pub mod trade_config;
