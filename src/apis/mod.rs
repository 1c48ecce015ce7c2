/// External API clients
///
/// Each upstream data provider gets its own submodule with a typed client.
/// Request pacing lives in `client` and is shared by all of them.
pub mod client;
pub mod geckoterminal;
