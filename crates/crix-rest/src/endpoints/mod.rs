//! API endpoint implementations

pub mod account;
pub mod market;
pub mod trading;

pub use account::AccountEndpoints;
pub use market::{MarketEndpoints, OhlcvQuery};
pub use trading::TradingEndpoints;

use serde::Serialize;

/// Request bodies are wrapped as `{"req": {...}}`
#[derive(Debug, Serialize)]
pub(crate) struct Envelope<T> {
    pub req: T,
}

impl<T> Envelope<T> {
    pub fn new(req: T) -> Self {
        Self { req }
    }
}

/// Per-symbol listing request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SymbolListing<'a> {
    pub limit: u32,
    pub symbol_name: &'a str,
}

/// Single order reference
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderRef<'a> {
    pub order_id: u64,
    pub symbol_name: &'a str,
}
