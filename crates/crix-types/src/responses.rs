//! Response envelopes
//!
//! List endpoints wrap their payload in a single named field which the
//! exchange sets to `null` when there is nothing to return.

use crate::account::Account;
use crate::market::{Ticker, Ticker24};
use crate::order::Order;
use crate::serde_util::null_as_default;
use crate::symbol::Symbol;
use crate::trade::Trade;
use serde::Deserialize;

/// `/info/symbols` response
#[derive(Debug, Clone, Deserialize)]
pub struct SymbolsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub symbol: Vec<Symbol>,
}

/// `/klines` response
#[derive(Debug, Clone, Deserialize)]
pub struct OhlcResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ohlc: Vec<Ticker>,
}

/// `/tickers24` response
#[derive(Debug, Clone, Deserialize)]
pub struct Tickers24Response {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ohlc: Vec<Ticker24>,
}

/// `/user/orders/open` and `/user/orders/complete` response
#[derive(Debug, Clone, Deserialize)]
pub struct OrdersResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub orders: Vec<Order>,
}

/// `/user/trades` response
#[derive(Debug, Clone, Deserialize)]
pub struct TradesResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub trades: Vec<Trade>,
}

/// `/user/accounts` response
#[derive(Debug, Clone, Deserialize)]
pub struct AccountsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub accounts: Vec<Account>,
}
