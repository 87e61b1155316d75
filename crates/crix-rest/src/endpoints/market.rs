//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use super::Envelope;
use crate::error::RestResult;
use crate::gateway::Gateway;
use chrono::{DateTime, Utc};
use crix_types::{Depth, OhlcResponse, Resolution, Symbol, SymbolsResponse, Ticker, Ticker24, Tickers24Response};
use serde::Serialize;
use tracing::{debug, instrument};

/// Default number of candles per `/klines` request
pub const DEFAULT_OHLCV_LIMIT: u32 = 10;

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    gateway: &'a Gateway,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Get all symbols listed on the exchange
    #[instrument(skip(self))]
    pub fn symbols(&self) -> RestResult<Vec<Symbol>> {
        let response: SymbolsResponse = self.gateway.get_as("fetch-markets", "/info/symbols")?;
        debug!("Fetched {} symbols", response.symbol.len());
        Ok(response.symbol)
    }

    /// Get orderbook depth
    ///
    /// # Arguments
    /// * `symbol` - Symbol name (e.g., "BTC_USDT")
    /// * `level_aggregation` - Aggregate levels by rounding (none if `None`)
    #[instrument(skip(self))]
    pub fn order_book(&self, symbol: &str, level_aggregation: Option<u32>) -> RestResult<Depth> {
        let body = Envelope::new(DepthRequest {
            symbol_name: symbol,
            level_aggregation,
        });
        debug!("Fetching orderbook for {}", symbol);
        self.gateway.post_as("fetch-order-book", "/depths", &body, false)
    }

    /// Get 24 hour tickers for all symbols
    #[instrument(skip(self))]
    pub fn tickers24(&self) -> RestResult<Vec<Ticker24>> {
        let response: Tickers24Response = self.gateway.get_as("ticker", "/tickers24")?;
        Ok(response.ohlc)
    }

    /// Get OHLCV candles for a symbol in a time frame
    #[instrument(skip(self), fields(symbol = %query.symbol))]
    pub fn ohlcv(&self, query: &OhlcvQuery) -> RestResult<Vec<Ticker>> {
        let body = Envelope::new(KlinesRequest {
            start_time: query.start.timestamp_millis(),
            end_time: query.end.timestamp_millis(),
            symbol_name: &query.symbol,
            resolution: query.resolution,
            limit: query.limit,
        });
        debug!(
            "Fetching {} candles for {} at resolution {}",
            query.limit, query.symbol, query.resolution
        );
        let response: OhlcResponse = self.gateway.post_as("fetch-ohlcv", "/klines", &body, false)?;
        Ok(response.ohlc)
    }
}

/// Candle query for `/klines`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OhlcvQuery {
    pub symbol: String,
    /// Earliest candle time
    pub start: DateTime<Utc>,
    /// Latest candle time
    pub end: DateTime<Utc>,
    pub resolution: Resolution,
    /// Maximum number of candles
    pub limit: u32,
}

impl OhlcvQuery {
    /// One-minute candles, at most [`DEFAULT_OHLCV_LIMIT`]
    pub fn new(symbol: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            symbol: symbol.into(),
            start,
            end,
            resolution: Resolution::default(),
            limit: DEFAULT_OHLCV_LIMIT,
        }
    }

    /// Set the candle resolution
    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    /// Set the maximum number of candles
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DepthRequest<'a> {
    symbol_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    level_aggregation: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct KlinesRequest<'a> {
    start_time: i64,
    end_time: i64,
    symbol_name: &'a str,
    resolution: Resolution,
    limit: u32,
}
