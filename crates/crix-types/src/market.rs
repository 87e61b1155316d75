//! Market data records: candles and orderbook snapshots

use crate::enums::Resolution;
use crate::serde_util::{decimal_or_zero, epoch_millis, epoch_seconds, null_as_default};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// OHLCV candle for a symbol at a resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticker {
    #[serde(rename = "symbolName")]
    pub symbol_name: String,
    /// Candle open time (epoch milliseconds on the wire)
    #[serde(
        rename = "openTime",
        serialize_with = "chrono::serde::ts_milliseconds::serialize",
        deserialize_with = "epoch_millis"
    )]
    pub open_time: DateTime<Utc>,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub open: Decimal,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub close: Decimal,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub high: Decimal,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub low: Decimal,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub volume: Decimal,
    pub resolution: Resolution,
}

impl Ticker {
    /// Close minus open
    pub fn change(&self) -> Decimal {
        self.close - self.open
    }

    /// True if the candle closed above its open
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }
}

/// 24 hour ticker: a candle extended with rolling statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticker24 {
    #[serde(rename = "symbolName")]
    pub symbol_name: String,
    #[serde(
        rename = "openTime",
        serialize_with = "chrono::serde::ts_milliseconds::serialize",
        deserialize_with = "epoch_millis"
    )]
    pub open_time: DateTime<Utc>,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub open: Decimal,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub close: Decimal,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub high: Decimal,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub low: Decimal,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub volume: Decimal,
    pub resolution: Resolution,
    /// First trade id inside the window
    #[serde(rename = "firstId", default, deserialize_with = "null_as_default")]
    pub first_id: u64,
    /// Last trade id inside the window
    #[serde(rename = "lastId", default, deserialize_with = "null_as_default")]
    pub last_id: u64,
    #[serde(rename = "prevClosePrice", default, deserialize_with = "decimal_or_zero")]
    pub prev_close_price: Decimal,
    #[serde(rename = "priceChange", default, deserialize_with = "decimal_or_zero")]
    pub price_change: Decimal,
    #[serde(rename = "priceChangePercent", default, deserialize_with = "decimal_or_zero")]
    pub price_change_percent: Decimal,
}

impl Ticker24 {
    /// Drop the 24h statistics and keep the plain candle
    pub fn as_ticker(&self) -> Ticker {
        Ticker {
            symbol_name: self.symbol_name.clone(),
            open_time: self.open_time,
            open: self.open,
            close: self.close,
            high: self.high,
            low: self.low,
            volume: self.volume,
            resolution: self.resolution,
        }
    }
}

/// Wire shape of a `/user/rates/history` point
///
/// Prices arrive as JSON numbers and the timestamp is in epoch **seconds**.
/// Convert with [`Ticker::from`].
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryTicker {
    pub currency: String,
    #[serde(deserialize_with = "epoch_seconds")]
    pub timestamp: DateTime<Utc>,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub open: Decimal,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub close: Decimal,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub high: Decimal,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub low: Decimal,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub volume: Decimal,
}

impl From<HistoryTicker> for Ticker {
    /// History points carry no resolution; they are tagged as daily.
    fn from(point: HistoryTicker) -> Self {
        Ticker {
            symbol_name: point.currency,
            open_time: point.timestamp,
            open: point.open,
            close: point.close,
            high: point.high,
            low: point.low,
            volume: point.volume,
            resolution: Resolution::Day,
        }
    }
}

/// A single aggregated price level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    /// Number of orders at this level
    #[serde(rename = "c", default, deserialize_with = "null_as_default")]
    pub count: u32,
    #[serde(rename = "p", default, deserialize_with = "decimal_or_zero")]
    pub price: Decimal,
    #[serde(rename = "q", default, deserialize_with = "decimal_or_zero")]
    pub quantity: Decimal,
}

impl Offer {
    /// Price times quantity
    pub fn notional(&self) -> Decimal {
        self.price * self.quantity
    }
}

/// Orderbook snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Depth {
    #[serde(rename = "symbolName")]
    pub symbol_name: String,
    #[serde(rename = "aggregated", default)]
    pub is_aggregated: bool,
    #[serde(rename = "lastUpdateId", default, deserialize_with = "null_as_default")]
    pub last_update_id: u64,
    #[serde(rename = "levelAggregation", default, deserialize_with = "null_as_default")]
    pub level_aggregation: u32,
    /// Ask levels, best (lowest) first
    #[serde(default, deserialize_with = "null_as_default")]
    pub asks: Vec<Offer>,
    /// Bid levels, best (highest) first
    #[serde(default, deserialize_with = "null_as_default")]
    pub bids: Vec<Offer>,
}

impl Depth {
    /// Get the best ask price
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.first().map(|offer| offer.price)
    }

    /// Get the best bid price
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.first().map(|offer| offer.price)
    }

    /// Get the spread
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask()? - self.best_bid()?)
    }

    /// Get the mid price (average of best bid and best ask)
    pub fn mid_price(&self) -> Option<Decimal> {
        Some((self.best_ask()? + self.best_bid()?) / Decimal::TWO)
    }
}
