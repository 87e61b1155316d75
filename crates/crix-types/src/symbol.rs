//! Trading pair metadata

use crate::serde_util::{decimal_or_zero, null_as_default};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Trading pair symbol with the exchange's trading rules
///
/// Returned by `/info/symbols`. Precisions are non-negative digit counts;
/// fees and size bounds are non-negative decimals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    /// Symbol name as used in requests (e.g. "BTC_USDT")
    #[serde(rename = "symbolName")]
    pub name: String,
    /// Base currency code
    pub base: String,
    /// Digits after the point for base amounts
    #[serde(rename = "basePrecision")]
    pub base_precision: u32,
    /// Quote currency code
    pub quote: String,
    /// Digits after the point for quote amounts
    #[serde(rename = "quotePrecision")]
    pub quote_precision: u32,
    /// Human readable description
    #[serde(rename = "desc", default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Supported orderbook aggregation levels
    #[serde(
        rename = "levelAggregation",
        default,
        deserialize_with = "null_as_default"
    )]
    pub level_aggregation: Vec<u32>,
    #[serde(rename = "makerFee", default, deserialize_with = "decimal_or_zero")]
    pub maker_fee: Decimal,
    #[serde(rename = "takerFee", default, deserialize_with = "decimal_or_zero")]
    pub taker_fee: Decimal,
    #[serde(rename = "minLot", default, deserialize_with = "decimal_or_zero")]
    pub min_lot: Decimal,
    #[serde(rename = "maxLot", default, deserialize_with = "decimal_or_zero")]
    pub max_lot: Decimal,
    #[serde(rename = "minPrice", default, deserialize_with = "decimal_or_zero")]
    pub min_price: Decimal,
    #[serde(rename = "maxPrice", default, deserialize_with = "decimal_or_zero")]
    pub max_price: Decimal,
    #[serde(rename = "minNotional", default, deserialize_with = "decimal_or_zero")]
    pub min_notional: Decimal,
    #[serde(rename = "tickLot", default, deserialize_with = "decimal_or_zero")]
    pub tick_lot: Decimal,
    #[serde(rename = "tickPrice", default, deserialize_with = "decimal_or_zero")]
    pub tick_price: Decimal,
    /// Trading currently enabled
    #[serde(rename = "trading")]
    pub is_trading: bool,
}

impl Symbol {
    /// Currency code in lowercase `base_quote` form (e.g. "btc_usdt")
    pub fn currency_code(&self) -> String {
        format!("{}_{}", self.base, self.quote).to_lowercase()
    }

    /// Round a price down to the symbol's tick size
    ///
    /// Returns the price unchanged when the tick size is zero or the
    /// division overflows.
    pub fn round_price(&self, price: Decimal) -> Decimal {
        round_to_tick(price, self.tick_price)
    }

    /// Round a quantity down to the symbol's lot tick
    pub fn round_quantity(&self, quantity: Decimal) -> Decimal {
        round_to_tick(quantity, self.tick_lot)
    }
}

fn round_to_tick(value: Decimal, tick: Decimal) -> Decimal {
    value
        .checked_div(tick)
        .and_then(|steps| steps.floor().checked_mul(tick))
        .unwrap_or(value)
}
