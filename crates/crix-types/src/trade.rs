//! Executed trades

use crate::enums::Side;
use crate::serde_util::{decimal_or_zero, epoch_millis, null_as_default};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Executed fill as seen by the requesting user
///
/// Both counterparties are described (`buy_*` / `sell_*`), followed by the
/// fields specific to the requesting user's side of the fill.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Trade {
    pub id: u64,
    #[serde(rename = "createdAt", deserialize_with = "epoch_millis")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "buyUserId")]
    pub buy_user_id: u64,
    #[serde(rename = "buyOrderId")]
    pub buy_order_id: u64,
    #[serde(rename = "buyOrderFilled")]
    pub is_buy_order_filled: bool,
    #[serde(rename = "sellUserId")]
    pub sell_user_id: u64,
    #[serde(rename = "sellOrderId")]
    pub sell_order_id: u64,
    #[serde(rename = "sellOrderFilled")]
    pub is_sell_order_filled: bool,

    // Requesting user's perspective
    #[serde(rename = "isBuy")]
    pub is_buy: bool,
    #[serde(rename = "orderId")]
    pub order_id: u64,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub price: Decimal,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub quantity: Decimal,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub fee: Decimal,
    #[serde(rename = "feeCurrency", default, deserialize_with = "null_as_default")]
    pub fee_currency: String,
    #[serde(rename = "symbolName")]
    pub symbol_name: String,
}

impl Trade {
    /// Direction of the requesting user's side
    pub fn side(&self) -> Side {
        Side::from_is_buy(self.is_buy)
    }

    /// Price times quantity
    pub fn notional(&self) -> Decimal {
        self.price * self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_trade_parse() {
        let json = r#"{
            "id": 555, "createdAt": 1546300800250,
            "buyUserId": 1, "buyOrderId": 10, "buyOrderFilled": true,
            "sellUserId": 2, "sellOrderId": 20, "sellOrderFilled": false,
            "isBuy": true, "orderId": 10, "price": "50000", "quantity": "0.01",
            "fee": null, "feeCurrency": "BTC", "symbolName": "BTC_USDT"
        }"#;
        let trade: Trade = serde_json::from_str(json).unwrap();
        assert_eq!(trade.id, 555);
        assert_eq!(trade.created_at.timestamp_millis(), 1_546_300_800_250);
        assert!(trade.is_buy_order_filled);
        assert!(!trade.is_sell_order_filled);
        assert_eq!(trade.fee, Decimal::ZERO);
        assert_eq!(trade.side(), Side::Buy);
        assert_eq!(trade.notional(), dec!(500));
    }

    #[test]
    fn test_trade_null_and_missing_amounts_are_zero() {
        let json = r#"{
            "id": 556, "createdAt": 1546300800250.75,
            "buyUserId": 1, "buyOrderId": 10, "buyOrderFilled": false,
            "sellUserId": 2, "sellOrderId": 20, "sellOrderFilled": true,
            "isBuy": false, "orderId": 20, "price": null,
            "feeCurrency": null, "symbolName": "BTC_USDT"
        }"#;
        let trade: Trade = serde_json::from_str(json).unwrap();
        assert_eq!(trade.price, Decimal::ZERO);
        assert_eq!(trade.quantity, Decimal::ZERO);
        assert_eq!(trade.notional(), Decimal::ZERO);
        assert_eq!(trade.created_at.timestamp_millis(), 1_546_300_800_250);
        assert_eq!(trade.created_at.timestamp_subsec_nanos(), 250_750_000);
        assert_eq!(trade.side(), Side::Sell);
    }
}
