//! Orders: placed orders and new order requests

use crate::enums::{OrderStatus, Side, TimeInForce};
use crate::serde_util::{decimal_or_zero, positive_millis_option};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order as reported by the exchange
///
/// `filled_quantity` never exceeds `quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Order {
    /// Exchange-assigned order id
    #[serde(rename = "orderId")]
    pub id: u64,
    #[serde(rename = "userId")]
    pub user_id: u64,
    #[serde(rename = "symbolName")]
    pub symbol_name: String,
    #[serde(rename = "isBuy")]
    pub is_buy: bool,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub quantity: Decimal,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub price: Decimal,
    #[serde(rename = "stopPrice", default, deserialize_with = "decimal_or_zero")]
    pub stop_price: Decimal,
    #[serde(rename = "filledQuantity", default, deserialize_with = "decimal_or_zero")]
    pub filled_quantity: Decimal,
    #[serde(rename = "timeInForce")]
    pub time_in_force: TimeInForce,
    /// Expiry for good-till-date orders
    #[serde(rename = "expireTime", default, deserialize_with = "positive_millis_option")]
    pub expire_time: Option<DateTime<Utc>>,
    pub status: OrderStatus,
}

impl Order {
    /// Order direction
    pub fn side(&self) -> Side {
        Side::from_is_buy(self.is_buy)
    }

    /// Quantity still waiting to be filled
    pub fn remaining_quantity(&self) -> Decimal {
        (self.quantity - self.filled_quantity).max(Decimal::ZERO)
    }

    /// True while the order rests on the book
    pub fn is_open(&self) -> bool {
        self.status == OrderStatus::New
    }
}

/// Order request to submit via `/user/order/create`
///
/// Serializes directly to the `req` payload. Prices and quantities are sent
/// as decimal strings; `stopPrice` and `expireTime` are omitted when unset.
///
/// # Example
///
/// ```
/// use crix_types::{NewOrder, Side, TimeInForce};
/// use rust_decimal::Decimal;
///
/// let order = NewOrder::limit("BTC_USDT", Side::Buy, Decimal::from(50000), Decimal::new(1, 3))
///     .with_time_in_force(TimeInForce::FillOrKill);
/// assert_eq!(order.symbol, "BTC_USDT");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewOrder {
    #[serde(rename = "isBuy")]
    pub is_buy: bool,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
    #[serde(rename = "symbolName")]
    pub symbol: String,
    #[serde(rename = "timeInForce")]
    pub time_in_force: TimeInForce,
    #[serde(
        rename = "stopPrice",
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub stop_price: Option<Decimal>,
    #[serde(
        rename = "expireTime",
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub expire_time: Option<DateTime<Utc>>,
}

impl NewOrder {
    /// Create a limit order (good till cancel)
    pub fn limit(symbol: impl Into<String>, side: Side, price: Decimal, quantity: Decimal) -> Self {
        Self {
            is_buy: side.is_buy(),
            price,
            quantity,
            symbol: symbol.into(),
            time_in_force: TimeInForce::GoodTillCancel,
            stop_price: None,
            expire_time: None,
        }
    }

    /// Create a market order
    ///
    /// Market orders are sent with a zero price and immediate-or-cancel.
    pub fn market(symbol: impl Into<String>, side: Side, quantity: Decimal) -> Self {
        Self {
            is_buy: side.is_buy(),
            price: Decimal::ZERO,
            quantity,
            symbol: symbol.into(),
            time_in_force: TimeInForce::ImmediateOrCancel,
            stop_price: None,
            expire_time: None,
        }
    }

    /// Set time in force
    pub fn with_time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = tif;
        self
    }

    /// Set a stop (trigger) price
    pub fn with_stop_price(mut self, stop_price: Decimal) -> Self {
        self.stop_price = Some(stop_price);
        self
    }

    /// Set an expiry; usually paired with [`TimeInForce::GoodTillDate`]
    pub fn with_expire_time(mut self, expire_time: DateTime<Utc>) -> Self {
        self.expire_time = Some(expire_time);
        self
    }

    /// Order direction
    pub fn side(&self) -> Side {
        Side::from_is_buy(self.is_buy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_order_parse() {
        let json = r#"{
            "orderId": 1001, "userId": 7, "symbolName": "BTC_USDT", "isBuy": true,
            "quantity": "1.5", "price": "50000", "stopPrice": null,
            "filledQuantity": "0.5", "timeInForce": 0, "expireTime": 0, "status": 0
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, 1001);
        assert_eq!(order.side(), Side::Buy);
        assert_eq!(order.stop_price, Decimal::ZERO);
        assert_eq!(order.remaining_quantity(), dec!(1.0));
        assert!(order.expire_time.is_none());
        assert!(order.is_open());
    }

    #[test]
    fn test_order_expire_time_in_millis() {
        let json = r#"{
            "orderId": 1, "userId": 1, "symbolName": "ETH_BTC", "isBuy": false,
            "quantity": "1", "price": "0.03", "filledQuantity": "1",
            "timeInForce": 3, "expireTime": 1546300800500, "status": 1
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.time_in_force, TimeInForce::GoodTillDate);
        assert_eq!(order.expire_time.unwrap().timestamp_millis(), 1_546_300_800_500);
        assert_eq!(order.status, OrderStatus::Complete);
        assert_eq!(order.remaining_quantity(), Decimal::ZERO);
    }

    #[test]
    fn test_new_order_omits_unset_fields() {
        let order = NewOrder::limit("BTC_USDT", Side::Sell, dec!(50000.10), dec!(0.001));
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(
            value,
            json!({
                "isBuy": false,
                "price": "50000.10",
                "quantity": "0.001",
                "symbolName": "BTC_USDT",
                "timeInForce": 0
            })
        );
    }

    #[test]
    fn test_new_order_includes_optional_fields() {
        let expire = DateTime::from_timestamp_millis(1_546_300_800_123).unwrap();
        let order = NewOrder::limit("BTC_USDT", Side::Buy, dec!(100), dec!(2))
            .with_stop_price(dec!(95.5))
            .with_expire_time(expire)
            .with_time_in_force(TimeInForce::GoodTillDate);
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["stopPrice"], json!("95.5"));
        assert_eq!(value["expireTime"], json!(1_546_300_800_123_i64));
        assert_eq!(value["timeInForce"], json!(3));
    }

    #[test]
    fn test_market_order_defaults() {
        let order = NewOrder::market("ETH_BTC", Side::Buy, dec!(3));
        assert_eq!(order.price, Decimal::ZERO);
        assert_eq!(order.time_in_force, TimeInForce::ImmediateOrCancel);
        assert_eq!(order.side(), Side::Buy);
    }
}
