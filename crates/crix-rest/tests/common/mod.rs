//! Common test utilities and fixtures for integration tests
//!
//! Contains sample JSON bodies in the shape returned by the CRIX.IO API

#![allow(dead_code)]

use crix_rest::{
    ClientConfig, CrixClient, Credentials, HttpRequest, HttpResponse, RestError, RestResult,
    Transport,
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

pub const TEST_TOKEN: &str = "test-token";
pub const TEST_SECRET: &str = "test-secret";

/// Base URL of the default ("mvp") environment
pub const MVP_BASE_URL: &str = "https://mvp.crix.io/api/v1";

#[derive(Default)]
struct MockState {
    responses: VecDeque<HttpResponse>,
    requests: Vec<HttpRequest>,
}

/// In-memory transport replaying queued responses and recording requests
///
/// Clones share state: keep one clone for assertions and hand another to
/// the client.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Rc<RefCell<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response
    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.state.borrow_mut().responses.push_back(HttpResponse {
            status,
            body: body.to_string(),
        });
        self
    }

    /// Queue a 200 response
    pub fn ok(&self, body: &str) -> &Self {
        self.respond(200, body)
    }

    /// All requests sent so far
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state.borrow().requests.clone()
    }

    /// Number of requests sent so far
    pub fn request_count(&self) -> usize {
        self.state.borrow().requests.len()
    }

    /// Most recent request
    pub fn last_request(&self) -> HttpRequest {
        self.state
            .borrow()
            .requests
            .last()
            .cloned()
            .expect("No request was sent")
    }

    /// Decoded JSON body of the request at `index`
    pub fn request_json(&self, index: usize) -> serde_json::Value {
        let state = self.state.borrow();
        let body = state.requests[index].body.as_deref().expect("Request has no body");
        serde_json::from_slice(body)
            .expect("Request body is not JSON")
    }
}

impl Transport for MockTransport {
    fn execute(&self, request: &HttpRequest) -> RestResult<HttpResponse> {
        let mut state = self.state.borrow_mut();
        state.requests.push(request.clone());
        state
            .responses
            .pop_front()
            .ok_or_else(|| RestError::Transport(format!("no response queued for {}", request.url)))
    }
}

/// Client without credentials on the mock transport
pub fn public_client(mock: &MockTransport) -> CrixClient {
    CrixClient::with_transport(ClientConfig::new(), Box::new(mock.clone()))
}

/// Client with test credentials on the mock transport
pub fn private_client(mock: &MockTransport) -> CrixClient {
    private_client_with(mock, ClientConfig::new())
}

/// Client with test credentials and a custom configuration
pub fn private_client_with(mock: &MockTransport, config: ClientConfig) -> CrixClient {
    let credentials = Credentials::new(TEST_TOKEN, TEST_SECRET).expect("Invalid test credentials");
    CrixClient::with_transport(config.with_credentials(credentials), Box::new(mock.clone()))
}

/// `/info/symbols` with two markets
pub const SYMBOLS_RESPONSE: &str = r#"{
    "symbol": [
        {
            "symbolName": "BTC_USDT",
            "base": "BTC",
            "basePrecision": 8,
            "quote": "USDT",
            "quotePrecision": 2,
            "desc": "Bitcoin / Tether",
            "levelAggregation": [1, 10, 100],
            "makerFee": "0.001",
            "takerFee": "0.002",
            "minLot": "0.0001",
            "maxLot": "100",
            "minPrice": "0.01",
            "maxPrice": "1000000",
            "minNotional": "10",
            "tickLot": "0.0001",
            "tickPrice": "0.01",
            "trading": true
        },
        {
            "symbolName": "ETH_BTC",
            "base": "ETH",
            "basePrecision": 8,
            "quote": "BTC",
            "quotePrecision": 8,
            "desc": null,
            "levelAggregation": null,
            "makerFee": 0.001,
            "takerFee": 0.002,
            "minLot": "0.001",
            "maxLot": "1000",
            "minPrice": "0.000001",
            "maxPrice": "10",
            "minNotional": null,
            "tickLot": "0.001",
            "tickPrice": "0.000001",
            "trading": false
        }
    ]
}"#;

/// `/info/symbols` after a listing change
pub const SYMBOLS_REFRESHED_RESPONSE: &str = r#"{
    "symbol": [
        {
            "symbolName": "LTC_BTC",
            "base": "LTC",
            "basePrecision": 8,
            "quote": "BTC",
            "quotePrecision": 8,
            "trading": true
        }
    ]
}"#;

pub const DEPTH_RESPONSE: &str = r#"{
    "symbolName": "BTC_USDT",
    "aggregated": true,
    "lastUpdateId": 91823,
    "levelAggregation": 10,
    "asks": [
        {"c": 2, "p": "50010", "q": "0.5"},
        {"c": 1, "p": "50020", "q": "1.25"}
    ],
    "bids": [
        {"c": 4, "p": "49990", "q": "0.75"}
    ]
}"#;

pub const TICKERS24_RESPONSE: &str = r#"{
    "ohlc": [
        {
            "symbolName": "BTC_USDT",
            "openTime": 1546300800000,
            "open": "3700",
            "close": "3800",
            "high": "3850",
            "low": "3650",
            "volume": "1234.5",
            "resolution": "D",
            "firstId": 100,
            "lastId": 900,
            "prevClosePrice": "3690",
            "priceChange": "100",
            "priceChangePercent": "2.7"
        }
    ]
}"#;

pub const KLINES_RESPONSE: &str = r#"{
    "ohlc": [
        {
            "symbolName": "BTC_USDT",
            "openTime": 1546300800000,
            "open": "3700",
            "close": "3701.5",
            "high": "3702",
            "low": "3699",
            "volume": "3.2",
            "resolution": "5"
        },
        {
            "symbolName": "BTC_USDT",
            "openTime": 1546301100000,
            "open": "3701.5",
            "close": "3699",
            "high": "3703",
            "low": "3698",
            "volume": null,
            "resolution": "5"
        }
    ]
}"#;

/// An open order whose optional numeric fields are missing or null
pub const OPEN_ORDERS_RESPONSE: &str = r#"{
    "orders": [
        {
            "orderId": 1001,
            "userId": 7,
            "symbolName": "BTC_USDT",
            "isBuy": true,
            "quantity": "0.5",
            "price": "49000",
            "stopPrice": null,
            "timeInForce": 0,
            "expireTime": 0,
            "status": 0
        }
    ]
}"#;

pub const CLOSED_ORDERS_RESPONSE: &str = r#"{
    "orders": [
        {
            "orderId": 990,
            "userId": 7,
            "symbolName": "BTC_USDT",
            "isBuy": false,
            "quantity": "1",
            "price": "51000",
            "stopPrice": "0",
            "filledQuantity": "1",
            "timeInForce": 1,
            "expireTime": null,
            "status": 1
        }
    ]
}"#;

pub const EMPTY_ORDERS_RESPONSE: &str = r#"{"orders": null}"#;

pub const TRADES_RESPONSE: &str = r#"{
    "trades": [
        {
            "id": 31337,
            "createdAt": 1546300800250,
            "buyUserId": 7,
            "buyOrderId": 1001,
            "buyOrderFilled": true,
            "sellUserId": 8,
            "sellOrderId": 2002,
            "sellOrderFilled": false,
            "isBuy": true,
            "orderId": 1001,
            "price": "49000",
            "quantity": "0.1",
            "fee": "0.0001",
            "feeCurrency": "BTC",
            "symbolName": "BTC_USDT"
        }
    ]
}"#;

pub const ACCOUNTS_RESPONSE: &str = r#"{
    "accounts": [
        {
            "id": 1,
            "userId": 7,
            "balance": "1.5",
            "lockedBalance": "0.5",
            "currencyName": "BTC",
            "depositAddress": "1BoatSLRHtKNngkdXEeobR76b53LETtpyT"
        },
        {
            "id": 2,
            "userId": 7,
            "balance": "250.75",
            "lockedBalance": null,
            "currencyName": "USDT",
            "depositAddress": null
        }
    ]
}"#;

/// Single order body returned by create, cancel and info
pub const ORDER_RESPONSE: &str = r#"{
    "orderId": 1002,
    "userId": 7,
    "symbolName": "BTC_USDT",
    "isBuy": true,
    "quantity": "0.25",
    "price": "48000",
    "stopPrice": null,
    "filledQuantity": "0.05",
    "timeInForce": 3,
    "expireTime": 1546387200000,
    "status": 0
}"#;

/// `/user/rates/history` returns a bare array with epoch-second timestamps
pub const HISTORY_RESPONSE: &str = r#"[
    {"currency": "BTC", "timestamp": 1546300800, "open": 3700.5, "close": 3701, "high": 3702.25, "low": 3699, "volume": 12.5},
    {"currency": "BTC", "timestamp": 1546300860, "open": 3701, "close": 3700, "high": 3701.5, "low": 3699.5, "volume": 0}
]"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crix_rest::Method;

    #[test]
    fn test_mock_replays_in_order() {
        let mock = MockTransport::new();
        mock.ok("first").respond(500, "second");

        let request = HttpRequest {
            method: Method::Get,
            url: "https://mvp.crix.io/api/v1/x".to_string(),
            headers: Vec::new(),
            body: None,
        };

        assert_eq!(mock.execute(&request).unwrap().body, "first");
        assert_eq!(mock.execute(&request).unwrap().status, 500);
        assert!(matches!(mock.execute(&request), Err(RestError::Transport(_))));
        assert_eq!(mock.request_count(), 3);
    }
}
