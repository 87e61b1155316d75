//! REST API client for the CRIX.IO cryptocurrency exchange
//!
//! This crate provides a blocking client covering market data, account
//! queries and order execution.
//!
//! # Features
//!
//! - **Market Data**: Symbols, orderbook, 24h tickers, OHLCV candles
//! - **Account**: Balances, open/closed orders, own trades, rate history
//! - **Trading**: Place, cancel and look up orders
//!
//! # Authentication
//!
//! Private endpoints require an API token and secret. Every signed request
//! carries `X-Api-Signed-Token: <token>,<hex>` where `<hex>` is the
//! HMAC-SHA256 of the exact request body bytes.
//!
//! # Example
//!
//! ```no_run
//! use crix_rest::{ClientConfig, CrixClient, Credentials};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = CrixClient::new()?;
//!     let depth = client.fetch_order_book("BTC_USDT", None)?;
//!     println!("BTC/USDT spread: {:?}", depth.spread());
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let config = ClientConfig::new().with_environment("prod").with_credentials(creds);
//!     let auth_client = CrixClient::with_config(config)?;
//!     let balance = auth_client.fetch_balance()?;
//!     println!("Balances: {:?}", balance);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Multi-symbol calls
//!
//! `fetch_open_orders`, `fetch_closed_orders`, `fetch_orders` and
//! `fetch_my_trades` return a lazy [`Pages`] iterator. Requests are made
//! one symbol at a time as the iterator advances; the first failure is
//! yielded and ends the iteration.

pub mod client;
pub mod endpoints;
pub mod environment;
pub mod error;
pub mod gateway;
pub mod pages;
pub mod transport;

// Re-export main types
pub use client::{ClientConfig, CrixClient, OrderListing, DEFAULT_LIST_LIMIT};
pub use environment::Environment;
pub use error::{is_not_found, RestError, RestResult};
pub use gateway::Gateway;
pub use pages::Pages;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method, Transport};

// Re-export auth and record types
pub use crix_auth::{sign, AuthError, Credentials, SIGNED_TOKEN_HEADER};
pub use crix_types::{
    Account, Decimal, Depth, NewOrder, Offer, Order, OrderStatus, Resolution, Side, Symbol,
    Ticker, Ticker24, TimeInForce, Trade,
};
