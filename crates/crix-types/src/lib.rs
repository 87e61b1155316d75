//! Shared record types for the CRIX.IO REST API
//!
//! This crate provides the typed records returned by the exchange, together
//! with the serde helpers that map the wire format onto them. It performs no
//! I/O and can be used independently of the HTTP client.
//!
//! # Key Types
//!
//! - [`Symbol`] - Trading pair metadata and trading rules
//! - [`Ticker`], [`Ticker24`] - OHLCV candles, optionally with 24h statistics
//! - [`Depth`], [`Offer`] - Orderbook snapshots
//! - [`Order`], [`NewOrder`] - Placed orders and order requests
//! - [`Trade`] - Executed fills
//! - [`Account`] - Per-currency balances
//! - [`Side`], [`Resolution`], [`TimeInForce`], [`OrderStatus`] - Wire enums
//!
//! All prices, quantities and fees are [`Decimal`]; binary floating point is
//! never used for financial values.

pub mod account;
pub mod enums;
pub mod error;
pub mod market;
pub mod order;
pub mod responses;
pub mod serde_util;
pub mod symbol;
pub mod trade;

// Re-export commonly used types
pub use account::*;
pub use enums::*;
pub use error::*;
pub use market::*;
pub use order::*;
pub use responses::*;
pub use symbol::*;
pub use trade::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
