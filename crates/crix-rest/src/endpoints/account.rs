//! Private account endpoints
//!
//! These endpoints require authentication.

use super::{Envelope, SymbolListing};
use crate::error::RestResult;
use crate::gateway::Gateway;
use chrono::{DateTime, Utc};
use crix_types::{Account, AccountsResponse, HistoryTicker, Order, OrdersResponse, Ticker, Trade, TradesResponse};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, instrument};

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    gateway: &'a Gateway,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Get open orders for one symbol
    ///
    /// # Arguments
    /// * `symbol` - Symbol name (e.g., "BTC_USDT")
    /// * `limit` - Maximum number of orders returned
    #[instrument(skip(self))]
    pub fn open_orders(&self, symbol: &str, limit: u32) -> RestResult<Vec<Order>> {
        self.orders("fetch-open-orders", "/user/orders/open", symbol, limit)
    }

    /// Get completed and cancelled orders for one symbol
    #[instrument(skip(self))]
    pub fn closed_orders(&self, symbol: &str, limit: u32) -> RestResult<Vec<Order>> {
        self.orders("fetch-closed-orders", "/user/orders/complete", symbol, limit)
    }

    fn orders(&self, operation: &str, path: &str, symbol: &str, limit: u32) -> RestResult<Vec<Order>> {
        let body = Envelope::new(SymbolListing {
            limit,
            symbol_name: symbol,
        });
        let response: OrdersResponse = self.gateway.post_as(operation, path, &body, true)?;
        debug!("{} returned {} orders for {}", operation, response.orders.len(), symbol);
        Ok(response.orders)
    }

    /// Get own trades for one symbol
    #[instrument(skip(self))]
    pub fn trades(&self, symbol: &str, limit: u32) -> RestResult<Vec<Trade>> {
        let body = Envelope::new(SymbolListing {
            limit,
            symbol_name: symbol,
        });
        let response: TradesResponse =
            self.gateway.post_as("fetch-my-trades", "/user/trades", &body, true)?;
        debug!("Fetched {} trades for {}", response.trades.len(), symbol);
        Ok(response.trades)
    }

    /// Get all currency accounts
    ///
    /// The request body is an empty JSON object, signed like any other.
    #[instrument(skip(self))]
    pub fn balances(&self) -> RestResult<Vec<Account>> {
        let response: AccountsResponse =
            self.gateway.post_as("fetch-balance", "/user/accounts", &json!({}), true)?;
        Ok(response.accounts)
    }

    /// Get daily rate history for a currency
    ///
    /// # Arguments
    /// * `begin` - Start of the range (sent in epoch seconds)
    /// * `end` - End of the range (sent in epoch seconds)
    /// * `currency` - Currency code (e.g., "BTC")
    #[instrument(skip(self))]
    pub fn history(
        &self,
        begin: DateTime<Utc>,
        end: DateTime<Utc>,
        currency: &str,
    ) -> RestResult<Vec<Ticker>> {
        let body = Envelope::new(HistoryRequest {
            currency,
            from_timestamp: begin.timestamp(),
            to_timestamp: end.timestamp(),
        });
        let points: Vec<HistoryTicker> =
            self.gateway
                .post_as("fetch-history", "/user/rates/history", &body, true)?;
        Ok(points.into_iter().map(Ticker::from).collect())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HistoryRequest<'a> {
    currency: &'a str,
    from_timestamp: i64,
    to_timestamp: i64,
}
