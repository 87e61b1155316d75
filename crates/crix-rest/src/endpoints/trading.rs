//! Private trading endpoints
//!
//! These endpoints require authentication.

use super::{Envelope, OrderRef};
use crate::error::RestResult;
use crate::gateway::Gateway;
use crix_types::{NewOrder, Order};
use tracing::{info, instrument};

/// Private trading endpoints
pub struct TradingEndpoints<'a> {
    gateway: &'a Gateway,
}

impl<'a> TradingEndpoints<'a> {
    pub fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Place a new order
    #[instrument(skip(self, order), fields(symbol = %order.symbol, side = %order.side()))]
    pub fn create_order(&self, order: &NewOrder) -> RestResult<Order> {
        info!(
            "Placing {} order: {} {} @ {}",
            order.side(),
            order.quantity,
            order.symbol,
            order.price
        );
        let body = Envelope::new(order);
        self.gateway.post_as("create-order", "/user/order/create", &body, true)
    }

    /// Cancel an order
    ///
    /// Returns the order as it was at cancellation time.
    #[instrument(skip(self))]
    pub fn cancel_order(&self, order_id: u64, symbol: &str) -> RestResult<Order> {
        info!("Cancelling order {} on {}", order_id, symbol);
        let body = Envelope::new(OrderRef {
            order_id,
            symbol_name: symbol,
        });
        self.gateway.post_as("cancel-order", "/user/order/cancel", &body, true)
    }

    /// Get a single order
    #[instrument(skip(self))]
    pub fn order(&self, order_id: u64, symbol: &str) -> RestResult<Order> {
        let body = Envelope::new(OrderRef {
            order_id,
            symbol_name: symbol,
        });
        self.gateway.post_as("fetch-order", "/user/order/info", &body, true)
    }
}
