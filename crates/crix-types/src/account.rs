//! Per-currency balances

use crate::serde_util::{decimal_or_zero, null_as_default};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Balance snapshot for one currency
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Account {
    pub id: u64,
    #[serde(rename = "userId")]
    pub user_id: u64,
    /// Available balance
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub balance: Decimal,
    /// Balance reserved by open orders
    #[serde(rename = "lockedBalance", default, deserialize_with = "decimal_or_zero")]
    pub locked_balance: Decimal,
    #[serde(rename = "currencyName")]
    pub currency_name: String,
    #[serde(rename = "depositAddress", default, deserialize_with = "null_as_default")]
    pub deposit_address: String,
}

impl Account {
    /// Available plus locked
    pub fn total_balance(&self) -> Decimal {
        self.balance + self.locked_balance
    }

    /// True if nothing is held in this currency
    pub fn is_empty(&self) -> bool {
        self.total_balance().is_zero()
    }
}
