//! Side, Resolution, TimeInForce, and OrderStatus enums

use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order direction
///
/// The exchange encodes direction as an `isBuy` flag; this enum is the typed
/// view of that flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl Side {
    /// Build a side from the wire `isBuy` flag
    pub fn from_is_buy(is_buy: bool) -> Self {
        if is_buy {
            Self::Buy
        } else {
            Self::Sell
        }
    }

    /// Returns true for [`Side::Buy`]
    pub fn is_buy(&self) -> bool {
        matches!(self, Self::Buy)
    }

    /// Returns the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// Candle resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Resolution {
    /// 1 minute
    #[serde(rename = "1")]
    #[default]
    OneMinute,
    /// 5 minutes
    #[serde(rename = "5")]
    FiveMinutes,
    /// 15 minutes
    #[serde(rename = "15")]
    FifteenMinutes,
    /// 30 minutes
    #[serde(rename = "30")]
    HalfAnHour,
    /// 1 hour
    #[serde(rename = "60")]
    Hour,
    /// 2 hours
    #[serde(rename = "120")]
    TwoHours,
    /// 4 hours
    #[serde(rename = "240")]
    FourHours,
    /// 1 day
    #[serde(rename = "D")]
    Day,
    /// 1 week
    #[serde(rename = "W")]
    Week,
}

impl Resolution {
    /// Returns the resolution as used in API messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneMinute => "1",
            Self::FiveMinutes => "5",
            Self::FifteenMinutes => "15",
            Self::HalfAnHour => "30",
            Self::Hour => "60",
            Self::TwoHours => "120",
            Self::FourHours => "240",
            Self::Day => "D",
            Self::Week => "W",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resolution {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Self::OneMinute),
            "5" => Ok(Self::FiveMinutes),
            "15" => Ok(Self::FifteenMinutes),
            "30" => Ok(Self::HalfAnHour),
            "60" => Ok(Self::Hour),
            "120" => Ok(Self::TwoHours),
            "240" => Ok(Self::FourHours),
            "D" => Ok(Self::Day),
            "W" => Ok(Self::Week),
            other => Err(TypesError::UnknownResolution(other.to_string())),
        }
    }
}

/// Order lifetime policy
///
/// Encoded as an integer on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum TimeInForce {
    /// Good till cancelled
    #[default]
    GoodTillCancel = 0,
    /// Immediate or cancel
    ImmediateOrCancel = 1,
    /// Fill or kill
    FillOrKill = 2,
    /// Good till date (requires an expire time)
    GoodTillDate = 3,
}

impl TryFrom<u8> for TimeInForce {
    type Error = TypesError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::GoodTillCancel),
            1 => Ok(Self::ImmediateOrCancel),
            2 => Ok(Self::FillOrKill),
            3 => Ok(Self::GoodTillDate),
            other => Err(TypesError::UnknownTimeInForce(other)),
        }
    }
}

impl From<TimeInForce> for u8 {
    fn from(tif: TimeInForce) -> Self {
        tif as u8
    }
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GoodTillCancel => write!(f, "GTC"),
            Self::ImmediateOrCancel => write!(f, "IOC"),
            Self::FillOrKill => write!(f, "FOK"),
            Self::GoodTillDate => write!(f, "GTD"),
        }
    }
}

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum OrderStatus {
    /// Resting on the book
    New = 0,
    /// Fully filled
    Complete = 1,
    /// Cancelled (possibly partially filled)
    Cancel = 2,
}

impl TryFrom<u8> for OrderStatus {
    type Error = TypesError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::New),
            1 => Ok(Self::Complete),
            2 => Ok(Self::Cancel),
            other => Err(TypesError::UnknownOrderStatus(other)),
        }
    }
}

impl From<OrderStatus> for u8 {
    fn from(status: OrderStatus) -> Self {
        status as u8
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::Complete => write!(f, "complete"),
            Self::Cancel => write!(f, "cancel"),
        }
    }
}
