/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::http::Bitmarket24Error;

/// Side of an order: `bid` buys, `ask` sells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Bid,
    Ask,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Bid => "bid",
            OrderType::Ask => "ask",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    New,
    Active,
    Inactive,
    Filled,
    #[serde(alias = "canceled")]
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Active => "active",
            OrderStatus::Inactive => "inactive",
            OrderStatus::Filled => "filled",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

/// Sort direction for paginated listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = Bitmarket24Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bid" | "buy" => Ok(OrderType::Bid),
            "ask" | "sell" => Ok(OrderType::Ask),
            other => Err(invalid("order type", other, "bid|ask")),
        }
    }
}

impl FromStr for OrderStatus {
    type Err = Bitmarket24Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "new" => Ok(OrderStatus::New),
            "active" => Ok(OrderStatus::Active),
            "inactive" => Ok(OrderStatus::Inactive),
            "filled" => Ok(OrderStatus::Filled),
            "cancelled" | "canceled" => Ok(OrderStatus::Cancelled),
            other => Err(invalid(
                "order status",
                other,
                "new|active|inactive|filled|cancelled",
            )),
        }
    }
}

impl FromStr for SortDirection {
    type Err = Bitmarket24Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(invalid("sort direction", other, "asc|desc")),
        }
    }
}

fn invalid(what: &str, value: &str, expected: &str) -> Bitmarket24Error {
    Bitmarket24Error::Configuration(format!("invalid {what} `{value}`; expected one of: {expected}"))
}
