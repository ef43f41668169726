/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::Serialize;

use super::enums::{OrderStatus, OrderType, SortDirection};
use super::market::MarketId;

/// Body of `POST /order`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceOrderRequest {
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub market: MarketId,
    #[serde(serialize_with = "serde_helpers::serialize_decimal_number")]
    pub amount: Decimal,
    #[serde(serialize_with = "serde_helpers::serialize_decimal_number")]
    pub rate: Decimal,
}

/// Filters for `GET /user/me/orders`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientOrdersQuery {
    pub market: Option<MarketId>,
    pub order_type: Option<OrderType>,
    pub statuses: Vec<OrderStatus>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub dir: Option<SortDirection>,
}

impl ClientOrdersQuery {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_market(mut self, market: MarketId) -> Self {
        self.market = Some(market);
        self
    }

    #[must_use]
    pub fn with_order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = Some(order_type);
        self
    }

    #[must_use]
    pub fn with_statuses(mut self, statuses: impl IntoIterator<Item = OrderStatus>) -> Self {
        self.statuses = statuses.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn with_dir(mut self, dir: SortDirection) -> Self {
        self.dir = Some(dir);
        self
    }
}

mod serde_helpers {
    use rust_decimal::Decimal;
    use serde::ser::Error as _;
    use serde::{Serialize, Serializer};
    use serde_json::value::RawValue;

    /// JSON number written digit for digit from the decimal, no trailing zeros
    pub fn serialize_decimal_number<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let digits = value.normalize().to_string();
        let raw = RawValue::from_string(digits).map_err(S::Error::custom)?;
        raw.serialize(serializer)
    }
}
