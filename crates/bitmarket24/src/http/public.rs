/*
[INPUT]:  Market identifiers
[OUTPUT]: Market data (status document, order book)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use crate::http::{Bitmarket24Client, QueryParams, Result};
use crate::types::MarketId;
use reqwest::Method;
use serde_json::Value;

impl Bitmarket24Client {
    /// Query the market status document
    ///
    /// GET https://bitmarket24.pl/api/{MARKET}/status.json
    pub async fn get_market_status(&self, market: Option<&MarketId>) -> Result<Value> {
        let market = self.resolve_market(market)?;
        let builder = self.status_request(&market)?;
        self.send_json(builder).await
    }

    /// Query the order book
    ///
    /// GET /public/orderbook?market={market}
    pub async fn get_order_book(&self, market: Option<&MarketId>) -> Result<Value> {
        let market = self.resolve_market(market)?;
        let endpoint = QueryParams::new()
            .push("market", Some(market.trading_code()))
            .to_endpoint("/public/orderbook");
        let builder = self.public_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }
}
