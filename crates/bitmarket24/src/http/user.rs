/*
[INPUT]:  Query parameters and bearer token authentication
[OUTPUT]: User account data (balance, orders, trades, turnover, fees)
[POS]:    HTTP layer - user data endpoints (require bearer token)
[UPDATE]: When adding new user endpoints or changing query parameters
*/

// ### User Endpoints

use crate::http::{Bitmarket24Client, QueryParams, Result};
use crate::types::{ClientOrdersQuery, MarketId, OrderType};
use reqwest::Method;
use serde_json::Value;

impl Bitmarket24Client {
    /// Query account balances
    ///
    /// GET /user/me/balance
    pub async fn get_client_balance(&self) -> Result<Value> {
        let builder = self.authed_request(Method::GET, "/user/me/balance")?;
        self.send_json(builder).await
    }

    /// Query the user's orders, paginated
    ///
    /// GET /user/me/orders?market={market}&type={type}&limit={limit}&offset={offset}&dir={dir}&status[]={status}...
    pub async fn get_client_orders(&self, query: &ClientOrdersQuery) -> Result<Value> {
        let market = self.resolve_market(query.market.as_ref())?;
        let endpoint = QueryParams::new()
            .push("market", Some(market.trading_code()))
            .push("type", query.order_type)
            .push("limit", query.limit)
            .push("offset", query.offset)
            .push("dir", query.dir)
            .push_many("status[]", query.statuses.iter())
            .to_endpoint("/user/me/orders");

        let builder = self.authed_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// Query the user's executed trades
    ///
    /// GET /user/me/trades?type={type}&market={market}&limit={limit}&offset={offset}
    pub async fn get_client_trades(
        &self,
        order_type: OrderType,
        market: Option<&MarketId>,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value> {
        let market = self.resolve_market(market)?;
        let endpoint = QueryParams::new()
            .push("type", Some(order_type))
            .push("market", Some(market.trading_code()))
            .push("limit", limit)
            .push("offset", offset)
            .to_endpoint("/user/me/trades");

        let builder = self.authed_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// Query trading turnover
    ///
    /// GET /user/me/turnover
    pub async fn get_client_turnover(&self) -> Result<Value> {
        let builder = self.authed_request(Method::GET, "/user/me/turnover")?;
        self.send_json(builder).await
    }

    /// Query the fee schedule applied to this account
    ///
    /// GET /user/me/fee
    pub async fn get_client_fee(&self) -> Result<Value> {
        let builder = self.authed_request(Method::GET, "/user/me/fee")?;
        self.send_json(builder).await
    }

    /// Query a single order
    ///
    /// GET /order/{order_id}
    pub async fn get_order_info(&self, order_id: u64) -> Result<Value> {
        let endpoint = format!("/order/{order_id}");
        let builder = self.authed_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// Query fills of a single order
    ///
    /// GET /order/{order_id}/trades
    pub async fn get_order_trades(&self, order_id: u64) -> Result<Value> {
        let endpoint = format!("/order/{order_id}/trades");
        let builder = self.authed_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }
}
