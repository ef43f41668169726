/*
[INPUT]:  Order placement and cancellation requests
[OUTPUT]: Raw responses and cancellation confirmation
[POS]:    HTTP layer - trading endpoints (require bearer token)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use reqwest::{Method, StatusCode};
use rust_decimal::Decimal;
use tracing::info;

use crate::http::{Bitmarket24Client, QueryParams, Result};
use crate::types::{MarketId, OrderType, PlaceOrderRequest, RawResponse};

impl Bitmarket24Client {
    /// Cancel a single order
    ///
    /// DELETE /orderbook/{order_id}
    /// Returns `true` only when the server answers 202 Accepted.
    pub async fn cancel_order(&self, order_id: u64) -> Result<bool> {
        let endpoint = format!("/orderbook/{order_id}");
        let builder = self.authed_request(Method::DELETE, &endpoint)?;
        let response = self.send_raw(builder).await?;
        Ok(response.status == StatusCode::ACCEPTED.as_u16())
    }

    /// Cancel every order in a market, optionally only one side
    ///
    /// DELETE /orderbook?market={market}&type={type}
    pub async fn cancel_orders(
        &self,
        market: Option<&MarketId>,
        order_type: Option<OrderType>,
    ) -> Result<RawResponse> {
        let market = self.resolve_market(market)?;
        let endpoint = QueryParams::new()
            .push("market", Some(market.trading_code()))
            .push("type", order_type)
            .to_endpoint("/orderbook");

        let builder = self.authed_request(Method::DELETE, &endpoint)?;
        self.send_raw(builder).await
    }

    /// Place a buy offer
    ///
    /// POST /order {"type":"bid","market":...,"amount":...,"rate":...}
    pub async fn place_bid(
        &self,
        amount: Decimal,
        rate: Decimal,
        market: Option<&MarketId>,
    ) -> Result<RawResponse> {
        self.place_order(OrderType::Bid, amount, rate, market).await
    }

    /// Place a sell offer
    ///
    /// POST /order {"type":"ask","market":...,"amount":...,"rate":...}
    pub async fn place_ask(
        &self,
        amount: Decimal,
        rate: Decimal,
        market: Option<&MarketId>,
    ) -> Result<RawResponse> {
        self.place_order(OrderType::Ask, amount, rate, market).await
    }

    async fn place_order(
        &self,
        order_type: OrderType,
        amount: Decimal,
        rate: Decimal,
        market: Option<&MarketId>,
    ) -> Result<RawResponse> {
        let req = PlaceOrderRequest {
            order_type,
            market: self.resolve_market(market)?,
            amount,
            rate,
        };
        info!(
            order_type = %req.order_type,
            market = %req.market,
            %amount,
            %rate,
            "placing order"
        );

        let builder = self.authed_request(Method::POST, "/order")?.json(&req);
        self.send_raw(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{Bitmarket24Client, Bitmarket24Error, ClientConfig, Credentials};
    use crate::types::{MarketId, OrderType};
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use wiremock::matchers::{body_json, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn mock_client(server: &MockServer) -> Bitmarket24Client {
        Bitmarket24Client::with_config_and_base_urls(
            Credentials::new("abc", "s3cret"),
            ClientConfig::default(),
            &format!("{}/api/v1", server.uri()),
            &format!("{}/api", server.uri()),
        )
        .expect("client init")
    }

    #[rstest]
    #[case(202, true)]
    #[case(200, false)]
    #[case(400, false)]
    #[case(404, false)]
    #[tokio::test]
    async fn test_cancel_order_status_mapping(#[case] status: u16, #[case] expected: bool) {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/orderbook/77"))
            .and(header_exists("authorization"))
            .respond_with(ResponseTemplate::new(status))
            .expect(1)
            .mount(&server)
            .await;

        let cancelled = mock_client(&server)
            .cancel_order(77)
            .await
            .expect("cancel_order failed");
        assert_eq!(cancelled, expected);
    }

    #[tokio::test]
    async fn test_cancel_orders_returns_raw_response() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/orderbook"))
            .and(header_exists("authorization"))
            .respond_with(ResponseTemplate::new(400).set_body_string("nothing to cancel"))
            .expect(1)
            .mount(&server)
            .await;

        let response = mock_client(&server)
            .cancel_orders(Some(&MarketId::LTC_PLN), Some(OrderType::Ask))
            .await
            .expect("cancel_orders should not raise on 400");

        assert_eq!(response.status, 400);
        assert_eq!(response.body, "nothing to cancel");

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), Some("market=ltc_pln&type=ask"));
    }

    #[tokio::test]
    async fn test_place_bid_body_and_auth() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/order"))
            .and(header_exists("authorization"))
            .and(body_json(json!({
                "type": "bid",
                "market": "ltc_pln",
                "amount": 1.5,
                "rate": 200,
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 9001})))
            .expect(1)
            .mount(&server)
            .await;

        let market: MarketId = "ltc_pln".parse().unwrap();
        let response = mock_client(&server)
            .place_bid(dec!(1.5), dec!(200), Some(&market))
            .await
            .expect("place_bid failed");

        assert_eq!(response.status, 201);
        let body: serde_json::Value = response.json().unwrap();
        assert_eq!(body["id"], 9001);
    }

    #[tokio::test]
    async fn test_place_ask_uses_default_market() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/order"))
            .and(body_json(json!({
                "type": "ask",
                "market": "btc_pln",
                "amount": 0.01,
                "rate": 180000,
            })))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server).with_default_market(MarketId::BTC_PLN);
        let response = client
            .place_ask(dec!(0.01), dec!(180000), None)
            .await
            .expect("place_ask failed");
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn test_trading_without_market_is_configuration_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let client = mock_client(&server);

        assert!(matches!(
            client.place_bid(dec!(1), dec!(1), None).await,
            Err(Bitmarket24Error::Configuration(_))
        ));
        assert!(matches!(
            client.cancel_orders(None, None).await,
            Err(Bitmarket24Error::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn test_transport_failure_surfaces_unchanged() {
        // Nothing listens on port 1.
        let client = Bitmarket24Client::with_config_and_base_urls(
            Credentials::new("abc", "s3cret"),
            ClientConfig::default(),
            "http://127.0.0.1:1/api/v1",
            "http://127.0.0.1:1/api",
        )
        .expect("client init");

        let err = client.cancel_order(1).await.unwrap_err();
        assert!(err.is_transport_error());
    }
}
