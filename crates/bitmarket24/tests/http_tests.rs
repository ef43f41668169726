/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for HTTP client
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When HTTP endpoints change
*/

mod common;

use bitmarket24::{Bitmarket24Client, Bitmarket24Error, ClientOrdersQuery, MarketId, OrderStatus};
use common::{CLIENT_SECRET, bearer_token, client_for, setup_mock_server};
use rust_decimal_macros::dec;
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, header_exists, method, path};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let client = assert_ok!(Bitmarket24Client::new("abc", "s3cret"));
    assert_eq!(client.credentials().client_id, "abc");
    assert!(client.default_market().is_none());
}

#[test]
fn test_client_requires_credentials() {
    let err = Bitmarket24Client::new("abc", "").unwrap_err();
    assert!(matches!(err, Bitmarket24Error::Credential(_)));
}

#[tokio::test]
async fn test_place_bid_end_to_end() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/order"))
        .and(header_exists("authorization"))
        .and(body_json(serde_json::json!({
            "type": "bid",
            "market": "ltc_pln",
            "amount": 1.5,
            "rate": 200,
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let market = assert_ok!("ltc_pln".parse::<MarketId>());
    let response = assert_ok!(client.place_bid(dec!(1.5), dec!(200), Some(&market)).await);
    assert_eq!(response.status, 201);

    let token = bearer_token(&server, 0).await;
    let claims = assert_ok!(bitmarket24::auth::verify_token(
        &token,
        CLIENT_SECRET,
        chrono::Utc::now().timestamp() - 1,
    ));
    assert_eq!(claims.sub, "abc");
}

#[tokio::test]
async fn test_each_call_mints_its_own_token() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/user/me/balance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_ok!(client.get_client_balance().await);
    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;
    assert_ok!(client.get_client_balance().await);

    let first = bearer_token(&server, 0).await;
    let second = bearer_token(&server, 1).await;
    assert_ne!(first, second);
}

#[tokio::test]
async fn test_orders_status_filters_on_the_wire() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/user/me/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).with_default_market(MarketId::LTC_PLN);
    let query = ClientOrdersQuery::new().with_statuses([OrderStatus::New, OrderStatus::Active]);
    assert_ok!(client.get_client_orders(&query).await);

    let requests = server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap_or_default();
    assert!(query.ends_with("&status[]=new&status[]=active"), "got {query}");
}
