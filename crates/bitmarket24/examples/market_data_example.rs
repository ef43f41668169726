/*
[INPUT]:  Market identifier (e.g., "LTC_PLN") and API credentials from the environment
[OUTPUT]: Market status, order book and account balance
[POS]:    Examples - public and authenticated queries
[UPDATE]: When adding new market data endpoints
*/

use bitmarket24::*;

/// Example: query market data and, when credentials are exported, the balance
///
/// BITMARKET24_CLIENT_ID=... BITMARKET24_CLIENT_SECRET=... cargo run --example market_data_example
#[tokio::main]
async fn main() {
    println!("=== Bitmarket24 Market Data Example ===\n");

    let client_id = std::env::var("BITMARKET24_CLIENT_ID").unwrap_or_else(|_| "public".to_string());
    let client_secret =
        std::env::var("BITMARKET24_CLIENT_SECRET").unwrap_or_else(|_| "unset".to_string());

    let client = match Bitmarket24Client::new(client_id, client_secret) {
        Ok(c) => c.with_default_market(MarketId::LTC_PLN),
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    println!("Querying market status for LTC_PLN...");
    match client.get_market_status(None).await {
        Ok(status) => println!("✓ Status: {}", status),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying order book for LTC_PLN...");
    match client.get_order_book(None).await {
        Ok(book) => println!("✓ Order book: {}", book),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying balance...");
    match client.get_client_balance().await {
        Ok(balance) => println!("✓ Balance: {}", balance),
        Err(e) if e.is_auth_error() => println!("✗ Not authorized: {}", e),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
