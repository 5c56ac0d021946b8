/*
[INPUT]:  BINANCE_API_KEY / BINANCE_API_SECRET and order parameters
[OUTPUT]: Order placement acknowledgement from the testnet
[POS]:    Examples - trading operations
[UPDATE]: When trading API changes
*/

use binance_futures_adapter::*;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Example: place a small market order on the testnet.
///
/// Signed endpoints require:
/// 1. The API key in the X-MBX-APIKEY header
/// 2. An HMAC-SHA256 signature over the query string
#[tokio::main]
async fn main() {
    println!("=== Futures Testnet Order Example ===\n");

    let order = OrderRequest::market(
        "BTCUSDT",
        Side::Buy,
        Decimal::from_str("0.002").unwrap_or_default(),
    );
    println!("Order request:");
    println!("  {order:?}");

    match validate_order(order.clone()) {
        Ok(_) => println!("✓ Order passes pre-flight validation"),
        Err(err) => {
            eprintln!("✗ Validation failed: {err}");
            return;
        }
    }

    // Without credentials, stop after validation instead of sending.
    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(err) => {
            println!("\nSkipping submission: {err}");
            println!("Set BINANCE_API_KEY and BINANCE_API_SECRET to place the order.");
            return;
        }
    };

    let client = match BinanceFuturesClient::new(credentials) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("Failed to create client: {err}");
            return;
        }
    };

    match client.place_order(order).await {
        Ok(ack) => {
            println!("\n✓ Order accepted");
            println!("  id:     {}", ack.order_id);
            println!("  status: {}", ack.status);
            println!("  filled: {}", ack.executed_qty);
        }
        Err(err) => eprintln!("\n✗ Order rejected: {err}"),
    }
}
