/*
[INPUT]:  Public testnet endpoints, no credentials needed
[OUTPUT]: Server time and ticker prices on stdout
[POS]:    Examples - market data queries
[UPDATE]: When market data API changes
*/

use binance_futures_adapter::*;

/// Example: public market data (no signature required)
#[tokio::main]
async fn main() {
    println!("=== Futures Testnet Market Data Example ===\n");

    // Public endpoints still need a client; the key pair is never sent.
    let credentials = Credentials::new("unused", "unused");
    let client = match BinanceFuturesClient::new(credentials) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("Failed to create client: {err}");
            return;
        }
    };
    println!("✓ HTTP client created against {TESTNET_BASE_URL}");

    match client.server_time().await {
        Ok(server_time) => println!("✓ Exchange time: {server_time} ms"),
        Err(err) => eprintln!("Failed to fetch server time: {err}"),
    }

    for symbol in ["BTCUSDT", "ETHUSDT"] {
        match client.symbol_price(symbol).await {
            Ok(price) => println!("✓ {symbol}: {}", price.price),
            Err(err) => eprintln!("Failed to fetch {symbol} price: {err}"),
        }
    }

    println!("\n✓ Market data example complete");
}
