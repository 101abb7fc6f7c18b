/*
[INPUT]:  Market identifier (e.g., "btc-clp")
[OUTPUT]: Market data (listing, ticker, order book, trades)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use surbtc_adapter::SurbtcClient;

/// Example: Query market data (no authentication required)
#[tokio::main]
async fn main() {
    println!("=== SurBTC Market Data Example ===\n");

    let client = match SurbtcClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    // List markets
    println!("Querying markets...");
    match client.markets().await {
        Ok(markets) => println!("✓ Markets: {}", markets),
        Err(e) => println!("✗ Error: {} (last error: {:?})", e, client.last_error()),
    }

    let market_id = "btc-clp";

    // Ticker
    println!("\nQuerying ticker for {}...", market_id);
    match client.ticker(market_id).await {
        Ok(ticker) => println!("✓ Ticker: {}", ticker),
        Err(e) => println!("✗ Error: {} (last error: {:?})", e, client.last_error()),
    }

    // Order book
    println!("\nQuerying order book for {}...", market_id);
    match client.order_book(market_id).await {
        Ok(book) => println!("✓ Order book: {}", book),
        Err(e) => println!("✗ Error: {} (last error: {:?})", e, client.last_error()),
    }

    // Trades since yesterday (timestamp in milliseconds)
    let yesterday = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| (d.as_millis() as i64) - 24 * 60 * 60 * 1000)
        .unwrap_or_default();
    println!("\nQuerying trades for {} since {}...", market_id, yesterday);
    match client.trades(market_id, Some(yesterday)).await {
        Ok(trades) => println!("✓ Trades: {}", trades),
        Err(e) => println!("✗ Error: {} (last error: {:?})", e, client.last_error()),
    }

    println!("\n✓ Market data example complete");
}
