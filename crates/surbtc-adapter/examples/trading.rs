/*
[INPUT]:  API credentials from the environment and order parameters
[OUTPUT]: Order placement and cancellation responses
[POS]:    Examples - private trading flow
[UPDATE]: When the order flow changes
*/

use surbtc_adapter::{OrderSide, PriceType, SurbtcClient};

/// Example: place a limit bid and cancel it (requires API credentials)
///
/// Set SURBTC_API_KEY and SURBTC_SECRET_KEY before running. This places a
/// real order on the exchange; keep the amount small.
#[tokio::main]
async fn main() {
    println!("=== SurBTC Trading Example ===\n");

    let api_key = std::env::var("SURBTC_API_KEY").unwrap_or_default();
    let secret_key = std::env::var("SURBTC_SECRET_KEY").unwrap_or_default();
    if api_key.is_empty() || secret_key.is_empty() {
        eprintln!("Set SURBTC_API_KEY and SURBTC_SECRET_KEY to run this example");
        return;
    }

    let mut client = match SurbtcClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    client.authenticate(api_key, secret_key);

    // Place a limit bid far below market so it rests on the book
    println!("Placing limit bid on btc-clp...");
    let order = match client
        .create_order("btc-clp", OrderSide::Bid, PriceType::Limit, Some(1000.0), 0.0001)
        .await
    {
        Ok(order) => {
            println!("✓ Order placed: {}", order);
            order
        }
        Err(e) => {
            println!("✗ Error: {} (last error: {:?})", e, client.last_error());
            return;
        }
    };

    // Cancel it again
    if let Some(id) = order
        .pointer("/order/id")
        .and_then(|id| id.as_i64())
    {
        println!("\nCanceling order {}...", id);
        match client.cancel_order(&id.to_string()).await {
            Ok(canceled) => println!("✓ Cancel requested: {}", canceled),
            Err(e) => println!("✗ Error: {} (last error: {:?})", e, client.last_error()),
        }
    }

    println!("\n✓ Trading example complete");
}
