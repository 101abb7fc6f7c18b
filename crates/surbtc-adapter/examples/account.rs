/*
[INPUT]:  API credentials from the environment
[OUTPUT]: Account data (balances, orders, withdrawal history)
[POS]:    Examples - private account queries
[UPDATE]: When adding new account endpoints
*/

use surbtc_adapter::SurbtcClient;

/// Example: Query private account data (requires API credentials)
///
/// Set SURBTC_API_KEY and SURBTC_SECRET_KEY before running.
#[tokio::main]
async fn main() {
    println!("=== SurBTC Account Example ===\n");

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

    // Balances for one currency
    println!("Querying BTC balance...");
    match client.balances(Some("btc")).await {
        Ok(balance) => println!("✓ Balance: {}", balance),
        Err(e) => println!("✗ Error: {} (last error: {:?})", e, client.last_error()),
    }

    // Order lookup
    println!("\nQuerying order 4039845...");
    match client.order("4039845").await {
        Ok(order) => println!("✓ Order: {}", order),
        Err(e) => println!("✗ Error: {} (last error: {:?})", e, client.last_error()),
    }

    // Withdrawal history
    println!("\nQuerying BTC withdrawals...");
    match client.withdrawals("btc").await {
        Ok(withdrawals) => println!("✓ Withdrawals: {}", withdrawals),
        Err(e) => println!("✗ Error: {} (last error: {:?})", e, client.last_error()),
    }

    println!("\n✓ Account example complete");
}
