//! Demo 5: Order Lifecycle
//!
//! Showcases: create, look up and cancel a limit order
//!
//! Places a small buy far below the best bid so it rests on the book, then
//! cancels it.
//!
//! Run: CRIX_API_TOKEN=... CRIX_API_SECRET=... cargo run --bin place_order -- BTC_USDT

use colored::*;
use crix_rest::{ClientConfig, CrixClient, NewOrder, Side};
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let symbol = std::env::args().nth(1).unwrap_or_else(|| "BTC_USDT".to_string());
    let client = CrixClient::with_config(ClientConfig::from_env()?)?;

    let market = client
        .fetch_markets(false)?
        .into_iter()
        .find(|m| m.name == symbol)
        .ok_or_else(|| format!("unknown symbol {}", symbol))?;

    let depth = client.fetch_order_book(&symbol, None)?;
    let best_bid = depth.best_bid().ok_or("no bids on the book")?;

    let price = market.round_price(best_bid * dec!(0.5));
    let quantity = market.round_quantity(market.min_lot.max(market.tick_lot));

    println!("{} Best bid {}, placing buy {} @ {}", "→".cyan(), best_bid, quantity, price);
    let order = client.create_order(&NewOrder::limit(&symbol, Side::Buy, price, quantity))?;
    println!("{} Order #{} placed ({:?})", "✓".green(), order.id, order.status);

    match client.fetch_order(order.id, &symbol)? {
        Some(info) => println!(
            "{} Order #{} filled {} of {}",
            "✓".green(),
            info.id,
            info.filled_quantity,
            info.quantity
        ),
        None => println!("{} Order #{} no longer known", "!".yellow(), order.id),
    }

    let cancelled = client.cancel_order(order.id, &symbol)?;
    println!("{} Order #{} cancelled ({:?})", "✓".green(), cancelled.id, cancelled.status);
    Ok(())
}
