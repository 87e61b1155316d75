//! Demo 2: Orderbook Snapshot
//!
//! Showcases: depth request with optional level aggregation
//!
//! Run: cargo run --bin order_book -- BTC_USDT [aggregation]

use colored::*;
use crix_rest::{ClientConfig, CrixClient};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

const LEVELS: usize = 10;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let symbol = args.next().unwrap_or_else(|| "BTC_USDT".to_string());
    let aggregation = args.next().map(|a| a.parse::<u32>()).transpose()?;

    let client = CrixClient::with_config(ClientConfig::from_env()?)?;
    let depth = client.fetch_order_book(&symbol, aggregation)?;

    println!("{}", "═".repeat(60).cyan());
    println!("{}", format!("  ORDERBOOK {}", depth.symbol_name).cyan().bold());
    println!(
        "{}",
        format!(
            "  update #{}  aggregation {}",
            depth.last_update_id, depth.level_aggregation
        )
        .cyan()
    );
    println!("{}", "═".repeat(60).cyan());

    let max_qty = depth
        .asks
        .iter()
        .chain(depth.bids.iter())
        .map(|o| o.quantity)
        .max()
        .unwrap_or(Decimal::ONE);

    for offer in depth.asks.iter().take(LEVELS).rev() {
        println!(
            "  {:>14} {:>12} {}",
            offer.price.to_string().red(),
            offer.quantity,
            bar(offer.quantity, max_qty).red()
        );
    }
    match (depth.spread(), depth.mid_price()) {
        (Some(spread), Some(mid)) => {
            println!("  {} {}  {} {}", "SPREAD:".yellow(), spread, "MID:".yellow(), mid)
        }
        _ => println!("  {}", "one-sided book".dimmed()),
    }
    for offer in depth.bids.iter().take(LEVELS) {
        println!(
            "  {:>14} {:>12} {}",
            offer.price.to_string().green(),
            offer.quantity,
            bar(offer.quantity, max_qty).green()
        );
    }
    Ok(())
}

fn bar(quantity: Decimal, max: Decimal) -> String {
    if max.is_zero() {
        return String::new();
    }
    let width = (quantity / max * Decimal::from(30)).round();
    "█".repeat(width.to_usize().unwrap_or(0))
}
