//! Demo 1: Market Listing
//!
//! Showcases: symbol metadata, cached market list, 24h tickers
//!
//! Run: CRIX_ENV=prod cargo run --bin markets

use colored::*;
use crix_rest::{ClientConfig, CrixClient};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = CrixClient::with_config(ClientConfig::from_env()?)?;

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  CRIX.IO MARKETS".cyan().bold());
    println!("{}", format!("  Environment: {}", client.environment()).cyan());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let markets = client.fetch_markets(false)?;
    println!("{} {} markets listed\n", "✓".green(), markets.len());

    for symbol in &markets {
        let status = if symbol.is_trading {
            "trading".green()
        } else {
            "halted".red()
        };
        println!(
            "  {:<12} {:<8} tick {:<12} lot {:<12} maker {} taker {}",
            symbol.name.bold(),
            status,
            symbol.tick_price,
            symbol.tick_lot,
            symbol.maker_fee,
            symbol.taker_fee
        );
    }
    println!();

    println!("{}", "  24H TICKERS".yellow().bold());
    for ticker in client.fetch_ticker()? {
        let change = if ticker.price_change.is_sign_negative() {
            format!("{}%", ticker.price_change_percent).red()
        } else {
            format!("+{}%", ticker.price_change_percent).green()
        };
        println!(
            "  {:<12} close {:<14} vol {:<14} {}",
            ticker.symbol_name, ticker.close, ticker.volume, change
        );
    }

    // Served from the cache, no request
    let codes = client.fetch_currency_codes()?;
    println!("\n{} Currency codes: {}", "✓".green(), codes.join(", ").dimmed());
    Ok(())
}
