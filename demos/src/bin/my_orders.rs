//! Demo 4: Account Overview
//!
//! Showcases: signed requests, lazy multi-symbol iteration
//!
//! Run: CRIX_API_TOKEN=... CRIX_API_SECRET=... cargo run --bin my_orders -- [SYMBOL...]

use colored::*;
use crix_rest::{ClientConfig, CrixClient, DEFAULT_LIST_LIMIT};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = CrixClient::with_config(ClientConfig::from_env()?)?;
    if !client.has_credentials() {
        eprintln!("{} Set CRIX_API_TOKEN and CRIX_API_SECRET", "✗".red());
        std::process::exit(1);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let symbols: Vec<&str> = args.iter().map(String::as_str).collect();

    println!("{}", "  BALANCES".yellow().bold());
    for account in client.fetch_balance()? {
        if account.is_empty() {
            continue;
        }
        println!(
            "  {:<8} available {:<16} locked {}",
            account.currency_name.bold(),
            account.balance,
            account.locked_balance
        );
    }
    println!();

    println!("{}", "  ORDERS".yellow().bold());
    let mut count = 0;
    for order in client.fetch_orders(&symbols, DEFAULT_LIST_LIMIT)? {
        let order = order?;
        count += 1;
        let side = if order.is_buy {
            "BUY ".green()
        } else {
            "SELL".red()
        };
        println!(
            "  #{:<10} {:<10} {} {} @ {}  filled {}  {:?}",
            order.id,
            order.symbol_name,
            side,
            order.quantity,
            order.price,
            order.filled_quantity,
            order.status
        );
    }
    println!("\n{} {} orders", "✓".green(), count);

    println!("\n{}", "  TRADES".yellow().bold());
    for trade in client.fetch_my_trades(&symbols, 20)? {
        let trade = trade?;
        println!(
            "  {}  {:<10} {} {} @ {}  fee {} {}",
            trade.created_at.format("%Y-%m-%d %H:%M:%S"),
            trade.symbol_name,
            trade.side(),
            trade.quantity,
            trade.price,
            trade.fee,
            trade.fee_currency
        );
    }
    Ok(())
}
