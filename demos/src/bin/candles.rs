//! Demo 3: OHLCV Candles
//!
//! Showcases: /klines queries with resolution and limit
//!
//! Run: cargo run --bin candles -- BTC_USDT 60

use chrono::{Duration, Utc};
use colored::*;
use crix_rest::{ClientConfig, CrixClient, Resolution};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let symbol = args.next().unwrap_or_else(|| "BTC_USDT".to_string());
    let resolution: Resolution = args.next().as_deref().unwrap_or("60").parse()?;

    let client = CrixClient::with_config(ClientConfig::from_env()?)?;

    let end = Utc::now();
    let start = end - Duration::days(1);
    let candles = client.fetch_ohlcv(&symbol, start, end, resolution, 24)?;

    println!("{}", format!("  {} @ {} ({} candles)", symbol, resolution, candles.len()).cyan().bold());
    for candle in candles {
        let line = format!(
            "  {}  O {:<12} H {:<12} L {:<12} C {:<12} V {}",
            candle.open_time.format("%Y-%m-%d %H:%M"),
            candle.open,
            candle.high,
            candle.low,
            candle.close,
            candle.volume
        );
        if candle.is_bullish() {
            println!("{}", line.green());
        } else {
            println!("{}", line.red());
        }
    }
    Ok(())
}
