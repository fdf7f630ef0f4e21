#![warn(missing_docs)]
//! Prints the pagination context of a synthetic collection as JSON.
//!
//! Usage: `refarm-pagination <total_items> [page] [base_url]`

use anyhow::Context;
use refarm_pagination::{Config, PaginationContext, init_tracing};
use tracing::debug;

const DEFAULT_BASE_URL: &str = "/";

fn main() {
    dotenv::dotenv().ok();
    init_tracing();

    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let total_items: u64 = args
        .next()
        .context("usage: refarm-pagination <total_items> [page] [base_url]")?
        .parse()
        .context("total_items must be a non-negative integer")?;
    let page: i64 = match args.next() {
        Some(raw) => raw.parse().context("page must be an integer")?,
        None => 1,
    };
    let base_url = args.next().unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let config = Config::from_env().context("Invalid pagination configuration")?;
    debug!(?config, total_items, page, "Configuration loaded");

    let items: Vec<u64> = (1..=total_items).collect();
    let pagination = PaginationContext::from_config(&config, base_url, page, &items)?;
    let context = pagination.context()?;

    println!("{}", serde_json::to_string_pretty(&context)?);

    Ok(())
}
