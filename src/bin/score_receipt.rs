use anyhow::Context;
use std::fs;

use receipt_processor::{score_breakdown, validate, RawReceipt};

/// Score a receipt JSON file without starting the server
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let path = args
        .get(1)
        .context("usage: score_receipt <receipt.json>")?;

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path))?;
    let raw: RawReceipt = serde_json::from_str(&contents)
        .with_context(|| format!("{} is not a receipt", path))?;

    let receipt = validate(&raw)
        .with_context(|| format!("{} is invalid", path))?;
    let breakdown = score_breakdown(&receipt);

    println!("{}", serde_json::to_string_pretty(&breakdown)?);
    println!("points: {}", breakdown.total());

    Ok(())
}
