use clap::Args;
use serde_json::{json, Value};

use rv_loan_core::presentation;
use rv_loan_core::rates;

/// Arguments for rate lookups
#[derive(Args)]
pub struct RatesArgs {
    /// Credit score (not range-checked; out-of-range scores use the nearest tier)
    #[arg(long, default_value_t = 700, allow_hyphen_values = true)]
    pub credit_score: i32,
}

pub fn run_rates(args: RatesArgs) -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(rates::comparative_rates(args.credit_score))?)
}

pub fn run_rate_for_score(args: RatesArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let tier = rates::credit_tier(args.credit_score);
    Ok(json!({
        "rate": rates::rate_for_credit_score(args.credit_score),
        "credit_score": args.credit_score,
        "credit_tier": tier.label(),
    }))
}

pub fn run_terms() -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(presentation::loan_terms())?)
}
