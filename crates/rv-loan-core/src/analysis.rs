//! One-call analysis bundling every view of a loan configuration.

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

use rust_decimal::Decimal;

use crate::aggregate::{summarize_schedule, LoanSummary};
use crate::loan::{
    LoanConfiguration, LOAN_TERM_OPTIONS, MAX_CREDIT_SCORE, MAX_INTEREST_RATE_PERCENT,
    MIN_CREDIT_SCORE,
};
use crate::presentation::{chart_series, ChartPoint};
use crate::rates::{comparative_rates, RateQuote};
use crate::schedule::{amortization_schedule, PaymentRecord};
use crate::types::{with_metadata, ComputationOutput};

/// Everything the calculator page renders for one configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanAnalysis {
    pub summary: LoanSummary,
    pub schedule: Vec<PaymentRecord>,
    pub rates: Vec<RateQuote>,
    pub chart: Vec<ChartPoint>,
}

/// Run the full calculation and wrap it in the standard output envelope.
///
/// Implausible input is reported as warnings; it never alters the numbers.
pub fn analyze_loan(config: &LoanConfiguration) -> ComputationOutput<LoanAnalysis> {
    let start = Instant::now();
    let warnings = plausibility_warnings(config);

    let schedule = amortization_schedule(config);
    let analysis = LoanAnalysis {
        summary: summarize_schedule(config, &schedule),
        rates: comparative_rates(config.credit_score),
        chart: chart_series(config, &schedule),
        schedule,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    debug!(elapsed_us = elapsed, warnings = warnings.len(), "loan analysis complete");
    with_metadata(
        "Fixed-rate amortizing loan (annuity formula)",
        config,
        warnings,
        elapsed,
        analysis,
    )
}

fn plausibility_warnings(config: &LoanConfiguration) -> Vec<String> {
    let mut warnings = Vec::new();

    let financed = config.financed_amount();
    if financed < Decimal::ZERO {
        warnings.push(format!(
            "Down payment and trade-in exceed the price; amount to finance is {financed}"
        ));
    }
    if config.down_payment > config.price {
        warnings.push("Down payment exceeds the price".to_string());
    }
    if config.trade_in_value > config.price {
        warnings.push("Trade-in value exceeds the price".to_string());
    }
    if !LOAN_TERM_OPTIONS.contains(&config.loan_term_months) {
        warnings.push(format!(
            "Loan term of {} months is not a standard term",
            config.loan_term_months
        ));
    }
    let rate = config.annual_interest_rate_percent;
    if rate < Decimal::ZERO || rate > MAX_INTEREST_RATE_PERCENT {
        warnings.push(format!("Interest rate {rate}% is outside 0-30%"));
    }
    if !(MIN_CREDIT_SCORE..=MAX_CREDIT_SCORE).contains(&config.credit_score) {
        warnings.push(format!(
            "Credit score {} is outside {MIN_CREDIT_SCORE}-{MAX_CREDIT_SCORE}",
            config.credit_score
        ));
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_config_has_no_warnings() {
        let out = analyze_loan(&LoanConfiguration::default());
        assert!(out.warnings.is_empty(), "{:?}", out.warnings);
        assert_eq!(out.result.schedule.len(), 120);
        assert_eq!(out.result.rates.len(), 2);
        assert_eq!(out.result.chart.len(), 11);
    }

    #[test]
    fn test_negative_financed_amount_warns_but_computes() {
        let cfg = LoanConfiguration {
            price: dec!(10000),
            down_payment: dec!(8000),
            trade_in_value: dec!(5000),
            loan_term_months: 60,
            annual_interest_rate_percent: dec!(5.0),
            credit_score: 700,
        };
        let out = analyze_loan(&cfg);
        assert_eq!(out.result.schedule.len(), 60);
        assert!(out.warnings.iter().any(|w| w.contains("amount to finance")));
    }

    #[test]
    fn test_out_of_range_inputs_warn() {
        let cfg = LoanConfiguration {
            loan_term_months: 7,
            annual_interest_rate_percent: dec!(45),
            credit_score: 900,
            ..LoanConfiguration::default()
        };
        let out = analyze_loan(&cfg);
        assert_eq!(out.warnings.len(), 3);
        assert_eq!(out.result.schedule.len(), 7);
    }

    #[test]
    fn test_metadata_populated() {
        let out = analyze_loan(&LoanConfiguration::default());
        assert!(!out.metadata.version.is_empty());
        assert_eq!(out.metadata.precision, "rust_decimal_128bit");
        assert_eq!(out.assumptions["loan_term_months"], 120);
    }
}
