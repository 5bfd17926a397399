//! Input normalization for front ends.
//!
//! The calculation modules never call these; a form layer applies them to
//! raw user input before building a [`LoanConfiguration`].

use rust_decimal::{Decimal, RoundingStrategy};

use crate::loan::{LoanConfiguration, MAX_CREDIT_SCORE, MAX_INTEREST_RATE_PERCENT, MIN_CREDIT_SCORE};
use crate::rates::rate_for_credit_score;
use crate::types::Money;

/// Step of the credit-score slider.
pub const CREDIT_SCORE_STEP: i32 = 10;

/// Round to two decimals, then clamp to `[0, 30]`.
pub fn normalize_interest_rate(value: Decimal) -> Decimal {
    value
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .clamp(Decimal::ZERO, MAX_INTEREST_RATE_PERCENT)
}

/// Money inputs never go below zero.
pub fn non_negative(value: Money) -> Money {
    value.max(Decimal::ZERO)
}

/// Clamp to the slider range and snap down to its step.
pub fn clamp_credit_score(score: i32) -> i32 {
    let clamped = score.clamp(MIN_CREDIT_SCORE, MAX_CREDIT_SCORE);
    clamped - (clamped - MIN_CREDIT_SCORE) % CREDIT_SCORE_STEP
}

/// Apply every field-level normalization.
pub fn normalize(config: &LoanConfiguration) -> LoanConfiguration {
    LoanConfiguration {
        price: non_negative(config.price),
        down_payment: non_negative(config.down_payment),
        trade_in_value: non_negative(config.trade_in_value),
        loan_term_months: config.loan_term_months,
        annual_interest_rate_percent: normalize_interest_rate(config.annual_interest_rate_percent),
        credit_score: clamp_credit_score(config.credit_score),
    }
}

/// Set a new credit score and re-seed the rate from its tier.
pub fn apply_credit_score(config: &LoanConfiguration, credit_score: i32) -> LoanConfiguration {
    LoanConfiguration {
        credit_score,
        annual_interest_rate_percent: rate_for_credit_score(credit_score),
        ..config.clone()
    }
}
