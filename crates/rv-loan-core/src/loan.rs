//! Loan configuration: the immutable input every calculation starts from.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::RvLoanError;
use crate::rates;
use crate::time_value;
use crate::types::{Money, Rate};
use crate::RvLoanResult;

/// Terms offered by the calculator, in months.
pub const LOAN_TERM_OPTIONS: [u32; 12] = [12, 24, 36, 48, 60, 72, 84, 96, 108, 120, 180, 240];

/// Lowest credit score the rate slider offers.
pub const MIN_CREDIT_SCORE: i32 = 300;

/// Highest credit score the rate slider offers.
pub const MAX_CREDIT_SCORE: i32 = 850;

/// Upper bound of the interest-rate input, in percent.
pub const MAX_INTEREST_RATE_PERCENT: Decimal = dec!(30);

const DEFAULT_CREDIT_SCORE: i32 = 700;

/// A single RV loan scenario.
///
/// No field is validated here. Financed amount may be negative when the
/// down payment and trade-in exceed the price; every calculation accepts
/// that and produces a non-positive payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanConfiguration {
    /// Purchase price of the RV.
    pub price: Money,
    /// Cash paid up front.
    pub down_payment: Money,
    /// Value credited for the buyer's current RV.
    pub trade_in_value: Money,
    /// Number of monthly payments.
    #[serde(alias = "loan_term")]
    pub loan_term_months: u32,
    /// Annual percentage rate, e.g. 6.99 for 6.99%.
    #[serde(alias = "interest_rate")]
    pub annual_interest_rate_percent: Decimal,
    /// Borrower credit score.
    pub credit_score: i32,
}

impl Default for LoanConfiguration {
    /// The calculator's reset state.
    fn default() -> Self {
        Self {
            price: dec!(50000),
            down_payment: dec!(10000),
            trade_in_value: Decimal::ZERO,
            loan_term_months: 120,
            annual_interest_rate_percent: rates::rate_for_credit_score(DEFAULT_CREDIT_SCORE),
            credit_score: DEFAULT_CREDIT_SCORE,
        }
    }
}

impl LoanConfiguration {
    /// Amount to finance: `price - down_payment - trade_in_value`, unclamped.
    pub fn financed_amount(&self) -> Money {
        self.price - self.down_payment - self.trade_in_value
    }

    /// Periodic (monthly) rate as a decimal fraction.
    pub fn monthly_rate(&self) -> Rate {
        time_value::monthly_rate(self.annual_interest_rate_percent)
    }

    /// Decode a configuration from JSON.
    pub fn from_json(json: &str) -> RvLoanResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Accept only the terms the calculator offers.
///
/// The engine itself computes with any term; this is for front ends that
/// want to reject free-form input.
pub fn check_term(months: u32) -> RvLoanResult<u32> {
    if LOAN_TERM_OPTIONS.contains(&months) {
        Ok(months)
    } else {
        Err(RvLoanError::InvalidInput {
            field: "loan_term_months".into(),
            reason: format!(
                "{months} is not an offered term; expected one of {:?}",
                LOAN_TERM_OPTIONS
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reset_state() {
        let cfg = LoanConfiguration::default();
        assert_eq!(cfg.price, dec!(50000));
        assert_eq!(cfg.down_payment, dec!(10000));
        assert_eq!(cfg.trade_in_value, Decimal::ZERO);
        assert_eq!(cfg.loan_term_months, 120);
        assert_eq!(cfg.credit_score, 700);
        assert_eq!(cfg.annual_interest_rate_percent, dec!(7.99));
    }

    #[test]
    fn test_financed_amount_can_be_negative() {
        let cfg = LoanConfiguration {
            price: dec!(10000),
            down_payment: dec!(8000),
            trade_in_value: dec!(5000),
            ..LoanConfiguration::default()
        };
        assert_eq!(cfg.financed_amount(), dec!(-3000));
    }

    #[test]
    fn test_from_json_accepts_short_aliases() {
        let json = r#"{
            "price": "50000",
            "down_payment": "10000",
            "trade_in_value": "0",
            "loan_term": 120,
            "interest_rate": "6.99",
            "credit_score": 750
        }"#;
        let cfg = LoanConfiguration::from_json(json).unwrap();
        assert_eq!(cfg.loan_term_months, 120);
        assert_eq!(cfg.annual_interest_rate_percent, dec!(6.99));
        assert_eq!(cfg.monthly_rate(), dec!(0.005825));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = LoanConfiguration::from_json("{\"price\": ").unwrap_err();
        assert!(matches!(err, RvLoanError::SerializationError(_)));
    }

    #[test]
    fn test_check_term() {
        assert_eq!(check_term(60).unwrap(), 60);
        assert_eq!(check_term(240).unwrap(), 240);
        match check_term(61) {
            Err(RvLoanError::InvalidInput { field, .. }) => {
                assert_eq!(field, "loan_term_months")
            }
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }
}
