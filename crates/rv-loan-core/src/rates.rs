//! Static credit-tier rate tables.
//!
//! Scores are never validated: anything below 300 or above 850 falls into
//! the nearest tier by the same thresholds.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::Rate;

const EXCELLENT_MIN_SCORE: i32 = 720;
const GOOD_MIN_SCORE: i32 = 690;
const FAIR_MIN_SCORE: i32 = 630;

/// Credit band derived from a numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreditTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl CreditTier {
    /// Base annual percentage rate offered to this tier.
    pub fn base_rate(self) -> Rate {
        match self {
            CreditTier::Excellent => dec!(6.99),
            CreditTier::Good => dec!(7.99),
            CreditTier::Fair => dec!(9.99),
            CreditTier::Poor => dec!(12.99),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CreditTier::Excellent => "Excellent",
            CreditTier::Good => "Good",
            CreditTier::Fair => "Fair",
            CreditTier::Poor => "Poor",
        }
    }
}

/// Map a credit score onto its tier.
pub fn credit_tier(credit_score: i32) -> CreditTier {
    if credit_score >= EXCELLENT_MIN_SCORE {
        CreditTier::Excellent
    } else if credit_score >= GOOD_MIN_SCORE {
        CreditTier::Good
    } else if credit_score >= FAIR_MIN_SCORE {
        CreditTier::Fair
    } else {
        CreditTier::Poor
    }
}

/// Base annual percentage rate for a credit score.
pub fn rate_for_credit_score(credit_score: i32) -> Rate {
    credit_tier(credit_score).base_rate()
}

/// Vehicle category a quote applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RvCategory {
    #[serde(rename = "New RV")]
    NewRv,
    #[serde(rename = "Used RV")]
    UsedRv,
}

/// Market rates for one category across the three quoted credit bands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateQuote {
    pub category: RvCategory,
    pub excellent_rate: Rate,
    pub good_rate: Rate,
    pub fair_rate: Rate,
}

fn base_quotes() -> [RateQuote; 2] {
    [
        RateQuote {
            category: RvCategory::NewRv,
            excellent_rate: dec!(6.99),
            good_rate: dec!(7.99),
            fair_rate: dec!(9.99),
        },
        RateQuote {
            category: RvCategory::UsedRv,
            excellent_rate: dec!(7.99),
            good_rate: dec!(8.99),
            fair_rate: dec!(10.99),
        },
    ]
}

/// Comparative market quotes adjusted for the borrower's credit score.
///
/// Always two quotes, New RV first and Used RV second; callers index by
/// position.
pub fn comparative_rates(credit_score: i32) -> Vec<RateQuote> {
    let (excellent_bump, good_bump) = if credit_score >= EXCELLENT_MIN_SCORE {
        (Decimal::ZERO, Decimal::ZERO)
    } else if credit_score >= GOOD_MIN_SCORE {
        (dec!(0.5), Decimal::ZERO)
    } else {
        (dec!(1.0), dec!(0.5))
    };

    base_quotes()
        .into_iter()
        .map(|quote| RateQuote {
            excellent_rate: quote.excellent_rate + excellent_bump,
            good_rate: quote.good_rate + good_bump,
            ..quote
        })
        .collect()
}
