//! Reductions over a generated schedule.
//!
//! Sums are taken at full precision; rounding to currency units is a
//! display concern (see `presentation::round_currency`).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::loan::LoanConfiguration;
use crate::payment::monthly_payment;
use crate::rates::{credit_tier, CreditTier};
use crate::schedule::{amortization_schedule, PaymentRecord};
use crate::types::Money;

/// Headline figures for a loan, as shown next to the payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanSummary {
    /// Price less down payment and trade-in.
    pub amount_to_finance: Money,
    pub monthly_payment: Money,
    pub total_interest: Money,
    /// Principal repaid over the life of the loan (the amount financed).
    pub total_principal_paid: Money,
    /// Principal plus interest.
    pub total_cost: Money,
    /// Sum of every scheduled payment.
    pub total_of_payments: Money,
    /// Sum of the principal portions actually scheduled; differs from the
    /// amount financed only by the residue left in the final balance.
    pub principal_repaid: Money,
    pub loan_term_months: u32,
    pub credit_tier: CreditTier,
}

/// Total interest over the whole schedule.
pub fn total_interest(schedule: &[PaymentRecord]) -> Money {
    schedule
        .iter()
        .fold(Decimal::ZERO, |acc, record| acc + record.interest_portion)
}

/// Total of the principal portions over the whole schedule.
pub fn total_principal(schedule: &[PaymentRecord]) -> Money {
    schedule
        .iter()
        .fold(Decimal::ZERO, |acc, record| acc + record.principal_portion)
}

/// Total of all payments over the whole schedule.
pub fn total_paid(schedule: &[PaymentRecord]) -> Money {
    schedule
        .iter()
        .fold(Decimal::ZERO, |acc, record| acc + record.payment_amount)
}

/// Interest paid in months `1..=month`.
///
/// Month 0 sums nothing; months past the end of the schedule cover it all.
pub fn cumulative_interest_through(schedule: &[PaymentRecord], month: u32) -> Money {
    total_interest(&schedule[..months_covered(schedule, month)])
}

/// Principal paid down after `month`: financed amount less the remaining
/// balance reported for that month.
///
/// Month 0 (or an empty schedule) is before any payment and yields zero;
/// months past the end use the final record.
pub fn principal_paid_through(
    config: &LoanConfiguration,
    schedule: &[PaymentRecord],
    month: u32,
) -> Money {
    match months_covered(schedule, month) {
        0 => Decimal::ZERO,
        n => config.financed_amount() - schedule[n - 1].remaining_balance_after_payment,
    }
}

fn months_covered(schedule: &[PaymentRecord], month: u32) -> usize {
    (month as usize).min(schedule.len())
}

/// Compute the payment, schedule and headline totals for a configuration.
pub fn summarize(config: &LoanConfiguration) -> LoanSummary {
    let schedule = amortization_schedule(config);
    summarize_schedule(config, &schedule)
}

/// Headline totals for an already generated schedule.
pub fn summarize_schedule(config: &LoanConfiguration, schedule: &[PaymentRecord]) -> LoanSummary {
    let amount_to_finance = config.financed_amount();
    let total_interest = total_interest(schedule);
    LoanSummary {
        amount_to_finance,
        monthly_payment: monthly_payment(config),
        total_interest,
        total_principal_paid: amount_to_finance,
        total_cost: amount_to_finance + total_interest,
        total_of_payments: total_paid(schedule),
        principal_repaid: total_principal(schedule),
        loan_term_months: config.loan_term_months,
        credit_tier: credit_tier(config.credit_score),
    }
}
