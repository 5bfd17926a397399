//! Month-by-month amortization schedule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::loan::LoanConfiguration;
use crate::payment::monthly_payment;
use crate::types::Money;

/// One scheduled monthly payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Month number, starting at 1.
    pub month: u32,
    /// Fixed payment for the month.
    pub payment_amount: Money,
    /// Part of the payment that reduces the balance.
    pub principal_portion: Money,
    /// Interest accrued on the balance before this payment.
    pub interest_portion: Money,
    /// Balance after the payment, floored at zero.
    pub remaining_balance_after_payment: Money,
}

/// Build the full amortization schedule, one record per month of the term.
///
/// The running balance is folded forward unfloored: only the emitted
/// `remaining_balance_after_payment` is clamped at zero, so a balance that
/// dips below zero still drives the following months' interest.
pub fn amortization_schedule(config: &LoanConfiguration) -> Vec<PaymentRecord> {
    let payment = monthly_payment(config);
    let rate = config.monthly_rate();

    let schedule: Vec<PaymentRecord> = (1..=config.loan_term_months)
        .scan(config.financed_amount(), |balance, month| {
            let interest_portion = *balance * rate;
            let principal_portion = payment - interest_portion;
            *balance -= principal_portion;
            Some(PaymentRecord {
                month,
                payment_amount: payment,
                principal_portion,
                interest_portion,
                remaining_balance_after_payment: (*balance).max(Decimal::ZERO),
            })
        })
        .collect();

    debug!(records = schedule.len(), "generated amortization schedule");
    schedule
}
