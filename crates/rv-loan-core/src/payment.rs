//! Fixed monthly payment for a loan configuration.

use tracing::debug;

use crate::loan::LoanConfiguration;
use crate::time_value;
use crate::types::Money;

/// Fixed monthly payment that amortizes the financed amount over the term.
///
/// Uses the standard annuity formula, or `principal / n` when the rate is
/// zero. No rounding is applied; a negative financed amount yields a
/// negative payment.
pub fn monthly_payment(config: &LoanConfiguration) -> Money {
    let principal = config.financed_amount();
    let payment = time_value::level_payment(
        principal,
        config.monthly_rate(),
        config.loan_term_months,
    );
    debug!(
        %principal,
        term = config.loan_term_months,
        rate = %config.annual_interest_rate_percent,
        %payment,
        "computed monthly payment"
    );
    payment
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn config(price: Decimal, down: Decimal, trade: Decimal, term: u32, rate: Decimal) -> LoanConfiguration {
        LoanConfiguration {
            price,
            down_payment: down,
            trade_in_value: trade,
            loan_term_months: term,
            annual_interest_rate_percent: rate,
            credit_score: 750,
        }
    }

    #[test]
    fn test_ten_year_loan_at_excellent_rate() {
        let cfg = config(dec!(50000), dec!(10000), dec!(0), 120, dec!(6.99));
        let pmt = monthly_payment(&cfg);
        // 40000 * 0.005825 * 1.005825^120 / (1.005825^120 - 1) ≈ 464.2278
        assert!((pmt - dec!(464.2278)).abs() < dec!(0.0001), "got {pmt}");
    }

    #[test]
    fn test_zero_rate_divides_evenly() {
        let cfg = config(dec!(36000), dec!(0), dec!(0), 36, dec!(0));
        assert_eq!(monthly_payment(&cfg), dec!(1000));
    }

    #[test]
    fn test_trade_in_reduces_payment() {
        let without = monthly_payment(&config(dec!(50000), dec!(5000), dec!(0), 60, dec!(7.99)));
        let with = monthly_payment(&config(dec!(50000), dec!(5000), dec!(10000), 60, dec!(7.99)));
        assert!(with < without);
    }

    #[test]
    fn test_negative_principal_gives_negative_payment() {
        let cfg = config(dec!(10000), dec!(8000), dec!(5000), 60, dec!(5.0));
        let pmt = monthly_payment(&cfg);
        // -3000 over 60 months at 5%: ≈ -56.6137
        assert!((pmt - dec!(-56.6137)).abs() < dec!(0.0001), "got {pmt}");
    }

    #[test]
    fn test_zero_financed_amount_pays_nothing() {
        let cfg = config(dec!(20000), dec!(15000), dec!(5000), 48, dec!(9.99));
        assert_eq!(monthly_payment(&cfg), Decimal::ZERO);
    }
}
