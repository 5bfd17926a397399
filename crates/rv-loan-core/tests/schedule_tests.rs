use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use rv_loan_core::aggregate::{
    cumulative_interest_through, principal_paid_through, total_interest,
};
use rv_loan_core::loan::LOAN_TERM_OPTIONS;
use rv_loan_core::payment::monthly_payment;
use rv_loan_core::schedule::amortization_schedule;
use rv_loan_core::LoanConfiguration;

// ===========================================================================
// Fixtures
// ===========================================================================

fn ten_year_excellent() -> LoanConfiguration {
    LoanConfiguration {
        price: dec!(50000),
        down_payment: dec!(10000),
        trade_in_value: dec!(0),
        loan_term_months: 120,
        annual_interest_rate_percent: dec!(6.99),
        credit_score: 750,
    }
}

fn over_financed() -> LoanConfiguration {
    // Down payment + trade-in exceed the price by 3000
    LoanConfiguration {
        price: dec!(10000),
        down_payment: dec!(8000),
        trade_in_value: dec!(5000),
        loan_term_months: 60,
        annual_interest_rate_percent: dec!(5.0),
        credit_score: 700,
    }
}

fn within_relative(actual: Decimal, expected: Decimal, tolerance: Decimal) -> bool {
    let scale = expected.abs().max(Decimal::ONE);
    (actual - expected).abs() <= tolerance * scale
}

// ===========================================================================
// Shape
// ===========================================================================

#[test]
fn test_schedule_length_equals_term_for_every_offered_term() {
    for term in LOAN_TERM_OPTIONS {
        for rate in [dec!(0), dec!(6.99), dec!(30)] {
            let cfg = LoanConfiguration {
                loan_term_months: term,
                annual_interest_rate_percent: rate,
                ..ten_year_excellent()
            };
            assert_eq!(amortization_schedule(&cfg).len(), term as usize);
        }
    }
}

#[test]
fn test_single_month_term() {
    let cfg = LoanConfiguration {
        loan_term_months: 1,
        ..ten_year_excellent()
    };
    let schedule = amortization_schedule(&cfg);
    assert_eq!(schedule.len(), 1);
    // 40000 plus one month of interest (233)
    assert!((schedule[0].payment_amount - dec!(40233)).abs() < dec!(0.000001));
    assert!(schedule[0].remaining_balance_after_payment < dec!(0.000001));
}

// ===========================================================================
// Per-record invariants
// ===========================================================================

#[test]
fn test_principal_plus_interest_equals_payment() {
    for cfg in [ten_year_excellent(), over_financed()] {
        let payment = monthly_payment(&cfg);
        for record in amortization_schedule(&cfg) {
            assert_eq!(record.payment_amount, payment);
            let sum = record.principal_portion + record.interest_portion;
            assert!(
                within_relative(sum, payment, dec!(0.000000001)),
                "month {}: {} != {}",
                record.month,
                sum,
                payment
            );
        }
    }
}

#[test]
fn test_zero_rate_has_no_interest_and_constant_principal() {
    let cfg = LoanConfiguration {
        annual_interest_rate_percent: dec!(0),
        ..ten_year_excellent()
    };
    let expected_principal = dec!(40000) / dec!(120);
    for record in amortization_schedule(&cfg) {
        assert_eq!(record.interest_portion, Decimal::ZERO);
        assert_eq!(record.principal_portion, expected_principal);
    }
}

#[test]
fn test_balance_non_increasing_and_paid_off() {
    let schedule = amortization_schedule(&ten_year_excellent());
    for pair in schedule.windows(2) {
        assert!(
            pair[1].remaining_balance_after_payment <= pair[0].remaining_balance_after_payment,
            "balance rose at month {}",
            pair[1].month
        );
    }
    let last = schedule.last().unwrap();
    assert!(last.remaining_balance_after_payment < dec!(0.000001));
}

// ===========================================================================
// End-to-end scenarios
// ===========================================================================

#[test]
fn test_end_to_end_ten_year_loan() {
    let cfg = ten_year_excellent();
    assert_eq!(cfg.financed_amount(), dec!(40000));
    assert_eq!(cfg.monthly_rate(), dec!(0.005825));

    let payment = monthly_payment(&cfg);
    assert!((payment - dec!(464.23)).abs() < dec!(0.01), "payment {payment}");

    let schedule = amortization_schedule(&cfg);
    assert_eq!(schedule.len(), 120);

    let interest = total_interest(&schedule);
    let expected = dec!(120) * payment - dec!(40000);
    assert!((interest - expected).abs() < dec!(0.000001), "{interest} vs {expected}");
}

#[test]
fn test_end_to_end_negative_financed_amount() {
    let cfg = over_financed();
    assert_eq!(cfg.financed_amount(), dec!(-3000));

    let payment = monthly_payment(&cfg);
    assert!(payment < Decimal::ZERO);

    let schedule = amortization_schedule(&cfg);
    assert_eq!(schedule.len(), 60);
}

// ===========================================================================
// Floored display balance vs unfloored running balance
// ===========================================================================

#[test]
fn test_floored_balance_does_not_feed_back_into_interest() {
    let cfg = over_financed();
    let schedule = amortization_schedule(&cfg);
    let rate = cfg.monthly_rate();

    // Every emitted balance before the last is floored at zero...
    assert!(schedule[..59]
        .iter()
        .all(|r| r.remaining_balance_after_payment == Decimal::ZERO));

    // ...but interest keeps accruing on the negative running balance.
    assert_eq!(schedule[0].interest_portion, dec!(-3000) * rate);
    let running_after_first = dec!(-3000) - schedule[0].principal_portion;
    assert_eq!(schedule[1].interest_portion, running_after_first * rate);
    assert!(schedule[1].interest_portion < Decimal::ZERO);
}

// ===========================================================================
// Checkpoints
// ===========================================================================

#[test]
fn test_yearly_checkpoints_are_consistent() {
    let cfg = ten_year_excellent();
    let schedule = amortization_schedule(&cfg);

    let mut previous_interest = Decimal::ZERO;
    let mut previous_principal = Decimal::ZERO;
    for year in 1..=10u32 {
        let month = year * 12;
        let interest = cumulative_interest_through(&schedule, month);
        let principal = principal_paid_through(&cfg, &schedule, month);
        assert!(interest > previous_interest);
        assert!(principal > previous_principal);
        previous_interest = interest;
        previous_principal = principal;
    }

    assert_eq!(
        cumulative_interest_through(&schedule, 120),
        total_interest(&schedule)
    );
    assert!((previous_principal - dec!(40000)).abs() < dec!(0.000001));
}
