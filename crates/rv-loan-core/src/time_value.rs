use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::types::{Money, Rate};

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);

/// Monthly periodic rate from an annual percentage rate (6.99 -> 0.005825)
pub fn monthly_rate(annual_rate_percent: Decimal) -> Rate {
    annual_rate_percent / PERCENT / MONTHS_PER_YEAR
}

/// Compound factor `(1 + rate)^nper`, or `None` once it leaves the 128-bit
/// decimal range.
pub fn compound_factor(rate: Rate, nper: u32) -> Option<Decimal> {
    (Decimal::ONE + rate).checked_powu(u64::from(nper))
}

/// Level payment that fully amortizes `principal` over `nper` periods.
///
/// Evaluates `P * r * (1+r)^n / ((1+r)^n - 1)` with the ratio taken first so
/// large factors cannot overflow the product. Never fails:
/// - `nper == 0` pays nothing
/// - a zero rate amortizes linearly (`P / n`)
/// - an overflowing factor uses the limit `P * r`
/// - a vanishing denominator falls back to `P / n`
pub fn level_payment(principal: Money, rate: Rate, nper: u32) -> Money {
    if nper == 0 {
        return Decimal::ZERO;
    }
    let n = Decimal::from(nper);

    if rate.is_zero() {
        return principal / n;
    }

    let Some(factor) = compound_factor(rate, nper) else {
        return principal * rate;
    };

    match factor.checked_div(factor - Decimal::ONE) {
        Some(ratio) => principal * rate * ratio,
        None => principal / n,
    }
}
