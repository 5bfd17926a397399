//! Data views for the chart, table and printable export.
//!
//! Nothing here draws or lays anything out; these functions only shape a
//! schedule into what those collaborators consume.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::aggregate::{cumulative_interest_through, principal_paid_through};
use crate::loan::{LoanConfiguration, LOAN_TERM_OPTIONS};
use crate::schedule::PaymentRecord;
use crate::types::Money;

/// Records shown before the table is expanded.
pub const TABLE_PREVIEW_ROWS: usize = 3;

/// Chart sampling interval, in records.
pub const CHART_SAMPLE_INTERVAL: usize = 12;

pub const EXPORT_TITLE: &str = "RV Loan Amortization Schedule";

pub const EXPORT_FILE_STEM: &str = "rv-loan-amortization";

// ---------------------------------------------------------------------------
// Chart
// ---------------------------------------------------------------------------

/// One sampled point of the balance / principal / interest time series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub month: u32,
    pub balance: Money,
    /// Cumulative principal paid through `month`.
    pub principal_paid: Money,
    /// Cumulative interest paid through `month`.
    pub interest_paid: Money,
}

/// Totals read off the final chart point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartTotals {
    pub total_paid: Money,
    pub principal_paid: Money,
    pub interest_paid: Money,
}

/// Sample the schedule every 12th record (months 1, 13, 25, ...) plus the
/// final record.
pub fn chart_series(config: &LoanConfiguration, schedule: &[PaymentRecord]) -> Vec<ChartPoint> {
    let last = schedule.len().saturating_sub(1);
    schedule
        .iter()
        .enumerate()
        .filter(|(idx, _)| idx % CHART_SAMPLE_INTERVAL == 0 || *idx == last)
        .map(|(_, record)| ChartPoint {
            month: record.month,
            balance: record.remaining_balance_after_payment,
            principal_paid: principal_paid_through(config, schedule, record.month),
            interest_paid: cumulative_interest_through(schedule, record.month),
        })
        .collect()
}

/// Totals at the end of the series; all zero for an empty series.
pub fn chart_totals(points: &[ChartPoint]) -> ChartTotals {
    match points.last() {
        Some(p) => ChartTotals {
            total_paid: p.principal_paid + p.interest_paid,
            principal_paid: p.principal_paid,
            interest_paid: p.interest_paid,
        },
        None => ChartTotals {
            total_paid: Decimal::ZERO,
            principal_paid: Decimal::ZERO,
            interest_paid: Decimal::ZERO,
        },
    }
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// Rows to display: the first few unless the table is expanded.
pub fn schedule_rows(schedule: &[PaymentRecord], expanded: bool) -> &[PaymentRecord] {
    if expanded {
        schedule
    } else {
        &schedule[..schedule.len().min(TABLE_PREVIEW_ROWS)]
    }
}

/// Selectable term with its label, e.g. "120 months (10 years)".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermOption {
    pub months: u32,
    pub years: u32,
    pub label: String,
}

pub fn loan_terms() -> Vec<TermOption> {
    LOAN_TERM_OPTIONS
        .iter()
        .map(|&months| TermOption {
            months,
            years: months / 12,
            label: format!("{} months ({} years)", months, months / 12),
        })
        .collect()
}

/// Round to whole currency units, halves away from zero.
pub fn round_currency(value: Money) -> Money {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

/// Configuration fields printed above the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportHeader {
    pub price: Money,
    pub down_payment: Money,
    pub trade_in_value: Money,
    pub interest_rate_percent: Decimal,
    pub loan_term_months: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    pub month: u32,
    pub payment: Money,
    pub principal: Money,
    pub interest: Money,
    pub balance: Money,
}

/// Printable amortization schedule with currency rounded for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDocument {
    pub title: String,
    pub file_stem: String,
    pub header: ExportHeader,
    pub rows: Vec<ExportRow>,
}

pub fn export_document(config: &LoanConfiguration, schedule: &[PaymentRecord]) -> ScheduleDocument {
    ScheduleDocument {
        title: EXPORT_TITLE.to_string(),
        file_stem: EXPORT_FILE_STEM.to_string(),
        header: ExportHeader {
            price: round_currency(config.price),
            down_payment: round_currency(config.down_payment),
            trade_in_value: round_currency(config.trade_in_value),
            interest_rate_percent: config.annual_interest_rate_percent,
            loan_term_months: config.loan_term_months,
        },
        rows: schedule
            .iter()
            .map(|r| ExportRow {
                month: r.month,
                payment: round_currency(r.payment_amount),
                principal: round_currency(r.principal_portion),
                interest: round_currency(r.interest_portion),
                balance: round_currency(r.remaining_balance_after_payment),
            })
            .collect(),
    }
}
