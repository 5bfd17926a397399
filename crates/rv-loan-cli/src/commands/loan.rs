use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::fs;
use tabled::{builder::Builder, Table};
use tracing::info;

use rv_loan_core::aggregate;
use rv_loan_core::analysis;
use rv_loan_core::form;
use rv_loan_core::loan::{self, LoanConfiguration};
use rv_loan_core::payment;
use rv_loan_core::presentation::{self, ScheduleDocument};
use rv_loan_core::schedule;

use crate::input;

/// Loan configuration, from a JSON file, piped JSON, or flags
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct LoanArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// RV price
    #[arg(long)]
    pub price: Option<Decimal>,

    /// Down payment
    #[arg(long)]
    pub down_payment: Option<Decimal>,

    /// Trade-in value
    #[arg(long, alias = "trade-in-value")]
    pub trade_in: Option<Decimal>,

    /// Loan term in months (12, 24, ... 120, 180, 240); other terms are
    /// rejected whichever way the configuration is supplied
    #[arg(long)]
    pub term: Option<u32>,

    /// Annual interest rate in percent; seeded from the credit score if omitted
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Credit score
    #[arg(long)]
    pub credit_score: Option<i32>,

    /// Clamp inputs the way the calculator form does before computing
    #[arg(long)]
    pub normalize: bool,
}

/// Arguments for the amortization schedule
#[derive(Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub loan: LoanArgs,

    /// Show every month instead of the first three
    #[arg(long)]
    pub all: bool,
}

/// Arguments for the printable export
#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub loan: LoanArgs,

    /// Write the printable schedule to this file instead of returning it
    #[arg(long)]
    pub out: Option<String>,
}

fn resolve_config(args: &LoanArgs) -> Result<LoanConfiguration, Box<dyn std::error::Error>> {
    let config: LoanConfiguration = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        config_from_flags(args)
    };

    loan::check_term(config.loan_term_months)?;

    Ok(if args.normalize {
        form::normalize(&config)
    } else {
        config
    })
}

/// Flags over the reset defaults; without `--rate` the rate follows the
/// credit score the same way the calculator form re-seeds it.
fn config_from_flags(args: &LoanArgs) -> LoanConfiguration {
    let defaults = LoanConfiguration::default();
    let base = LoanConfiguration {
        price: args.price.unwrap_or(defaults.price),
        down_payment: args.down_payment.unwrap_or(defaults.down_payment),
        trade_in_value: args.trade_in.unwrap_or(defaults.trade_in_value),
        loan_term_months: args.term.unwrap_or(defaults.loan_term_months),
        ..defaults
    };
    let seeded = form::apply_credit_score(&base, args.credit_score.unwrap_or(base.credit_score));

    match args.rate {
        Some(rate) => LoanConfiguration {
            annual_interest_rate_percent: rate,
            ..seeded
        },
        None => seeded,
    }
}

pub fn run_payment(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let config = resolve_config(&args)?;
    Ok(json!({
        "monthly_payment": payment::monthly_payment(&config),
        "amount_to_finance": config.financed_amount(),
        "monthly_rate": config.monthly_rate(),
        "loan_term_months": config.loan_term_months,
    }))
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let config = resolve_config(&args.loan)?;
    let full = schedule::amortization_schedule(&config);
    let rows = presentation::schedule_rows(&full, args.all);
    Ok(serde_json::to_value(rows)?)
}

pub fn run_summary(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let config = resolve_config(&args)?;
    Ok(serde_json::to_value(aggregate::summarize(&config))?)
}

pub fn run_chart(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let config = resolve_config(&args)?;
    let full = schedule::amortization_schedule(&config);
    let points = presentation::chart_series(&config, &full);
    Ok(json!({
        "totals": presentation::chart_totals(&points),
        "results": points,
    }))
}

pub fn run_analyze(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let config = resolve_config(&args)?;
    Ok(serde_json::to_value(analysis::analyze_loan(&config))?)
}

pub fn run_export(args: ExportArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let config = resolve_config(&args.loan)?;
    let full = schedule::amortization_schedule(&config);
    let document = presentation::export_document(&config, &full);

    match args.out {
        Some(path) => {
            fs::write(&path, render_document(&document))
                .map_err(|e| format!("Failed to write '{}': {}", path, e))?;
            info!(path = %path, rows = document.rows.len(), "wrote amortization schedule");
            Ok(json!({ "path": path, "rows": document.rows.len() }))
        }
        None => Ok(serde_json::to_value(document)?),
    }
}

/// Plain-text printable form of the schedule: title, header lines, table.
fn render_document(doc: &ScheduleDocument) -> String {
    let h = &doc.header;
    let mut out = String::new();
    out.push_str(&doc.title);
    out.push_str("\n\n");
    out.push_str(&format!("RV Price: ${}\n", h.price));
    out.push_str(&format!("Down Payment: ${}\n", h.down_payment));
    out.push_str(&format!("Trade-In Value: ${}\n", h.trade_in_value));
    out.push_str(&format!("Interest Rate: {}%\n", h.interest_rate_percent));
    out.push_str(&format!("Loan Term: {} months\n\n", h.loan_term_months));

    let mut builder = Builder::default();
    builder.push_record(["Month", "Payment", "Principal", "Interest", "Balance"]);
    for row in &doc.rows {
        builder.push_record([
            row.month.to_string(),
            format!("${}", row.payment),
            format!("${}", row.principal),
            format!("${}", row.interest),
            format!("${}", row.balance),
        ]);
    }
    out.push_str(&Table::from(builder).to_string());
    out.push('\n');
    out
}
