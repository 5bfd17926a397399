use napi::Result as NapiResult;
use napi_derive::napi;

use rv_loan_core::LoanConfiguration;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_config(config_json: &str) -> NapiResult<LoanConfiguration> {
    LoanConfiguration::from_json(config_json).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Payment and schedule
// ---------------------------------------------------------------------------

#[napi]
pub fn monthly_payment(config_json: String) -> NapiResult<String> {
    let config = parse_config(&config_json)?;
    let payment = rv_loan_core::payment::monthly_payment(&config);
    serde_json::to_string(&payment).map_err(to_napi_error)
}

#[napi]
pub fn amortization_schedule(config_json: String) -> NapiResult<String> {
    let config = parse_config(&config_json)?;
    let schedule = rv_loan_core::schedule::amortization_schedule(&config);
    serde_json::to_string(&schedule).map_err(to_napi_error)
}

#[napi]
pub fn loan_summary(config_json: String) -> NapiResult<String> {
    let config = parse_config(&config_json)?;
    let summary = rv_loan_core::aggregate::summarize(&config);
    serde_json::to_string(&summary).map_err(to_napi_error)
}

#[napi]
pub fn analyze_loan(config_json: String) -> NapiResult<String> {
    let config = parse_config(&config_json)?;
    let output = rv_loan_core::analysis::analyze_loan(&config);
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Rates
// ---------------------------------------------------------------------------

#[napi]
pub fn rate_for_credit_score(credit_score: i32) -> NapiResult<String> {
    let rate = rv_loan_core::rates::rate_for_credit_score(credit_score);
    serde_json::to_string(&rate).map_err(to_napi_error)
}

#[napi]
pub fn comparative_rates(credit_score: i32) -> NapiResult<String> {
    let quotes = rv_loan_core::rates::comparative_rates(credit_score);
    serde_json::to_string(&quotes).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Presentation data
// ---------------------------------------------------------------------------

#[napi]
pub fn chart_series(config_json: String) -> NapiResult<String> {
    let config = parse_config(&config_json)?;
    let schedule = rv_loan_core::schedule::amortization_schedule(&config);
    let points = rv_loan_core::presentation::chart_series(&config, &schedule);
    serde_json::to_string(&points).map_err(to_napi_error)
}

#[napi]
pub fn export_document(config_json: String) -> NapiResult<String> {
    let config = parse_config(&config_json)?;
    let schedule = rv_loan_core::schedule::amortization_schedule(&config);
    let document = rv_loan_core::presentation::export_document(&config, &schedule);
    serde_json::to_string(&document).map_err(to_napi_error)
}
