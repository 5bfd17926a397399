//! RV loan calculation engine.
//!
//! Pure functions over immutable value types: credit-tier rate lookup,
//! fixed monthly payment, month-by-month amortization, and reductions of a
//! schedule into summary figures. The engine is a calculator, not a
//! validator: any configuration produces deterministic arithmetic, and
//! plausibility checks are left to callers (the `form` helpers and the
//! warnings attached by `analysis::analyze_loan`).

pub mod aggregate;
pub mod error;
pub mod loan;
pub mod payment;
pub mod rates;
pub mod schedule;
pub mod time_value;
pub mod types;

#[cfg(feature = "presentation")]
pub mod presentation;

#[cfg(feature = "presentation")]
pub mod analysis;

#[cfg(feature = "form")]
pub mod form;

pub use error::RvLoanError;
pub use loan::LoanConfiguration;
pub use schedule::PaymentRecord;
pub use types::*;

/// Standard result type for the crate's fallible boundaries
pub type RvLoanResult<T> = Result<T, RvLoanError>;
