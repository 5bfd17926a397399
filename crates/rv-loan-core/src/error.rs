use thiserror::Error;

/// Errors raised at the crate's non-financial boundaries (decoding and
/// strict argument checks). Loan arithmetic itself never fails.
#[derive(Debug, Error)]
pub enum RvLoanError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for RvLoanError {
    fn from(e: serde_json::Error) -> Self {
        RvLoanError::SerializationError(e.to_string())
    }
}
