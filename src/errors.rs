//! Error types for the promptpay-qr library.
//!
//! Every structural violation is raised synchronously at the point of the
//! offending input and carries the human-readable field name and the
//! constraint that was broken.

use thiserror::Error;

/// Main error type for payload construction and rendering.
#[derive(Error, Debug)]
pub enum PromptPayError {
    /// Field value contains a character that is not an ASCII digit,
    /// or is empty
    #[error("{0} must contain only digits")]
    NotNumeric(String),

    /// Field value contains a character that is not an ASCII letter or
    /// digit, or is empty
    #[error("{0} must contain only ASCII letters and digits")]
    NotAlphanumeric(String),

    /// Field value exceeds its maximum length
    #[error("{field} must not be more than {max} character(s)")]
    TooLong { field: String, max: usize },

    /// Amount is negative
    #[error("Amount must not be negative")]
    NegativeAmount,

    /// Amount carries more than two fractional digits
    #[error("Amount must have at most two decimal places")]
    AmountPrecision,

    /// The bill-payment text profile was selected for a credit transfer,
    /// which has no defined encoding in that profile
    #[error("the bill-payment text profile has no encoding for credit transfer")]
    BotProfileUnsupported,

    /// Error forwarded from the QR imaging collaborator
    #[error("QR rendering failed: {0}")]
    Render(String),
}

/// Result type alias for promptpay-qr operations.
pub type Result<T> = std::result::Result<T, PromptPayError>;

impl From<qr_code::types::QrError> for PromptPayError {
    fn from(err: qr_code::types::QrError) -> Self {
        PromptPayError::Render(err.to_string())
    }
}
