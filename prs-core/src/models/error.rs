use super::DateTime;
use rust_decimal::Decimal;

/// Errors that can occur when constructing or validating a model value.
///
/// Every smart constructor in [`crate::models`] reports its failure through this
/// type; an invalid value is never silently coerced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// An identifier was zero or negative
    #[error("{field} must be a positive number, got {value}")]
    NonPositiveId {
        /// Human readable name of the identifier
        field: &'static str,
        /// The rejected value
        value: i64,
    },
    /// A priority was negative
    #[error("Priority cannot be negative, got {0}")]
    NegativePriority(i64),
    /// A money amount was zero or negative
    #[error("Price must be greater than zero, got {0}")]
    NonPositiveAmount(Decimal),
    /// A currency code was empty or whitespace
    #[error("Currency cannot be blank")]
    BlankCurrency,
    /// A validity window ends before it starts
    #[error("Start date {start} cannot be after end date {end}")]
    InvertedWindow {
        /// The requested start of the window
        start: DateTime,
        /// The requested end of the window
        end: DateTime,
    },
}
