use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons a net price cannot be priced.
///
/// [`calculate`](super::calculate) folds all of these into `None`; use
/// [`try_price_text`](super::try_price_text) to keep the reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PricingError {
    /// The net price field is empty or whitespace only.
    #[error("net price is empty")]
    Empty,

    /// The text is not a decimal number.
    #[error("net price '{0}' is not a number")]
    NotANumber(String),

    /// The net price is zero or negative.
    #[error("net price must be greater than zero, got {0}")]
    NonPositive(Decimal),

    /// The net price, or an amount derived from it, is too large for
    /// decimal arithmetic.
    #[error("net price {0} is too large to price")]
    Overflow(String),
}
