//! Error types for the order book.

use crate::precision::Precision;
use crate::types::Side;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors reported by [`OrderBook`](crate::OrderBook) operations.
///
/// None of these leave the book in a partially mutated state: a failed
/// operation leaves both sides exactly as they were.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookError {
    /// A best-price query ran against a side with no levels.
    #[error("no resting levels on the {0} side")]
    EmptySide(Side),

    /// An update required an existing level, but no level rests at the
    /// rounded price.
    #[error("no {side} level at price {price}")]
    LevelNotFound { side: Side, price: Decimal },

    /// A negative size was supplied; resting volume must be non-negative.
    #[error("negative size {size} is not a valid resting volume")]
    NegativeSize { size: Decimal },

    /// A precision beyond `Decimal`'s representable scale was requested.
    #[error("precision of {digits} decimal places exceeds the supported maximum of {max}", max = Precision::MAX_DECIMAL_PLACES)]
    InvalidPrecision { digits: u32 },
}
