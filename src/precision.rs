use crate::error::BookError;
use rust_decimal::Decimal;

/// Per-instrument rounding configuration: how many decimal places are
/// retained in prices and sizes.
///
/// Fixed at book construction; every stored and returned price/size is
/// rounded through this configuration. Rounding uses banker's rounding
/// (`Decimal::round_dp`), so midpoints round to the nearest even digit.
///
/// ## Examples
///
/// ```
/// use depth_book::Precision;
/// use rust_decimal::Decimal;
///
/// let precision = Precision::new(1, 0).unwrap();
/// assert_eq!(precision.round_price(Decimal::new(10025, 2)), Decimal::new(1002, 1)); // 100.25 -> 100.2
/// assert_eq!(precision.round_size(Decimal::new(35, 1)), Decimal::from(4)); // 3.5 -> 4
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    price_dp: u32,
    size_dp: u32,
}

impl Precision {
    /// The largest number of decimal places a `Decimal` can represent.
    pub const MAX_DECIMAL_PLACES: u32 = 28;

    /// Creates a precision configuration, rejecting decimal-place counts
    /// beyond what `Decimal` can represent.
    pub fn new(price_dp: u32, size_dp: u32) -> Result<Self, BookError> {
        for digits in [price_dp, size_dp] {
            if digits > Self::MAX_DECIMAL_PLACES {
                return Err(BookError::InvalidPrecision { digits });
            }
        }
        Ok(Self { price_dp, size_dp })
    }

    /// Rounds a price to the configured number of decimal places.
    pub fn round_price(&self, price: Decimal) -> Decimal {
        price.round_dp(self.price_dp)
    }

    /// Rounds a size to the configured number of decimal places.
    pub fn round_size(&self, size: Decimal) -> Decimal {
        size.round_dp(self.size_dp)
    }

    /// Decimal places retained in prices.
    pub fn price_dp(&self) -> u32 {
        self.price_dp
    }

    /// Decimal places retained in sizes.
    pub fn size_dp(&self) -> u32 {
        self.size_dp
    }
}
