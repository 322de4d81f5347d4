use rust_decimal::Decimal;
use std::fmt;

/// Represents the side of the order book a level belongs to.
///
/// - `Bid` represents buy interest (demand side)
/// - `Ask` represents sell interest (supply side)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Buy side: interest to purchase at a given price
    Bid,
    /// Sell side: interest to sell at a given price
    Ask,
}

impl fmt::Display for Side {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Bid => write!(formatter, "bid"),
            Side::Ask => write!(formatter, "ask"),
        }
    }
}

/// A single price point on one side of the book.
///
/// `cumulative_size` is populated only by queries that request cumulative
/// aggregation; it is the running sum of sizes from the best level down to
/// and including this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    /// The price of this level, rounded to the book's price precision
    pub price: Decimal,
    /// The resting (non-cumulative) volume at this price
    pub size: Decimal,
    /// Running sum of sizes from the best level through this one, when requested
    pub cumulative_size: Option<Decimal>,
}

impl Level {
    /// Creates a level with no cumulative size attached.
    pub fn new(price: Decimal, size: Decimal) -> Self {
        Self {
            price,
            size,
            cumulative_size: None,
        }
    }

    /// Creates a level carrying a cumulative size.
    pub fn with_cumulative(price: Decimal, size: Decimal, cumulative_size: Decimal) -> Self {
        Self {
            price,
            size,
            cumulative_size: Some(cumulative_size),
        }
    }
}

impl fmt::Display for Level {
    /// Formats as `price/size`, or `price/size/cumulative_size` when the
    /// cumulative size is populated.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cumulative_size {
            Some(cumulative_size) => {
                write!(formatter, "{}/{}/{}", self.price, self.size, cumulative_size)
            }
            None => write!(formatter, "{}/{}", self.price, self.size),
        }
    }
}

/// A snapshot of the top of the book: best bid and best ask with their sizes.
///
/// All four values are rounded to the book's configured precisions at the
/// time the snapshot is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidAsk {
    /// Lowest ask price on the book
    pub ask_price: Decimal,
    /// Resting size at the best ask
    pub ask_size: Decimal,
    /// Highest bid price on the book
    pub bid_price: Decimal,
    /// Resting size at the best bid
    pub bid_size: Decimal,
}

impl BidAsk {
    /// The mid price, `(bid_price + ask_price) / 2`.
    ///
    /// Computed on read from the snapshot's prices and not rounded to the
    /// price precision, so a book with integer prices still reports a
    /// half-tick mid.
    pub fn mid_price(&self) -> Decimal {
        (self.bid_price + self.ask_price) / Decimal::TWO
    }
}

impl fmt::Display for BidAsk {
    /// Formats as `bid_price/bid_size-ask_price/ask_size`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}/{}-{}/{}",
            self.bid_price, self.bid_size, self.ask_price, self.ask_size
        )
    }
}
