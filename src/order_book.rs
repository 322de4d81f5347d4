use crate::error::BookError;
use crate::precision::Precision;
use crate::types::{BidAsk, Level, Side};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// One side of the book: rounded price mapped to the rounded resting size
/// at that price. The map key is the single-level-per-rounded-price
/// invariant; keys are stored already rounded.
type SideLevels = BTreeMap<Decimal, Decimal>;

/// Governs what `update` does when no level rests at the target price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingLevelPolicy {
    /// Insert the level (the usual incremental-feed path). Tolerates a
    /// zero-size update of an absent level as a no-op removal.
    Insert,
    /// Report [`BookError::LevelNotFound`] and leave the book unchanged.
    /// For callers that know the feed must already contain this price.
    RequireExisting,
}

/// A two-sided, price-leveled order book.
///
/// Maintains the outstanding bid and ask interest of one instrument, keyed
/// by price rounded to the configured precisions. Bids rank best-first by
/// descending price, asks by ascending price; within a side at most one
/// level exists per rounded price.
///
/// ### Thread safety
///
/// All operations are synchronous and run to completion; the book holds no
/// internal locks. Mutating methods take `&mut self`, so sharing a book
/// across threads requires external synchronization (for example an
/// `Arc<RwLock<OrderBook>>`, or a single-writer task fed by a channel).
///
/// ## Examples
///
/// ```
/// use depth_book::{Decimal, MissingLevelPolicy, OrderBook, Side};
///
/// let mut book = OrderBook::new(
///     vec![(Decimal::from(100), Decimal::from(2))],
///     vec![(Decimal::from(101), Decimal::from(1))],
///     0,
///     0,
/// )
/// .unwrap();
///
/// book.update(Side::Bid, Decimal::from(99), Decimal::from(3), MissingLevelPolicy::Insert)
///     .unwrap();
///
/// let top = book.get_bid_ask().unwrap();
/// assert_eq!(top.bid_price, Decimal::from(100));
/// assert_eq!(top.mid_price(), Decimal::new(1005, 1)); // 100.5
/// ```
#[derive(Debug, Clone)]
pub struct OrderBook {
    /// Bid side (buy interest): best price is the highest key
    bids: SideLevels,
    /// Ask side (sell interest): best price is the lowest key
    asks: SideLevels,
    /// Rounding configuration, fixed for the lifetime of the book
    precision: Precision,
}

impl OrderBook {
    /// Creates a book from initial (possibly empty) bid and ask `(price,
    /// size)` sequences, retaining `price_precision` and `size_precision`
    /// decimal places in every stored and returned value.
    ///
    /// The initial sequences are loaded through the same path as
    /// [`fill`](Self::fill): values are rounded on insert and non-positive
    /// sizes are skipped.
    pub fn new(
        initial_bids: impl IntoIterator<Item = (Decimal, Decimal)>,
        initial_asks: impl IntoIterator<Item = (Decimal, Decimal)>,
        price_precision: u32,
        size_precision: u32,
    ) -> Result<Self, BookError> {
        let precision = Precision::new(price_precision, size_precision)?;
        let mut book = OrderBook {
            bids: BTreeMap::new(),
            asks: BTreeMap::new(),
            precision,
        };
        book.fill(Side::Bid, initial_bids);
        book.fill(Side::Ask, initial_asks);
        Ok(book)
    }

    /// The rounding configuration this book was constructed with.
    pub fn precision(&self) -> Precision {
        self.precision
    }

    fn side_levels_mut(&mut self, side: Side) -> &mut SideLevels {
        match side {
            Side::Bid => &mut self.bids,
            Side::Ask => &mut self.asks,
        }
    }

    /// Levels of one side in best-first order: descending price for bids,
    /// ascending price for asks.
    fn ranked(&self, side: Side) -> Box<dyn Iterator<Item = (&Decimal, &Decimal)> + '_> {
        match side {
            Side::Bid => Box::new(self.bids.iter().rev()),
            Side::Ask => Box::new(self.asks.iter()),
        }
    }

    /// Upserts one level: sets the resting size at the rounded price.
    ///
    /// A size that rounds to zero removes the level, so the side never
    /// accumulates dead entries. When no level rests at the rounded price,
    /// `policy` decides between inserting it and reporting
    /// [`BookError::LevelNotFound`].
    ///
    /// A negative size is rejected with [`BookError::NegativeSize`]; any
    /// failure leaves both sides unchanged.
    pub fn update(
        &mut self,
        side: Side,
        price: Decimal,
        size: Decimal,
        policy: MissingLevelPolicy,
    ) -> Result<(), BookError> {
        if size < Decimal::ZERO {
            return Err(BookError::NegativeSize { size });
        }
        let price = self.precision.round_price(price);
        let size = self.precision.round_size(size);

        let levels = self.side_levels_mut(side);
        if !levels.contains_key(&price) && policy == MissingLevelPolicy::RequireExisting {
            return Err(BookError::LevelNotFound { side, price });
        }
        if size.is_zero() {
            levels.remove(&price);
        } else {
            levels.insert(price, size);
        }
        Ok(())
    }

    /// Bulk-loads `(price, size)` pairs into one side.
    ///
    /// Intended for bootstrapping a side from a fresh snapshot; callers
    /// replacing existing state should [`clear`](Self::clear) first, since
    /// loaded levels merge into whatever already rests on the side. Each
    /// pair is rounded on insert; a later pair whose price rounds to an
    /// already-loaded key overwrites it. Pairs with non-positive size are
    /// skipped.
    pub fn fill(&mut self, side: Side, pairs: impl IntoIterator<Item = (Decimal, Decimal)>) {
        let precision = self.precision;
        let levels = self.side_levels_mut(side);
        for (price, size) in pairs {
            let size = precision.round_size(size);
            if size <= Decimal::ZERO {
                tracing::debug!("skipping {side} fill row {price}/{size}: non-positive size");
                continue;
            }
            levels.insert(precision.round_price(price), size);
        }
    }

    /// Empties both sides, returning how many levels were removed from each
    /// as `(bid_count, ask_count)`. Clearing an empty book returns `(0, 0)`.
    pub fn clear(&mut self) -> (usize, usize) {
        let removed = (self.bids.len(), self.asks.len());
        self.bids.clear();
        self.asks.clear();
        removed
    }

    /// Snapshots the top of the book: highest bid and lowest ask with their
    /// sizes.
    ///
    /// Fails with [`BookError::EmptySide`] when either side has no levels;
    /// there is no valid best price to report for an empty side.
    pub fn get_bid_ask(&self) -> Result<BidAsk, BookError> {
        // Stored keys and sizes are already rounded.
        let (&bid_price, &bid_size) = self
            .bids
            .iter()
            .next_back()
            .ok_or(BookError::EmptySide(Side::Bid))?;
        let (&ask_price, &ask_size) = self
            .asks
            .iter()
            .next()
            .ok_or(BookError::EmptySide(Side::Ask))?;
        Ok(BidAsk {
            ask_price,
            ask_size,
            bid_price,
            bid_size,
        })
    }

    /// Returns up to `count` levels of one side in best-first order:
    /// descending price for bids, ascending price for asks.
    ///
    /// A `count` beyond the number of resting levels returns only what
    /// exists. With `cumulative`, each returned level's `cumulative_size`
    /// is the running sum of sizes over the returned ranking.
    ///
    /// ## Examples
    ///
    /// ```
    /// use depth_book::{Decimal, OrderBook, Side};
    ///
    /// let bids = [(100, 5), (99, 5), (98, 5)].map(|(p, s)| (Decimal::from(p), Decimal::from(s)));
    /// let book = OrderBook::new(bids, [], 0, 0).unwrap();
    ///
    /// let top = book.get_top(Side::Bid, 2, true);
    /// assert_eq!(top[1].price, Decimal::from(99));
    /// assert_eq!(top[1].cumulative_size, Some(Decimal::from(10)));
    /// ```
    pub fn get_top(&self, side: Side, count: usize, cumulative: bool) -> Vec<Level> {
        let top = self
            .ranked(side)
            .take(count)
            .map(|(&price, &size)| Level::new(price, size))
            .collect();
        if cumulative {
            Self::accumulate(top)
        } else {
            top
        }
    }

    /// Returns every level of one side at least as good as `price_bound`,
    /// in best-first order.
    ///
    /// The bound is side-appropriate: bids with price >= bound, asks with
    /// price <= bound, the bound itself rounded to the price precision and
    /// inclusive. Cumulative semantics match [`get_top`](Self::get_top).
    pub fn get_top_until_price(
        &self,
        side: Side,
        price_bound: Decimal,
        cumulative: bool,
    ) -> Vec<Level> {
        let bound = self.precision.round_price(price_bound);
        let top: Vec<Level> = match side {
            Side::Bid => self
                .bids
                .range(bound..)
                .rev()
                .map(|(&price, &size)| Level::new(price, size))
                .collect(),
            Side::Ask => self
                .asks
                .range(..=bound)
                .map(|(&price, &size)| Level::new(price, size))
                .collect(),
        };
        if cumulative {
            Self::accumulate(top)
        } else {
            top
        }
    }

    /// Walks one side best-first and returns the price of the first level
    /// whose cumulative size strictly exceeds `threshold`.
    ///
    /// Returns `None` when the whole side's volume is at or below the
    /// threshold, including when the side is empty.
    pub fn get_price_when_cumul_greater(&self, side: Side, threshold: Decimal) -> Option<Decimal> {
        let mut running = Decimal::ZERO;
        for (&price, &size) in self.ranked(side) {
            running += size;
            if running > threshold {
                return Some(price);
            }
        }
        None
    }

    /// True iff both sides have zero levels.
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Returns the number of distinct price levels on the bid side.
    pub fn bid_levels_count(&self) -> usize {
        self.bids.len()
    }

    /// Returns the number of distinct price levels on the ask side.
    pub fn ask_levels_count(&self) -> usize {
        self.asks.len()
    }

    /// Attaches running-sum cumulative sizes to a best-first ranking.
    fn accumulate(mut levels: Vec<Level>) -> Vec<Level> {
        let mut running = Decimal::ZERO;
        for level in &mut levels {
            running += level.size;
            level.cumulative_size = Some(running);
        }
        levels
    }
}
