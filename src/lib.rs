//! A precision-aware, two-sided price-level order book for market-data
//! pipelines: best-price snapshots, ranked top-of-book depth, and
//! cumulative-volume queries over decimal prices and sizes.
//!
//! ## Architecture
//!
//! The crate is a single synchronous component:
//!
//! 1. `OrderBook`: owns one sorted level collection per side, keyed by
//!    price rounded to the instrument's configured precision
//! 2. `Level` / `BidAsk`: value snapshots returned by queries
//! 3. `Precision`: the per-instrument rounding configuration
//!
//! Callers push decoded `(price, size)` updates into the book and query it
//! between updates; there is no internal background activity and no
//! internal locking, so one logical owner mutates a book at a time (wrap it
//! in a lock to share it, as the example below does for reads).
//!
//! ## Example Usage
//!
//! ```rust
//! use depth_book::{Decimal, MissingLevelPolicy, OrderBook, Side};
//!
//! // Bootstrap a book with integer price/size precision
//! let mut book = OrderBook::new(
//!     vec![(Decimal::from(100), Decimal::from(2)), (Decimal::from(99), Decimal::from(3))],
//!     vec![(Decimal::from(101), Decimal::from(1)), (Decimal::from(102), Decimal::from(4))],
//!     0,
//!     0,
//! )
//! .unwrap();
//!
//! // Apply an incremental update: zero size removes the level
//! book.update(Side::Bid, Decimal::from(100), Decimal::ZERO, MissingLevelPolicy::Insert)
//!     .unwrap();
//!
//! // Best prices and derived mid
//! let top = book.get_bid_ask().unwrap();
//! assert_eq!(top.bid_price, Decimal::from(99));
//! assert_eq!(top.mid_price(), Decimal::from(100));
//!
//! // Ranked depth with cumulative volumes
//! let asks = book.get_top(Side::Ask, 2, true);
//! assert_eq!(asks[1].cumulative_size, Some(Decimal::from(5)));
//!
//! // First price where cumulative ask volume exceeds 1
//! let price = book.get_price_when_cumul_greater(Side::Ask, Decimal::ONE);
//! assert_eq!(price, Some(Decimal::from(102)));
//! ```
//!
//! Each side is a `BTreeMap` keyed on the rounded price, so best-price
//! lookups read the map's boundary entries, ranked retrieval walks the map
//! in (reverse) key order, and the one-level-per-rounded-price invariant
//! holds structurally.

mod error;
mod order_book;
mod precision;
mod types;

// Re-export public API
pub use error::BookError;
pub use order_book::{MissingLevelPolicy, OrderBook};
pub use precision::Precision;
pub use types::{BidAsk, Level, Side};

// Re-export commonly used external dependencies
pub use rust_decimal::Decimal;
