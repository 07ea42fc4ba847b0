//! Generic feed engine — update scheduling, series storage, resolution.
//!
//! Everything source-specific (URL construction, response schema, the
//! historical tie-break rule) lives behind [`PriceSource`]; the engine
//! itself is shared by every adapter.

pub mod engine;
pub mod source;
pub mod state;

pub use engine::{PriceFeed, UpdateOutcome};
pub use source::{ParseError, PriceSource};
pub use state::FeedState;

use crate::shared::ScaledPrice;

/// A single (timestamp, scaled price) observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceSample {
    /// Unix timestamp in seconds.
    pub timestamp: u64,
    /// Price scaled to the feed's configured decimals.
    pub price: ScaledPrice,
}

/// Tie-break rule for historical queries landing strictly between two
/// recorded samples.
///
/// The two rules are not equivalent and are never unified; each source
/// declares the one its published data requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Answer with the first sample strictly after the queried time.
    /// For sources reporting point-in-time observations (e.g. hourly
    /// closes), where the matched sample is the nearest future
    /// observation.
    NextSample,

    /// Answer with the sample immediately preceding the first one
    /// strictly after the queried time — the last value known to be in
    /// effect — falling back to the current price when no preceding
    /// sample exists. For sources reporting period-start values that stay
    /// valid until superseded (e.g. a monthly index).
    PreviousSample,
}

/// Fetch window `[from, to]` in Unix seconds, ending at "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookbackWindow {
    pub from: u64,
    pub to: u64,
}

/// Immutable per-feed parameters, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    /// Seconds of history requested from the source on each refresh.
    pub lookback: u64,
    /// Scale of the fixed-point price representation.
    pub price_feed_decimals: u32,
    /// Minimum seconds between successful refreshes.
    pub min_time_between_updates: u64,
}

impl FeedConfig {
    pub const DEFAULT_DECIMALS: u32 = 18;

    pub fn new(lookback: u64, min_time_between_updates: u64) -> Self {
        Self {
            lookback,
            price_feed_decimals: Self::DEFAULT_DECIMALS,
            min_time_between_updates,
        }
    }

    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.price_feed_decimals = decimals;
        self
    }
}
