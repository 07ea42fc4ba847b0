//! Equity-index adapter — hourly index closes, next-sample resolution.

pub mod source;
pub mod wire;

pub use source::EquityIndexSource;

use crate::domain::feed::{FeedConfig, PriceFeed};
use crate::http::JsonFetcher;
use crate::shared::Clock;

/// Seconds of history requested on each refresh (two hourly closes).
pub const DEFAULT_LOOKBACK: u64 = 7_200;

/// Minimum seconds between successful refreshes.
pub const DEFAULT_MIN_TIME_BETWEEN_UPDATES: u64 = 60;

/// A feed over the equity-index source.
pub type EquityIndexFeed<N, C> = PriceFeed<EquityIndexSource, N, C>;

/// Feed configuration with this adapter's defaults.
pub fn default_config() -> FeedConfig {
    FeedConfig::new(DEFAULT_LOOKBACK, DEFAULT_MIN_TIME_BETWEEN_UPDATES)
}

/// Build a feed for `symbol` against the default API with default config.
pub fn feed<N, C>(symbol: impl Into<String>, net: N, clock: C) -> EquityIndexFeed<N, C>
where
    N: JsonFetcher,
    C: Clock,
{
    PriceFeed::new(EquityIndexSource::new(symbol), net, clock, default_config())
}
