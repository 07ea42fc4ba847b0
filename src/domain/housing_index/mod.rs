//! Housing-index adapter — monthly index observations, previous-sample
//! resolution.

pub mod source;
pub mod wire;

pub use source::HousingIndexSource;

use crate::domain::feed::{FeedConfig, PriceFeed};
use crate::http::JsonFetcher;
use crate::shared::Clock;

/// Seconds of history requested on each refresh (~90 days, at least two
/// monthly publications).
pub const DEFAULT_LOOKBACK: u64 = 7_776_000;

/// Minimum seconds between successful refreshes. The series publishes
/// monthly; daily refreshes are ample.
pub const DEFAULT_MIN_TIME_BETWEEN_UPDATES: u64 = 86_400;

/// A feed over the housing-index source.
pub type HousingIndexFeed<N, C> = PriceFeed<HousingIndexSource, N, C>;

/// Feed configuration with this adapter's defaults.
pub fn default_config() -> FeedConfig {
    FeedConfig::new(DEFAULT_LOOKBACK, DEFAULT_MIN_TIME_BETWEEN_UPDATES)
}

/// Build a feed for `series_id` against the default API with default
/// config.
pub fn feed<N, C>(series_id: impl Into<String>, net: N, clock: C) -> HousingIndexFeed<N, C>
where
    N: JsonFetcher,
    C: Clock,
{
    PriceFeed::new(HousingIndexSource::new(series_id), net, clock, default_config())
}
