//! Feed state container — committed series, current price, resolution.

use super::{PriceSample, TieBreak};
use crate::error::FeedError;
use crate::shared::{format_scaled, ScaledPrice};

use tracing::debug;

/// Committed view of one feed: the sample series plus the current price
/// and the time of the last successful refresh.
///
/// All three fields are replaced together by [`FeedState::commit`];
/// readers never observe a series from one refresh alongside a current
/// price from another. Immediately after a commit the current price
/// equals the newest sample's price.
#[derive(Debug, Clone, Default)]
pub struct FeedState {
    series: Vec<PriceSample>,
    current_price: Option<ScaledPrice>,
    last_update_time: Option<u64>,
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole state with the result of one successful refresh.
    /// `series` must be ordered oldest-to-newest.
    pub(crate) fn commit(
        &mut self,
        series: Vec<PriceSample>,
        current_price: ScaledPrice,
        update_time: u64,
    ) {
        self.series = series;
        self.current_price = Some(current_price);
        self.last_update_time = Some(update_time);
    }

    pub fn series(&self) -> &[PriceSample] {
        &self.series
    }

    pub fn current_price(&self) -> Option<ScaledPrice> {
        self.current_price
    }

    pub fn last_update_time(&self) -> Option<u64> {
        self.last_update_time
    }

    /// Resolve the best-known price as of `time` under `tie_break`.
    ///
    /// `decimals` is only used to render the matched price for the debug
    /// diagnostic; it never affects the returned value.
    pub fn resolve(
        &self,
        time: u64,
        tie_break: TieBreak,
        decimals: u32,
    ) -> Result<ScaledPrice, FeedError> {
        if self.last_update_time.is_none() {
            return Err(FeedError::Uninitialized);
        }
        let Some(first) = self.series.first() else {
            return Err(FeedError::EmptySeries);
        };
        if time < first.timestamp {
            return Err(FeedError::BeforeLookbackWindow {
                time,
                earliest: first.timestamp,
            });
        }

        match self.series.iter().position(|s| s.timestamp > time) {
            // At or after the newest sample: the current price answers.
            None => self.current_price.ok_or(FeedError::MissingCurrentPrice),
            Some(idx) => {
                let sample = match tie_break {
                    TieBreak::NextSample => self.series[idx],
                    TieBreak::PreviousSample => match idx.checked_sub(1) {
                        Some(prev) => self.series[prev],
                        // No preceding sample retained; the current price
                        // is the last known value.
                        None => {
                            return self.current_price.ok_or(FeedError::MissingCurrentPrice)
                        }
                    },
                };
                debug!(
                    queried_at = time,
                    matched_at = sample.timestamp,
                    price = %format_scaled(sample.price, decimals),
                    "resolved historical price"
                );
                Ok(sample.price)
            }
        }
    }
}
