//! The throttled update scheduler and query surface for one feed.

use super::source::PriceSource;
use super::state::FeedState;
use super::{FeedConfig, LookbackWindow};
use crate::error::FeedError;
use crate::http::JsonFetcher;
use crate::shared::{format_scaled, Clock, ScaledPrice};

use tracing::{debug, info};

/// What one `update()` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The series was fetched and committed.
    Refreshed { samples: usize },
    /// Inside the throttle window; nothing was fetched or changed.
    Throttled { remaining_secs: u64 },
}

/// One price feed: a source, the injected transport and clock, and the
/// committed state.
///
/// The feed is single-writer by construction — `update()` takes
/// `&mut self` and is the only suspending operation, so readers always
/// see the last fully-committed state. Callers that need shared access
/// add their own mutual exclusion around the whole feed.
pub struct PriceFeed<S, N, C> {
    source: S,
    net: N,
    clock: C,
    config: FeedConfig,
    state: FeedState,
}

impl<S, N, C> PriceFeed<S, N, C>
where
    S: PriceSource,
    N: JsonFetcher,
    C: Clock,
{
    pub fn new(source: S, net: N, clock: C, config: FeedConfig) -> Self {
        Self {
            source,
            net,
            clock,
            config,
            state: FeedState::new(),
        }
    }

    /// Refresh the series from the source, unless the throttle window
    /// since the last successful refresh has not yet elapsed.
    ///
    /// On any failure the pre-call state is fully preserved; retry timing
    /// is the caller's responsibility.
    pub async fn update(&mut self) -> Result<UpdateOutcome, FeedError> {
        let now = self.clock.now_unix();

        if let Some(last) = self.state.last_update_time() {
            let next_allowed = last.saturating_add(self.config.min_time_between_updates);
            if next_allowed > now {
                let remaining_secs = next_allowed - now;
                debug!(
                    source = self.source.label(),
                    remaining_secs, "inside throttle window, skipping refresh"
                );
                return Ok(UpdateOutcome::Throttled { remaining_secs });
            }
        }

        let window = LookbackWindow {
            from: now.saturating_sub(self.config.lookback),
            to: now,
        };
        let url = self.source.history_url(&window);

        let body = self
            .net
            .fetch_json(&url)
            .await
            .map_err(|err| FeedError::DataSource {
                url: url.clone(),
                reason: err.to_string(),
                response: None,
            })?;

        let mut samples = self
            .source
            .parse_history(&body, self.config.price_feed_decimals)
            .map_err(|err| FeedError::DataSource {
                url: url.clone(),
                reason: err.to_string(),
                response: Some(body.to_string()),
            })?;

        samples.sort_by_key(|s| s.timestamp);
        let newest = samples.last().copied().ok_or_else(|| FeedError::DataSource {
            url,
            reason: "empty sample series".to_string(),
            response: Some(body.to_string()),
        })?;

        let count = samples.len();
        // Update time is the local clock reading, never a timestamp echoed
        // by the response: the throttle measures local elapsed time.
        self.state.commit(samples, newest.price, now);
        info!(
            source = self.source.label(),
            samples = count,
            current = %format_scaled(newest.price, self.config.price_feed_decimals),
            "refreshed price series"
        );
        Ok(UpdateOutcome::Refreshed { samples: count })
    }

    /// Latest committed price; absent until the first successful update.
    pub fn current_price(&self) -> Option<ScaledPrice> {
        self.state.current_price()
    }

    /// Best-known price as of `time`, under this source's tie-break rule.
    pub fn historical_price(&self, time: u64) -> Result<ScaledPrice, FeedError> {
        self.state
            .resolve(time, self.source.tie_break(), self.config.price_feed_decimals)
    }

    pub fn last_update_time(&self) -> Option<u64> {
        self.state.last_update_time()
    }

    pub fn lookback(&self) -> u64 {
        self.config.lookback
    }

    pub fn price_feed_decimals(&self) -> u32 {
        self.config.price_feed_decimals
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }
}
