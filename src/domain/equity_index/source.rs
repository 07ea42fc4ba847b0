//! Equity-index source — hourly close observations.
//!
//! Each record is a point-in-time close, so historical queries resolve to
//! the nearest future observation ([`TieBreak::NextSample`]).

use super::wire;
use crate::domain::feed::{LookbackWindow, ParseError, PriceSample, PriceSource, TieBreak};
use crate::network::DEFAULT_EQUITY_INDEX_API_URL;
use crate::shared::{scale_decimal_str, ScalePolicy};

use tracing::debug;

pub struct EquityIndexSource {
    base_url: String,
    symbol: String,
    label: String,
}

impl EquityIndexSource {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_EQUITY_INDEX_API_URL, symbol)
    }

    pub fn with_base_url(base_url: &str, symbol: impl Into<String>) -> Self {
        let symbol = symbol.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            label: format!("equity_index:{}", symbol),
            symbol,
        }
    }
}

impl PriceSource for EquityIndexSource {
    fn label(&self) -> &str {
        &self.label
    }

    fn tie_break(&self) -> TieBreak {
        TieBreak::NextSample
    }

    fn history_url(&self, window: &LookbackWindow) -> String {
        format!(
            "{}/v1/indexes/{}/history?from={}&to={}&interval=1h",
            self.base_url,
            urlencoding::encode(&self.symbol),
            window.from,
            window.to
        )
    }

    fn parse_history(
        &self,
        body: &serde_json::Value,
        decimals: u32,
    ) -> Result<Vec<PriceSample>, ParseError> {
        let resp: wire::HistoryResponse = serde_json::from_value(body.clone())?;

        let mut samples = Vec::with_capacity(resp.series.len());
        for point in resp.series {
            let (Some(timestamp), Some(close)) = (point.t, point.close) else {
                debug!(source = %self.label, "dropping record without timestamp or close");
                continue;
            };
            let price = scale_decimal_str(&close, decimals, ScalePolicy::TruncateChars)?;
            samples.push(PriceSample { timestamp, price });
        }

        if samples.is_empty() {
            return Err(ParseError::NoSamples);
        }
        Ok(samples)
    }
}
