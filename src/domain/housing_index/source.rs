//! Housing-index source — monthly period-start observations.
//!
//! Each published value stays in effect until the next publication, so
//! historical queries resolve to the last value at or before the queried
//! time ([`TieBreak::PreviousSample`]).

use super::wire;
use crate::domain::feed::{LookbackWindow, ParseError, PriceSample, PriceSource, TieBreak};
use crate::network::DEFAULT_HOUSING_INDEX_API_URL;
use crate::shared::{scale_decimal_str, ScalePolicy};

use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

pub struct HousingIndexSource {
    base_url: String,
    series_id: String,
    label: String,
}

impl HousingIndexSource {
    pub fn new(series_id: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_HOUSING_INDEX_API_URL, series_id)
    }

    pub fn with_base_url(base_url: &str, series_id: impl Into<String>) -> Self {
        let series_id = series_id.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            label: format!("housing_index:{}", series_id),
            series_id,
        }
    }
}

/// Render a Unix timestamp as the API's `YYYY-MM-DD` date encoding.
fn format_date(unix: u64) -> String {
    let ts = i64::try_from(unix).unwrap_or(i64::MAX);
    DateTime::<Utc>::from_timestamp(ts, 0)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
        .format("%Y-%m-%d")
        .to_string()
}

/// Parse an observation date to midnight-UTC Unix seconds.
fn parse_observation_date(raw: &str) -> Option<u64> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    u64::try_from(midnight.and_utc().timestamp()).ok()
}

impl PriceSource for HousingIndexSource {
    fn label(&self) -> &str {
        &self.label
    }

    fn tie_break(&self) -> TieBreak {
        TieBreak::PreviousSample
    }

    fn history_url(&self, window: &LookbackWindow) -> String {
        format!(
            "{}/v2/observations?series_id={}&observation_start={}&observation_end={}",
            self.base_url,
            urlencoding::encode(&self.series_id),
            format_date(window.from),
            format_date(window.to)
        )
    }

    fn parse_history(
        &self,
        body: &serde_json::Value,
        decimals: u32,
    ) -> Result<Vec<PriceSample>, ParseError> {
        let resp: wire::ObservationsResponse = serde_json::from_value(body.clone())?;

        let mut samples = Vec::with_capacity(resp.observations.len());
        for obs in resp.observations {
            let (Some(date), Some(value)) = (obs.date, obs.value) else {
                debug!(source = %self.label, "dropping observation without date or value");
                continue;
            };
            if value == "." {
                // Unpublished placeholder.
                continue;
            }
            let Some(timestamp) = parse_observation_date(&date) else {
                debug!(source = %self.label, %date, "dropping observation with unparseable date");
                continue;
            };
            let price = scale_decimal_str(&value, decimals, ScalePolicy::TruncateChars)?;
            samples.push(PriceSample { timestamp, price });
        }

        if samples.is_empty() {
            return Err(ParseError::NoSamples);
        }
        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn source() -> HousingIndexSource {
        HousingIndexSource::with_base_url("https://api.test", "CSUSHPINSA")
    }

    #[test]
    fn test_history_url_uses_date_encoding() {
        // 2025-04-01 .. 2025-06-30 midnight UTC.
        let url = source().history_url(&LookbackWindow {
            from: 1_743_465_600,
            to: 1_751_241_600,
        });
        assert_eq!(
            url,
            "https://api.test/v2/observations?series_id=CSUSHPINSA\
             &observation_start=2025-04-01&observation_end=2025-06-30"
        );
    }

    #[test]
    fn test_parse_observation_date_midnight_utc() {
        assert_eq!(parse_observation_date("1970-01-02"), Some(86_400));
        assert_eq!(parse_observation_date("2025-04-01"), Some(1_743_465_600));
        assert_eq!(parse_observation_date("04/01/2025"), None);
    }

    #[test]
    fn test_parse_scales_values() {
        let body = json!({
            "observations": [
                { "date": "2025-04-01", "value": "312.4" },
                { "date": "2025-05-01", "value": "314.92" }
            ]
        });
        let samples = source().parse_history(&body, 18).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].timestamp, 1_743_465_600);
        assert_eq!(samples[0].price, 3_124 * 10u128.pow(17));
        assert_eq!(samples[1].price, 31_492 * 10u128.pow(16));
    }

    #[test]
    fn test_parse_skips_unpublished_and_malformed() {
        let body = json!({
            "observations": [
                { "date": "2025-04-01", "value": "312.4" },
                { "date": "2025-05-01", "value": "." },
                { "date": "not-a-date", "value": "300.0" },
                { "value": "301.0" }
            ]
        });
        let samples = source().parse_history(&body, 18).unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].timestamp, 1_743_465_600);
    }

    #[test]
    fn test_parse_all_unpublished_rejected() {
        let body = json!({
            "observations": [
                { "date": "2025-04-01", "value": "." }
            ]
        });
        let result = source().parse_history(&body, 18);
        assert!(matches!(result, Err(ParseError::NoSamples)));
    }
}
