//! Wire types for the equity-index history API.

use serde::Deserialize;

/// Raw history response: one record per observation interval.
#[derive(Deserialize, Debug, Clone)]
pub struct HistoryResponse {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub series: Vec<HistoryPoint>,
}

/// One observation. Fields are optional so malformed records can be
/// dropped instead of failing the whole refresh.
#[derive(Deserialize, Debug, Clone)]
pub struct HistoryPoint {
    /// Unix timestamp in seconds.
    #[serde(default)]
    pub t: Option<u64>,
    /// Close as a decimal string.
    #[serde(default)]
    pub close: Option<String>,
}
