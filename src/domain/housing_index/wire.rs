//! Wire types for the housing-index observations API.

use serde::Deserialize;

/// Raw observations response.
#[derive(Deserialize, Debug, Clone)]
pub struct ObservationsResponse {
    #[serde(default)]
    pub observations: Vec<Observation>,
}

/// One published observation. The upstream marks missing values with a
/// literal `"."`, and either field may be absent entirely.
#[derive(Deserialize, Debug, Clone)]
pub struct Observation {
    /// Publication date, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: Option<String>,
    /// Index value as a decimal string, or `"."` when unpublished.
    #[serde(default)]
    pub value: Option<String>,
}
