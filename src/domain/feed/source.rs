//! The per-source contract the generic engine is parameterized over.

use super::{LookbackWindow, PriceSample, TieBreak};
use crate::shared::ScalingError;

use thiserror::Error;

/// Errors raised while interpreting a source response.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("response does not match the expected schema: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("no usable samples in response")]
    NoSamples,

    #[error("price conversion failed: {0}")]
    Scaling(#[from] ScalingError),
}

/// One external price source: URL construction, response interpretation,
/// and the tie-break rule its published data requires.
pub trait PriceSource: Send + Sync {
    /// Short identifier for diagnostics, e.g. `"equity_index:SPX"`.
    fn label(&self) -> &str;

    /// Tie-break rule for historical queries against this source's data.
    fn tie_break(&self) -> TieBreak;

    /// Build the history request URL for one lookback window.
    fn history_url(&self, window: &LookbackWindow) -> String;

    /// Interpret a raw JSON response into a sample series.
    ///
    /// Records without a usable timestamp or value are dropped rather
    /// than failing the refresh; an empty result is `ParseError::NoSamples`
    /// so the caller treats the refresh as failed. Ordering is the
    /// engine's concern — implementations return samples in response
    /// order.
    fn parse_history(
        &self,
        body: &serde_json::Value,
        decimals: u32,
    ) -> Result<Vec<PriceSample>, ParseError>;
}
