//! # Pricefeed SDK
//!
//! Throttled ingestion of external HTTP price series with point-in-time
//! historical resolution.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Shared** — Scaled-price conversion, injectable clock capability
//! 2. **Transport** — `JsonFetcher` capability with a reqwest implementation
//! 3. **Engine** — `PriceFeed`: update throttling, series storage, resolution
//! 4. **Adapters** — One module per external source (URL + schema + tie-break)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pricefeed_sdk::prelude::*;
//!
//! let mut feed = equity_index::feed("SPX", HttpJson::new(), SystemClock);
//! feed.update().await?;
//!
//! let latest = feed.current_price();
//! let at_settlement = feed.historical_price(1_700_000_000)?;
//! ```

// ── Layer 1: Shared ──────────────────────────────────────────────────────────

/// Shared capabilities and numeric types.
pub mod shared;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Transport ───────────────────────────────────────────────────────

/// JSON transport capability.
pub mod http;

// ── Layers 3–4: Engine + Adapters ────────────────────────────────────────────

/// Domain modules (vertical slices): the generic engine and one slice per
/// external source.
pub mod domain;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Engine types
    pub use crate::domain::feed::{
        FeedConfig, FeedState, LookbackWindow, ParseError, PriceFeed, PriceSample, PriceSource,
        TieBreak, UpdateOutcome,
    };

    // Adapters
    pub use crate::domain::equity_index::{self, EquityIndexFeed, EquityIndexSource};
    pub use crate::domain::housing_index::{self, HousingIndexFeed, HousingIndexSource};

    // Errors
    pub use crate::error::{FeedError, HttpError};

    // Capabilities
    pub use crate::http::{HttpJson, JsonFetcher};
    pub use crate::shared::{Clock, ManualClock, ScaledPrice, SystemClock};

    // Scaling
    pub use crate::shared::{format_scaled, scale_decimal_str, ScalePolicy, ScalingError};

    // Network
    pub use crate::network::{DEFAULT_EQUITY_INDEX_API_URL, DEFAULT_HOUSING_INDEX_API_URL};
}
