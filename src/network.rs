//! Network URL constants for the bundled adapters.

/// Default equity-index history API base URL.
pub const DEFAULT_EQUITY_INDEX_API_URL: &str = "https://api.streetindex.io";

/// Default housing-index observations API base URL.
pub const DEFAULT_HOUSING_INDEX_API_URL: &str = "https://api.nationalhpi.org";
