//! Unified SDK error types.

use thiserror::Error;

/// Top-level feed error.
///
/// `DataSource` is recoverable by retrying `update()` later; the query
/// errors mean "no answer available" for the queried state or time.
/// `MissingCurrentPrice` indicates a broken internal invariant and should
/// be treated as a defect, not a normal failure path.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("data source failure for {url}: {reason}")]
    DataSource {
        /// The request URL that produced the failure.
        url: String,
        reason: String,
        /// Raw response body, when one was received.
        response: Option<String>,
    },

    #[error("feed has not completed a successful update")]
    Uninitialized,

    #[error("price series is empty")]
    EmptySeries,

    #[error("query time {time} predates earliest retained sample at {earliest}")]
    BeforeLookbackWindow { time: u64, earliest: u64 },

    #[error("current price missing while series is non-empty")]
    MissingCurrentPrice,
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,
}
