//! HTTP transport layer — `JsonFetcher` capability and its reqwest impl.

pub mod client;

pub use client::{HttpJson, JsonFetcher};
