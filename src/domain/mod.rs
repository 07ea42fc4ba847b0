//! Domain modules organized as vertical slices.
//!
//! `feed` holds the source-agnostic engine. Each sibling slice is one
//! concrete adapter contributing:
//! - `wire.rs` — Raw serde structs matching the source's responses
//! - `source.rs` — URL construction + response interpretation + tie-break
//! - `mod.rs` — Defaults and a convenience constructor

pub mod equity_index;
pub mod feed;
pub mod housing_index;
