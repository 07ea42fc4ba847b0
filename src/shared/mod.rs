//! Shared capabilities and numeric types used across all domain modules.

pub mod clock;
pub mod scaling;

pub use clock::{Clock, ManualClock, SystemClock};
pub use scaling::{format_scaled, scale_decimal_str, ScalePolicy, ScalingError};

/// A price scaled to `10^decimals`, stored as an unsigned integer.
///
/// Wide enough for 18-decimal representations of any realistic index value.
pub type ScaledPrice = u128;
