//! Pure conversion module for decimal-string prices to scaled integers.
//!
//! All math uses `rust_decimal::Decimal` for exact integer arithmetic.
//! No async, no network calls.

use rust_decimal::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

use super::ScaledPrice;

/// Errors that can occur while scaling a raw decimal string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScalingError {
    #[error("invalid decimal '{input}': {reason}")]
    InvalidDecimal { input: String, reason: String },

    #[error("negative price '{0}' cannot be represented")]
    Negative(String),

    #[error("overflow scaling '{input}' to {decimals} decimals")]
    Overflow { input: String, decimals: u32 },
}

/// How excess precision in the raw string is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalePolicy {
    /// Legacy behavior: keep only the first `decimals` characters of the
    /// raw string (dropping a trailing `.`), then scale.
    ///
    /// Known defect: when the integer part alone is longer than `decimals`
    /// characters the clip cuts into the integer digits and silently
    /// corrupts the value (`"183.345"` at 2 decimals becomes `"18"`).
    /// Kept until product owners confirm a switch to
    /// [`ScalePolicy::RoundHalfUp`].
    TruncateChars,

    /// Candidate replacement: round half away from zero at `decimals`
    /// fractional places, then scale. Not wired into any adapter yet.
    RoundHalfUp,
}

/// Convert a raw decimal string into an integer scaled by `10^decimals`.
pub fn scale_decimal_str(
    raw: &str,
    decimals: u32,
    policy: ScalePolicy,
) -> Result<ScaledPrice, ScalingError> {
    let raw = raw.trim();

    let parsed = match policy {
        ScalePolicy::TruncateChars => {
            let clipped: String = raw.chars().take(decimals as usize).collect();
            let clipped = clipped.trim_end_matches('.');
            Decimal::from_str(clipped).map_err(|e| ScalingError::InvalidDecimal {
                input: raw.to_string(),
                reason: e.to_string(),
            })?
        }
        ScalePolicy::RoundHalfUp => Decimal::from_str(raw)
            .map_err(|e| ScalingError::InvalidDecimal {
                input: raw.to_string(),
                reason: e.to_string(),
            })?
            .round_dp_with_strategy(decimals.min(28), RoundingStrategy::MidpointAwayFromZero),
    };

    if parsed.is_sign_negative() && !parsed.is_zero() {
        return Err(ScalingError::Negative(raw.to_string()));
    }

    let multiplier = 10_i128
        .checked_pow(decimals)
        .and_then(|m| Decimal::try_from_i128_with_scale(m, 0).ok())
        .ok_or_else(|| ScalingError::Overflow {
            input: raw.to_string(),
            decimals,
        })?;

    parsed
        .checked_mul(multiplier)
        .map(|scaled| scaled.trunc())
        .and_then(|scaled| scaled.to_u128())
        .ok_or_else(|| ScalingError::Overflow {
            input: raw.to_string(),
            decimals,
        })
}

/// Render a scaled price back to a human-readable decimal string.
///
/// Diagnostics only; falls back to exponent notation when the value
/// exceeds what `Decimal` can represent.
pub fn format_scaled(price: ScaledPrice, decimals: u32) -> String {
    i128::try_from(price)
        .ok()
        .and_then(|m| Decimal::try_from_i128_with_scale(m, decimals).ok())
        .map(|d| d.normalize().to_string())
        .unwrap_or_else(|| format!("{}e-{}", price, decimals))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_clips_to_decimals_chars() {
        // Pins the legacy defect: "183.345" at 2 decimals clips to "18".
        let scaled = scale_decimal_str("183.345", 2, ScalePolicy::TruncateChars).unwrap();
        assert_eq!(scaled, 1_800);
    }

    #[test]
    fn test_truncate_short_string_unchanged() {
        let scaled = scale_decimal_str("183.345", 18, ScalePolicy::TruncateChars).unwrap();
        assert_eq!(scaled, 183_345 * 10u128.pow(15));
    }

    #[test]
    fn test_truncate_drops_trailing_dot() {
        // "12.4" at 3 decimals clips to "12.", parsed as 12.
        let scaled = scale_decimal_str("12.4", 3, ScalePolicy::TruncateChars).unwrap();
        assert_eq!(scaled, 12_000);
    }

    #[test]
    fn test_truncate_excess_fraction() {
        // "1.23456" at 4 decimals clips to "1.23".
        let scaled = scale_decimal_str("1.23456", 4, ScalePolicy::TruncateChars).unwrap();
        assert_eq!(scaled, 12_300);
    }

    #[test]
    fn test_round_half_up_corrected_conversion() {
        // The same input the truncate policy corrupts.
        let scaled = scale_decimal_str("183.345", 2, ScalePolicy::RoundHalfUp).unwrap();
        assert_eq!(scaled, 18_335);
    }

    #[test]
    fn test_round_half_up_midpoint() {
        let scaled = scale_decimal_str("1.005", 2, ScalePolicy::RoundHalfUp).unwrap();
        assert_eq!(scaled, 101);
    }

    #[test]
    fn test_whole_number_eighteen_decimals() {
        let scaled = scale_decimal_str("30", 18, ScalePolicy::TruncateChars).unwrap();
        assert_eq!(scaled, 30 * 10u128.pow(18));
    }

    #[test]
    fn test_negative_rejected() {
        let result = scale_decimal_str("-1.5", 18, ScalePolicy::TruncateChars);
        assert!(matches!(result, Err(ScalingError::Negative(_))));
    }

    #[test]
    fn test_garbage_rejected() {
        let result = scale_decimal_str("n/a", 18, ScalePolicy::TruncateChars);
        assert!(matches!(result, Err(ScalingError::InvalidDecimal { .. })));
    }

    #[test]
    fn test_oversized_decimals_rejected() {
        let result = scale_decimal_str("1", 40, ScalePolicy::TruncateChars);
        assert!(matches!(result, Err(ScalingError::Overflow { .. })));
    }

    #[test]
    fn test_format_scaled() {
        assert_eq!(format_scaled(1_800, 2), "18");
        assert_eq!(format_scaled(1_500_000_000_000_000_000, 18), "1.5");
        assert_eq!(format_scaled(0, 2), "0");
    }
}
