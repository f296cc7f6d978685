/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `f64` to `u64` if the value is finite, non-negative,
/// exactly representable and not fractional.
///
/// ## Returns
/// - `Some(u64)`: The converted value if it is safe.
/// - `None`: For non-finite, negative, too large or fractional values.
///
/// ## Example
/// ```
/// use hebnum::util::num::{MAX_SAFE_U64_INT, f64_to_u64_checked};
///
/// assert_eq!(f64_to_u64_checked(7.0), Some(7));
/// assert_eq!(f64_to_u64_checked(-5.0), None);
/// assert_eq!(f64_to_u64_checked(1.25), None);
/// assert_eq!(f64_to_u64_checked(f64::NAN), None);
/// assert_eq!(f64_to_u64_checked(MAX_SAFE_U64_INT as f64 * 2.0), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_u64_checked(value: f64) -> Option<u64> {
    if !value.is_finite() || value < 0.0 || value > MAX_SAFE_U64_INT as f64 {
        return None;
    }
    if value.fract() != 0.0 {
        return None;
    }
    Some(value as u64)
}

/// Splits a non-negative `f64` into its whole part and the digits of its
/// fractional part.
///
/// The digits come from the shortest decimal representation that round-trips
/// to `value`, with trailing zeros removed, so `3.4` yields `"4"` rather than
/// the binary expansion of `0.4`.
///
/// ## Example
/// ```
/// use hebnum::util::num::split_decimal;
///
/// assert_eq!(split_decimal(3.4), Some((3, "4".to_string())));
/// assert_eq!(split_decimal(10.0005), Some((10, "0005".to_string())));
/// assert_eq!(split_decimal(42.0), Some((42, String::new())));
/// assert_eq!(split_decimal(-1.0), None);
/// ```
#[must_use]
pub fn split_decimal(value: f64) -> Option<(u64, String)> {
    let whole = f64_to_u64_checked(value.trunc())?;
    let rendered = value.to_string();
    let digits = rendered.split_once('.')
                         .map(|(_, fraction)| fraction.trim_end_matches('0').to_string())
                         .unwrap_or_default();
    Some((whole, digits))
}
