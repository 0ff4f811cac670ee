//! Float-to-integer conversion with overflow clamping.
//!
//! Both functions truncate toward zero. They differ only in what happens when
//! the truncated value does not fit in an `i32`:
//!
//! | input | [`float_to_int`] | [`float_to_int_saturating`] |
//! |---|---|---|
//! | above `i32::MAX` | `i32::MAX` | `i32::MAX` |
//! | below `i32::MIN` | `i32::MAX` | `i32::MIN` |
//! | NaN | `i32::MAX` | `0` |
//!
//! [`float_to_int`] keeps the historical clamp-to-max behaviour on underflow.
//! Existing callers and tests depend on it, so it is not silently corrected;
//! callers that want symmetric clamping should opt in to
//! [`float_to_int_saturating`].

use num_traits::{Float, ToPrimitive};
use tracing::warn;

/// Truncates `value` toward zero and converts it to `i32`.
///
/// Out-of-range input (above `i32::MAX`, below `i32::MIN`, or NaN) returns
/// `i32::MAX` and emits a `warn` event. Note the underflow case: it clamps to
/// the maximum, not the minimum.
///
/// # Examples
/// ```
/// use numeric_core::math::conversion::float_to_int;
///
/// assert_eq!(float_to_int(3.7_f32), 3);
/// assert_eq!(float_to_int(-5.2_f32), -5);
/// assert_eq!(float_to_int(f64::from(i32::MAX) * 2.0), i32::MAX);
/// assert_eq!(float_to_int(f64::from(i32::MIN) * 2.0), i32::MAX);
/// ```
pub fn float_to_int<T: Float>(value: T) -> i32 {
    match ToPrimitive::to_i32(&value) {
        Some(truncated) => truncated,
        None => {
            warn!(
                value = value.to_f64().unwrap_or(f64::NAN),
                clamped = i32::MAX,
                "float_to_int: value outside i32 range"
            );
            i32::MAX
        }
    }
}

/// Truncates `value` toward zero and converts it to `i32`, saturating at
/// whichever bound was exceeded.
///
/// Values above `i32::MAX` return `i32::MAX`, values below `i32::MIN` return
/// `i32::MIN`, and NaN returns `0`.
///
/// # Examples
/// ```
/// use numeric_core::math::conversion::float_to_int_saturating;
///
/// assert_eq!(float_to_int_saturating(-7.5_f64), -7);
/// assert_eq!(float_to_int_saturating(f64::from(i32::MIN) * 2.0), i32::MIN);
/// assert_eq!(float_to_int_saturating(f64::NAN), 0);
/// ```
pub fn float_to_int_saturating<T: Float>(value: T) -> i32 {
    if let Some(truncated) = ToPrimitive::to_i32(&value) {
        return truncated;
    }
    if value.is_nan() {
        0
    } else if value.is_sign_negative() {
        i32::MIN
    } else {
        i32::MAX
    }
}
