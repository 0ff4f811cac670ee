//! Whole-number detection and decimal rounding.
//!
//! All functions use generic type parameter `T: num_traits::Float` for f32/f64 support.
//! Ties are broken away from zero (`Float::round` semantics), so `2.5` rounds
//! to `3` and `-2.5` rounds to `-3`.

use num_traits::Float;

/// The constant 10 in `T`.
///
/// Conversion from a small integer cannot fail for `f32`/`f64`; a NaN
/// fallback keeps the rounding functions total for exotic `Float` impls,
/// since a NaN factor makes them return the input unchanged.
#[inline]
fn ten<T: Float>() -> T {
    T::from(10_u8).unwrap_or_else(T::nan)
}

/// Returns `true` if `x` has no fractional part.
///
/// Infinities compare equal to their own truncation and are reported as whole;
/// NaN is never whole.
///
/// # Examples
/// ```
/// use numeric_core::math::rounding::is_whole_number;
///
/// assert!(is_whole_number(5.0_f32));
/// assert!(!is_whole_number(5.5_f32));
/// assert!(is_whole_number(-10.0_f64));
/// ```
#[inline]
pub fn is_whole_number<T: Float>(x: T) -> bool {
    x == x.trunc()
}

/// Rounds `x` to the nearest multiple of 0.1, ties away from zero.
///
/// # Examples
/// ```
/// use numeric_core::math::rounding::round_to_nearest_tenth;
///
/// assert!((round_to_nearest_tenth(3.14_f64) - 3.1).abs() < 1e-12);
/// assert!((round_to_nearest_tenth(-2.47_f64) + 2.5).abs() < 1e-12);
/// ```
#[inline]
pub fn round_to_nearest_tenth<T: Float>(x: T) -> T {
    let factor = ten::<T>();
    let scaled = x * factor;
    if !scaled.is_finite() {
        return x;
    }
    scaled.round() / factor
}

/// Rounds `x` to `precision` decimal digits, ties away from zero.
///
/// A negative `precision` is treated as its absolute value. When `10^precision`
/// or the scaled value is not finite in `T` (very large precision, or a value
/// already near the top of the range), `x` is returned unchanged: the type has
/// no finer resolution to round to.
///
/// # Arguments
/// * `x` - Value to round
/// * `precision` - Number of decimal digits to keep (sign ignored)
///
/// # Examples
/// ```
/// use numeric_core::math::rounding::round;
///
/// assert!((round(3.14159_f64, 2) - 3.14).abs() < 1e-12);
/// assert!((round(3.14159_f64, -2) - 3.14).abs() < 1e-12);
/// assert_eq!(round(3.7_f32, 0), 4.0);
/// ```
pub fn round<T: Float>(x: T, precision: i32) -> T {
    let digits = i32::try_from(precision.unsigned_abs()).unwrap_or(i32::MAX);
    let factor = ten::<T>().powi(digits);
    if !factor.is_finite() {
        return x;
    }

    let scaled = x * factor;
    if !scaled.is_finite() {
        return x;
    }
    scaled.round() / factor
}
