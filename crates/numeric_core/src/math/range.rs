//! Range membership tests over any ordered type.

use crate::types::BoundType;

/// Tests whether `value` lies between `low` and `high`.
///
/// With [`BoundType::Inclusive`] this is `low <= value <= high`; with
/// [`BoundType::Exclusive`] it is `low < value < high`. A single-point range
/// (`low == high`) is satisfiable only when inclusive. Use
/// `BoundType::default()` for the inclusive behaviour.
///
/// Works for any `PartialOrd` type: integers of every width, `f32`/`f64`,
/// `char`. Incomparable values (NaN) are never in range.
///
/// # Examples
/// ```
/// use numeric_core::math::range::in_range;
/// use numeric_core::types::BoundType;
///
/// assert!(in_range(10, 0, 10, BoundType::Inclusive));
/// assert!(!in_range(10, 0, 10, BoundType::Exclusive));
/// assert!(in_range('m', 'a', 'z', BoundType::default()));
/// ```
#[inline]
pub fn in_range<T: PartialOrd>(value: T, low: T, high: T, bound: BoundType) -> bool {
    bound.contains(&value, &low, &high)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inclusive_within_range() {
        assert!(in_range(5, 0, 10, BoundType::Inclusive));
        assert!(in_range(0, 0, 10, BoundType::Inclusive));
        assert!(in_range(10, 0, 10, BoundType::Inclusive));
    }

    #[test]
    fn test_inclusive_outside_range() {
        assert!(!in_range(-1, 0, 10, BoundType::Inclusive));
        assert!(!in_range(11, 0, 10, BoundType::Inclusive));
        assert!(!in_range(100, 0, 10, BoundType::Inclusive));
    }

    #[test]
    fn test_inclusive_negative_range() {
        assert!(in_range(-5, -10, 0, BoundType::Inclusive));
        assert!(in_range(-10, -10, 0, BoundType::Inclusive));
        assert!(in_range(0, -10, 0, BoundType::Inclusive));
        assert!(!in_range(-11, -10, 0, BoundType::Inclusive));
    }

    #[test]
    fn test_inclusive_float_values() {
        assert!(in_range(5.5_f32, 0.0, 10.0, BoundType::Inclusive));
        assert!(in_range(0.0_f32, 0.0, 10.0, BoundType::Inclusive));
        assert!(in_range(10.0_f32, 0.0, 10.0, BoundType::Inclusive));
        assert!(!in_range(10.1_f32, 0.0, 10.0, BoundType::Inclusive));
    }

    #[test]
    fn test_default_bound_is_inclusive() {
        assert!(in_range(0, 0, 10, BoundType::default()));
        assert!(in_range(10, 0, 10, BoundType::default()));
    }

    #[test]
    fn test_exclusive_within_range() {
        assert!(in_range(5, 0, 10, BoundType::Exclusive));
        assert!(in_range(1, 0, 10, BoundType::Exclusive));
        assert!(in_range(9, 0, 10, BoundType::Exclusive));
    }

    #[test]
    fn test_exclusive_outside_range() {
        assert!(!in_range(0, 0, 10, BoundType::Exclusive));
        assert!(!in_range(10, 0, 10, BoundType::Exclusive));
        assert!(!in_range(-1, 0, 10, BoundType::Exclusive));
        assert!(!in_range(11, 0, 10, BoundType::Exclusive));
    }

    #[test]
    fn test_exclusive_negative_range() {
        assert!(in_range(-5, -10, 0, BoundType::Exclusive));
        assert!(!in_range(-10, -10, 0, BoundType::Exclusive));
        assert!(!in_range(0, -10, 0, BoundType::Exclusive));
    }

    #[test]
    fn test_exclusive_float_values() {
        assert!(in_range(5.5_f32, 0.0, 10.0, BoundType::Exclusive));
        assert!(!in_range(0.0_f32, 0.0, 10.0, BoundType::Exclusive));
        assert!(!in_range(10.0_f32, 0.0, 10.0, BoundType::Exclusive));
        assert!(in_range(9.99_f32, 0.0, 10.0, BoundType::Exclusive));
    }

    #[test]
    fn test_other_numeric_types() {
        assert!(in_range(5.5_f64, 0.0, 10.0, BoundType::Inclusive));
        assert!(!in_range(0.0_f64, 0.0, 10.0, BoundType::Exclusive));

        let (lower, upper) = (0_i64, 10_000_i64);
        assert!(in_range(5_000_i64, lower, upper, BoundType::Inclusive));
        assert!(in_range(lower, lower, upper, BoundType::Inclusive));
        assert!(!in_range(lower, lower, upper, BoundType::Exclusive));

        assert!(in_range(
            1_000_000_000_000_i64,
            0,
            2_000_000_000_000,
            BoundType::Inclusive
        ));
        assert!(in_range(200_u8, 0, u8::MAX, BoundType::Exclusive));
    }

    #[test]
    fn test_char_values() {
        assert!(in_range('m', 'a', 'z', BoundType::Inclusive));
        assert!(in_range('a', 'a', 'z', BoundType::Inclusive));
        assert!(!in_range('a', 'a', 'z', BoundType::Exclusive));
    }

    #[test]
    fn test_single_point_range() {
        assert!(in_range(5, 5, 5, BoundType::Inclusive));
        assert!(!in_range(5, 5, 5, BoundType::Exclusive));
    }

    #[test]
    fn test_inverted_range_is_empty() {
        assert!(!in_range(5, 10, 0, BoundType::Inclusive));
        assert!(!in_range(5, 10, 0, BoundType::Exclusive));
    }

    #[test]
    fn test_very_small_floats() {
        let tiny = 0.000001_f32;
        assert!(in_range(tiny, 0.0, 0.00001, BoundType::Inclusive));
        assert!(in_range(tiny, 0.0, 0.00001, BoundType::Exclusive));
    }

    #[test]
    fn test_nan_never_in_range() {
        assert!(!in_range(f64::NAN, f64::NEG_INFINITY, f64::INFINITY, BoundType::Inclusive));
    }

    #[cfg(test)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(1000))]

            #[test]
            fn test_exclusive_implies_inclusive(
                value in any::<i64>(),
                low in any::<i64>(),
                high in any::<i64>()
            ) {
                if in_range(value, low, high, BoundType::Exclusive) {
                    prop_assert!(in_range(value, low, high, BoundType::Inclusive));
                }
            }

            #[test]
            fn test_inclusive_matches_std_range(
                value in -1000_i32..1000,
                low in -1000_i32..1000,
                high in -1000_i32..1000
            ) {
                prop_assert_eq!(
                    in_range(value, low, high, BoundType::Inclusive),
                    (low..=high).contains(&value)
                );
            }

            #[test]
            fn test_endpoints_only_differ_by_bound(
                low in -1000_i32..1000,
                width in 1_i32..1000
            ) {
                let high = low + width;
                prop_assert!(in_range(low, low, high, BoundType::Inclusive));
                prop_assert!(in_range(high, low, high, BoundType::Inclusive));
                prop_assert!(!in_range(low, low, high, BoundType::Exclusive));
                prop_assert!(!in_range(high, low, high, BoundType::Exclusive));
            }
        }
    }
}
