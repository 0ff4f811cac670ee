//! Range endpoint policy.

use std::fmt;

/// Whether both endpoints of a range take part in a membership test.
///
/// Both endpoints are treated the same way: a range is either closed at
/// both ends or open at both ends.
///
/// # Examples
/// ```
/// use numeric_core::types::BoundType;
///
/// assert_eq!(BoundType::default(), BoundType::Inclusive);
/// assert!(BoundType::Inclusive.contains(&5, &5, &5));
/// assert!(!BoundType::Exclusive.contains(&5, &5, &5));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundType {
    /// Closed range: `low <= value <= high`.
    #[default]
    Inclusive,

    /// Open range: `low < value < high`.
    Exclusive,
}

impl BoundType {
    /// Tests `value` against `[low, high]` or `(low, high)` depending on the variant.
    ///
    /// Incomparable values (e.g. NaN) are never contained.
    #[inline]
    pub fn contains<T: PartialOrd + ?Sized>(self, value: &T, low: &T, high: &T) -> bool {
        match self {
            BoundType::Inclusive => low <= value && value <= high,
            BoundType::Exclusive => low < value && value < high,
        }
    }

    /// Returns `true` for [`BoundType::Inclusive`].
    #[inline]
    pub fn is_inclusive(self) -> bool {
        matches!(self, BoundType::Inclusive)
    }
}

impl fmt::Display for BoundType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundType::Inclusive => write!(f, "inclusive"),
            BoundType::Exclusive => write!(f, "exclusive"),
        }
    }
}
