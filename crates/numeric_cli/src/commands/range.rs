//! Range command implementation

use std::io::Write;

use numeric_core::math::range::in_range;
use numeric_core::types::BoundType;
use tracing::debug;

use super::yes_no;
use crate::{CliError, Result};

/// Run the range command
///
/// Reports whether `value` lies between `low` and `high`, inclusively
/// unless `exclusive` is set.
///
/// # Errors
///
/// [`CliError::InvalidArgument`] when any input is NaN.
pub fn run<W: Write>(value: f64, low: f64, high: f64, exclusive: bool, out: &mut W) -> Result<()> {
    if value.is_nan() || low.is_nan() || high.is_nan() {
        return Err(CliError::InvalidArgument(
            "range inputs must be numbers, got NaN".to_string(),
        ));
    }

    let bound = if exclusive {
        BoundType::Exclusive
    } else {
        BoundType::Inclusive
    };
    debug!(value, low, high, %bound, "range check");

    let (open, close) = if bound.is_inclusive() { ('[', ']') } else { ('(', ')') };
    writeln!(
        out,
        "{} in {}{}, {}{} ({}): {}",
        value,
        open,
        low,
        high,
        close,
        bound,
        yes_no(in_range(value, low, high, bound))
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(value: f64, low: f64, high: f64, exclusive: bool) -> String {
        let mut out = Vec::new();
        run(value, low, high, exclusive, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_boundary_value() {
        assert_eq!(render(10.0, 0.0, 10.0, false), "10 in [0, 10] (inclusive): true\n");
        assert_eq!(render(10.0, 0.0, 10.0, true), "10 in (0, 10) (exclusive): false\n");
    }

    #[test]
    fn test_interior_value() {
        assert!(render(3.14, 0.0, 5.0, true).ends_with("true\n"));
    }

    #[test]
    fn test_nan_rejected() {
        let mut out = Vec::new();
        let result = run(f64::NAN, 0.0, 1.0, false, &mut out);
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
        assert!(out.is_empty());
    }
}
