//! Round command implementation

use std::io::Write;

use numeric_core::math::rounding::{is_whole_number, round, round_to_nearest_tenth};
use tracing::debug;

use super::yes_no;
use crate::Result;

/// Run the round command
///
/// Prints whether `value` is whole, then either the value rounded to the
/// nearest tenth (`tenth`) or rounded to `precision` decimal places.
pub fn run<W: Write>(value: f64, precision: i32, tenth: bool, out: &mut W) -> Result<()> {
    debug!(value, precision, tenth, "rounding");

    writeln!(out, "is_whole_number({}): {}", value, yes_no(is_whole_number(value)))?;
    if tenth {
        writeln!(out, "round_to_nearest_tenth({}) = {}", value, round_to_nearest_tenth(value))?;
    } else {
        writeln!(out, "round({}, {}) = {}", value, precision, round(value, precision))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(value: f64, precision: i32, tenth: bool) -> String {
        let mut out = Vec::new();
        run(value, precision, tenth, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_round_to_precision() {
        let text = render(3.14159, 2, false);
        assert!(text.contains("is_whole_number(3.14159): false"));
        assert!(text.contains("round(3.14159, 2) = 3.14"));
    }

    #[test]
    fn test_round_to_tenth() {
        let text = render(2.45, 0, true);
        assert!(text.contains("round_to_nearest_tenth(2.45) = 2.5"));
        assert!(!text.contains("round(2.45"));
    }

    #[test]
    fn test_whole_number_reported() {
        let text = render(10.0, 2, false);
        assert!(text.contains("is_whole_number(10): true"));
        assert!(text.contains("round(10, 2) = 10"));
    }

    #[test]
    fn test_negative_precision_uses_magnitude() {
        let text = render(1.23456, -3, false);
        assert!(text.contains("round(1.23456, -3) = 1.235"));
    }
}
