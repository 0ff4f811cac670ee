//! Convert command implementation

use std::io::Write;

use numeric_core::math::conversion::{float_to_int, float_to_int_saturating};
use tracing::debug;

use crate::Result;

/// Run the convert command
///
/// Truncates `value` to `i32`. With `saturating` set, values below
/// `i32::MIN` clamp to the minimum instead of the maximum.
pub fn run<W: Write>(value: f64, saturating: bool, out: &mut W) -> Result<()> {
    debug!(value, saturating, "converting");

    if saturating {
        writeln!(out, "float_to_int_saturating({}) = {}", value, float_to_int_saturating(value))?;
    } else {
        writeln!(out, "float_to_int({}) = {}", value, float_to_int(value))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(value: f64, saturating: bool) -> String {
        let mut out = Vec::new();
        run(value, saturating, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_convert_truncates() {
        assert_eq!(render(3.7, false), "float_to_int(3.7) = 3\n");
        assert_eq!(render(-5.2, false), "float_to_int(-5.2) = -5\n");
    }

    #[test]
    fn test_convert_underflow_modes() {
        let value = -1e10;
        assert!(render(value, false).ends_with(&format!("= {}\n", i32::MAX)));
        assert!(render(value, true).ends_with(&format!("= {}\n", i32::MIN)));
    }
}
