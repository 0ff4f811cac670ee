//! Demo command: a guided tour of every utility.
//!
//! # Expected Output
//!
//! ```text
//! numeric utilities - Example Usage
//! ===============================
//!
//! === Rounding Functions ===
//! Original: 3.14159
//! round_to_nearest_tenth: 3.1
//! ...
//! === Modern Random Engine ===
//! Raw engine outputs (seed 42):
//!   ...
//!
//! Example completed successfully!
//! ```
//!
//! Random sections draw from the shared engine, so running with `--seed`
//! prints the same values every time.

use std::io::Write;

use numeric_core::math::conversion::float_to_int;
use numeric_core::math::range::in_range;
use numeric_core::math::rounding::{is_whole_number, round, round_to_nearest_tenth};
use numeric_core::types::BoundType;
use numeric_random::{random_float, random_int, random_int_not_in_blacklist, shared_engine};
use rand::RngCore;
use tracing::info;

use super::yes_no;
use crate::config::CliConfig;
use crate::Result;

/// Runs every demonstration, drawing `config.sample_count` values in each
/// random section.
pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> Result<()> {
    writeln!(out, "numeric utilities - Example Usage")?;
    writeln!(out, "===============================")?;
    writeln!(out)?;

    rounding(out)?;
    random_numbers(config.sample_count, out)?;
    type_conversion(out)?;
    range_checking(out)?;
    raw_engine(config.sample_count, out)?;

    writeln!(out, "Example completed successfully!")?;
    info!("Demo complete");
    Ok(())
}

fn rounding<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "=== Rounding Functions ===")?;

    let pi = 3.14159_f32;
    writeln!(out, "Original: {}", pi)?;
    writeln!(out, "round_to_nearest_tenth: {}", round_to_nearest_tenth(pi))?;
    writeln!(out, "round(pi, 2): {}", round(pi, 2))?;
    writeln!(out, "round(pi, 4): {}", round(pi, 4))?;

    let whole = 10.0_f32;
    writeln!(out)?;
    writeln!(out, "Whole number {}:", whole)?;
    writeln!(out, "is_whole_number: {}", yes_no(is_whole_number(whole)))?;
    writeln!(out, "round_to_nearest_tenth: {}", round_to_nearest_tenth(whole))?;
    writeln!(out)?;
    Ok(())
}

fn random_numbers<W: Write>(count: usize, out: &mut W) -> Result<()> {
    writeln!(out, "=== Random Number Generation ===")?;

    writeln!(out, "{} random integers [0, 100):", count)?;
    for _ in 0..count {
        writeln!(out, "  {}", random_int(0, 100))?;
    }

    writeln!(out)?;
    writeln!(out, "{} random floats [0.0, 1.0]:", count)?;
    for _ in 0..count {
        writeln!(out, "  {:.6}", random_float(0.0_f32, 1.0_f32))?;
    }

    let blacklist = [12, 15, 18];
    writeln!(out)?;
    writeln!(out, "{} random integers [10, 20) excluding {{12, 15, 18}}:", count)?;
    for _ in 0..count {
        writeln!(out, "  {}", random_int_not_in_blacklist(&blacklist, 10, 20)?)?;
    }
    writeln!(out)?;
    Ok(())
}

fn type_conversion<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "=== Type Conversion ===")?;

    let f1 = 3.7_f32;
    let f2 = -5.2_f32;
    let d1 = 42.9_f64;
    writeln!(out, "float_to_int({}) = {}", f1, float_to_int(f1))?;
    writeln!(out, "float_to_int({}) = {}", f2, float_to_int(f2))?;
    writeln!(out, "float_to_int({}) = {}", d1, float_to_int(d1))?;
    writeln!(out)?;
    Ok(())
}

fn range_checking<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "=== Range Checking ===")?;

    let (lower, upper) = (0, 10);
    for (label, value) in [("Value", 5), ("Boundary value", 10)] {
        writeln!(out, "{}: {}, Range: [{}, {}]", label, value, lower, upper)?;
        for bound in [BoundType::Inclusive, BoundType::Exclusive] {
            writeln!(
                out,
                "in_range ({}): {}",
                bound,
                yes_no(in_range(value, lower, upper, bound))
            )?;
        }
        writeln!(out)?;
    }

    let (value, lower, upper) = (3.14_f32, 0.0_f32, 5.0_f32);
    writeln!(out, "Float value: {}, Range: [{}, {}]", value, lower, upper)?;
    writeln!(
        out,
        "in_range ({}): {}",
        BoundType::Inclusive,
        yes_no(in_range(value, lower, upper, BoundType::Inclusive))
    )?;
    writeln!(out)?;
    Ok(())
}

fn raw_engine<W: Write>(count: usize, out: &mut W) -> Result<()> {
    writeln!(out, "=== Modern Random Engine ===")?;

    let mut engine = shared_engine();
    writeln!(out, "Raw engine outputs (seed {}):", engine.seed())?;
    for _ in 0..count {
        writeln!(out, "  {}", engine.next_u32())?;
    }
    writeln!(out)?;
    Ok(())
}
