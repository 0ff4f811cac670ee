//! Random command implementation
//!
//! Draws from the process-wide shared engine, so a seed configured at
//! startup makes the printed values reproducible.

use std::io::Write;

use numeric_random::{random_float, random_int, random_int_not_in_blacklist};
use tracing::{debug, info};

use crate::{CliError, Result};

/// What to draw
#[derive(Debug, Clone, PartialEq)]
pub enum RandomRequest {
    /// Integers from `[low, high)`
    Int {
        /// Inclusive lower bound
        low: i32,
        /// Exclusive upper bound
        high: i32,
    },
    /// Floats from `[low, high]`
    Float {
        /// Lower bound
        low: f64,
        /// Upper bound
        high: f64,
    },
    /// Integers from `[low, high)` skipping `exclude`
    Blacklist {
        /// Inclusive lower bound
        low: i32,
        /// Exclusive upper bound
        high: i32,
        /// Values never returned
        exclude: Vec<i32>,
    },
}

impl RandomRequest {
    fn validate(&self) -> Result<()> {
        match self {
            RandomRequest::Int { low, high } if low > high => Err(CliError::InvalidArgument(
                format!("low ({}) is greater than high ({})", low, high),
            )),
            RandomRequest::Float { low, high } if !low.is_finite() || !high.is_finite() => Err(
                CliError::InvalidArgument("float bounds must be finite".to_string()),
            ),
            RandomRequest::Float { low, high } if low > high => Err(CliError::InvalidArgument(
                format!("low ({}) is greater than high ({})", low, high),
            )),
            _ => Ok(()),
        }
    }
}

/// Run the random command
///
/// Writes a header followed by `count` values, one per line.
///
/// # Errors
///
/// - [`CliError::InvalidArgument`] for inverted or non-finite bounds
/// - [`CliError::Random`] when the blacklist leaves nothing to draw
pub fn run<W: Write>(request: &RandomRequest, count: usize, out: &mut W) -> Result<()> {
    request.validate()?;
    info!(count, "drawing random values");

    match request {
        RandomRequest::Int { low, high } => {
            writeln!(out, "{} random integers [{}, {}):", count, low, high)?;
            for _ in 0..count {
                writeln!(out, "  {}", random_int(*low, *high))?;
            }
        }
        RandomRequest::Float { low, high } => {
            writeln!(out, "{} random floats [{}, {}]:", count, low, high)?;
            for _ in 0..count {
                writeln!(out, "  {:.6}", random_float(*low, *high))?;
            }
        }
        RandomRequest::Blacklist { low, high, exclude } => {
            debug!(excluded = exclude.len(), "blacklist draw");
            // Validate before printing anything
            let first = random_int_not_in_blacklist(exclude, *low, *high)?;
            writeln!(
                out,
                "{} random integers [{}, {}) excluding {}:",
                count,
                low,
                high,
                format_set(exclude)
            )?;
            if count > 0 {
                writeln!(out, "  {}", first)?;
            }
            for _ in 1..count {
                writeln!(out, "  {}", random_int_not_in_blacklist(exclude, *low, *high)?)?;
            }
        }
    }
    Ok(())
}

fn format_set(values: &[i32]) -> String {
    let items: Vec<String> = values.iter().map(i32::to_string).collect();
    format!("{{{}}}", items.join(", "))
}
