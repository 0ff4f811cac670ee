//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! report to the supplied writer and log progress through `tracing`.

pub mod convert;
pub mod demo;
pub mod random;
pub mod range;
pub mod round;

/// Renders a boolean the way every command prints it.
pub(crate) fn yes_no(flag: bool) -> &'static str {
    if flag {
        "true"
    } else {
        "false"
    }
}
