//! # numeric_cli: Command Line Front End
//!
//! Library half of the `numeric` binary. The binary in `main.rs` parses
//! arguments and installs logging; everything it runs lives here so it can
//! be exercised from tests with an in-memory writer.
//!
//! # Commands
//!
//! - `numeric demo` - Walk through every utility with sample inputs
//! - `numeric round <value>` - Round to a number of decimal places
//! - `numeric random int|float|blacklist` - Draw values from the shared engine
//! - `numeric convert <value>` - Truncate a float to `i32`
//! - `numeric range <value> <low> <high>` - Bounded range check
//!
//! # Architecture
//!
//! As part of the **Service** layer this crate depends on both
//! `numeric_core` (Foundation) and `numeric_random` (Engine) and adds
//! configuration loading on top.

#![deny(missing_docs)]

pub mod commands;
pub mod config;
pub mod error;

pub use error::{CliError, Result};

/// Crate version, as reported by `numeric --version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
