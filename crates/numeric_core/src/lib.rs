//! # numeric_core: Foundation Helpers for Numeric Utilities
//!
//! ## Foundation Layer Role
//!
//! numeric_core is the bottom layer of the workspace, providing stateless
//! numeric transforms:
//! - Rounding to a tenth or to an arbitrary number of decimal digits (`math::rounding`)
//! - Inclusive/exclusive range membership over any ordered type (`math::range`)
//! - Float-to-integer conversion with overflow clamping (`math::conversion`)
//! - The [`BoundType`](types::BoundType) range endpoint policy (`types`)
//!
//! ## Zero Dependency Principle
//!
//! This crate has no dependencies on other numeric_* crates, and only minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation over `f32`/`f64`
//! - tracing: Warning events when a conversion has to clamp
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use numeric_core::math::conversion::float_to_int;
//! use numeric_core::math::range::in_range;
//! use numeric_core::math::rounding::{round, round_to_nearest_tenth};
//! use numeric_core::types::BoundType;
//!
//! let tenth = round_to_nearest_tenth(3.14_f64);
//! # assert!((tenth - 3.1).abs() < 1e-12);
//! let two_digits = round(3.14159_f64, 2);
//! # assert!((two_digits - 3.14).abs() < 1e-12);
//!
//! assert!(in_range(10, 0, 10, BoundType::Inclusive));
//! assert!(!in_range(10, 0, 10, BoundType::Exclusive));
//!
//! assert_eq!(float_to_int(3.7_f32), 3);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `BoundType`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
