//! Core value types shared across the numeric helpers.
//!
//! This module provides:
//! - `bound`: The [`BoundType`] endpoint policy used by range membership tests
//!
//! # Re-exports
//!
//! [`BoundType`] is re-exported at this module level for convenience.

pub mod bound;

pub use bound::BoundType;
