//! Stateless numeric transforms.
//!
//! - [`rounding`]: whole-number detection and decimal rounding
//! - [`range`]: inclusive/exclusive range membership
//! - [`conversion`]: float-to-integer conversion with clamping

pub mod conversion;
pub mod range;
pub mod rounding;
