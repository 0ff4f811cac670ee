//! # numeric_random: Seeded Random Generation
//!
//! ## Engine Layer Role
//!
//! numeric_random provides ranged pseudo-random draws on top of a seeded
//! engine, in two styles:
//!
//! - **Explicit context**: own a [`RandomEngine`] and call its methods. Nothing
//!   is global; two engines with the same seed replay the same sequence.
//! - **Shared engine**: the free functions ([`random_int`], [`random_float`],
//!   [`random_unit`], [`random_int_not_in_blacklist`]) all draw from one
//!   process-wide engine created lazily on first use. Callers on any thread
//!   see consecutive values of a single sequence. [`reseed`] restarts it and
//!   [`with_thread_engine`] gives a per-thread engine instead.
//!
//! ## Generators
//!
//! | Operation | Range | Degenerate input |
//! |---|---|---|
//! | `random_int(low, high)` | `[low, high)` | `low >= high` returns `low` |
//! | `random_float(low, high)` | `[low, high]` | `!(low < high)` returns `low` |
//! | `random_unit()` | `[0, 1]` | n/a |
//! | `random_int_not_in_blacklist(bl, low, high)` | `[low, high) \ bl` | [`RandomError`] |
//!
//! ## Usage Example
//!
//! ```rust
//! use numeric_random::{random_int, random_int_not_in_blacklist, RandomEngine};
//!
//! // Shared engine
//! let roll = random_int(0, 100);
//! assert!((0..100).contains(&roll));
//!
//! let pick = random_int_not_in_blacklist(&[12, 15, 18], 10, 20).unwrap();
//! assert!((10..20).contains(&pick));
//!
//! // Explicit, reproducible engine
//! let mut engine = RandomEngine::from_seed(12345);
//! let x: f32 = engine.random_float(-5.0, -1.0);
//! assert!((-5.0..=-1.0).contains(&x));
//! ```
//!
//! ## Configuration
//!
//! Set `NUMERIC_RNG_SEED` (decimal or `0x` hex) to seed the shared and
//! thread-local engines deterministically; see [`EngineConfig`].
//!
//! Not intended for cryptographic use.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod engine;
pub mod error;
pub mod shared;

// Public re-exports
pub use config::{ConfigError, EngineConfig};
pub use engine::RandomEngine;
pub use error::{RandomError, Result};
pub use shared::{
    random_float, random_int, random_int_not_in_blacklist, random_unit, reseed, shared_engine,
    with_shared_engine, with_thread_engine,
};
