//! Process-wide and per-thread engine access.
//!
//! The shared engine is a single [`RandomEngine`] constructed lazily on first
//! use and kept for the life of the process. All free functions in this
//! module draw from it, so their results form one evolving sequence no matter
//! which thread asks. First construction is guarded by `OnceLock` and every
//! draw by a `Mutex`.
//!
//! The thread-local engine is the alternative for callers who prefer
//! per-thread independence. It is a different stream from the shared engine.
//!
//! Both are seeded from [`EngineConfig::from_env`] when first touched, falling
//! back to OS entropy if no seed is configured.

use std::cell::RefCell;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use num_traits::Float;
use rand_distr::uniform::SampleUniform;
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::engine::RandomEngine;
use crate::error::Result;

static SHARED_ENGINE: OnceLock<Mutex<RandomEngine>> = OnceLock::new();

/// Offset added to a configured seed for each new thread-local engine, so
/// threads get distinct but reproducible streams.
static NEXT_THREAD_STREAM: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static THREAD_ENGINE: RefCell<RandomEngine> = RefCell::new(new_thread_engine());
}

fn startup_config() -> EngineConfig {
    config_from_lookup(|key| std::env::var(key).ok())
}

/// Reads the engine config through `lookup`, falling back to entropy seeding
/// when the seed is malformed.
pub(crate) fn config_from_lookup<F>(lookup: F) -> EngineConfig
where
    F: Fn(&str) -> Option<String>,
{
    EngineConfig::from_lookup(lookup).unwrap_or_else(|err| {
        warn!(error = %err, "ignoring engine seed from environment");
        EngineConfig::default()
    })
}

fn shared() -> &'static Mutex<RandomEngine> {
    SHARED_ENGINE.get_or_init(|| {
        let engine = RandomEngine::from_config(&startup_config());
        debug!(seed = engine.seed(), "initialised shared random engine");
        Mutex::new(engine)
    })
}

fn new_thread_engine() -> RandomEngine {
    let engine = thread_engine_from(&startup_config(), &NEXT_THREAD_STREAM);
    debug!(seed = engine.seed(), "initialised thread-local random engine");
    engine
}

/// Builds a thread-local engine. A configured seed is offset by the next
/// stream number taken from `streams`; otherwise the engine is entropy-seeded.
pub(crate) fn thread_engine_from(config: &EngineConfig, streams: &AtomicU64) -> RandomEngine {
    match config.seed {
        Some(seed) => {
            let stream = streams.fetch_add(1, Ordering::Relaxed);
            RandomEngine::from_seed(seed.wrapping_add(stream))
        }
        None => RandomEngine::from_entropy(),
    }
}

/// Locks and returns the process-wide engine, creating it on first call.
///
/// Every call refers to the same engine instance. The guard must be dropped
/// before calling any other function in this module from the same thread,
/// or that call deadlocks.
///
/// A poisoned lock is recovered: the engine holds no invariant a panic
/// could break.
///
/// # Examples
///
/// ```rust
/// use numeric_random::shared_engine;
/// use rand::RngCore;
///
/// let raw = shared_engine().next_u32();
/// # let _ = raw;
/// ```
pub fn shared_engine() -> MutexGuard<'static, RandomEngine> {
    shared().lock().unwrap_or_else(PoisonError::into_inner)
}

/// Runs `f` with the shared engine locked, so a sequence of draws is not
/// interleaved with draws from other threads.
///
/// ```rust
/// use numeric_random::{with_shared_engine, RandomEngine};
///
/// let (a, b) = with_shared_engine(|engine| {
///     engine.reseed(42);
///     (engine.random_int(0, 100), engine.random_int(0, 100))
/// });
///
/// let mut replay = RandomEngine::from_seed(42);
/// assert_eq!((a, b), (replay.random_int(0, 100), replay.random_int(0, 100)));
/// ```
pub fn with_shared_engine<R, F>(f: F) -> R
where
    F: FnOnce(&mut RandomEngine) -> R,
{
    let mut engine = shared_engine();
    f(&mut engine)
}

/// Restarts the shared engine on the sequence for `seed`.
pub fn reseed(seed: u64) {
    shared_engine().reseed(seed);
    debug!(seed, "reseeded shared random engine");
}

/// Runs `f` with this thread's own engine.
///
/// # Panics
///
/// Panics if called again from inside `f` on the same thread.
pub fn with_thread_engine<R, F>(f: F) -> R
where
    F: FnOnce(&mut RandomEngine) -> R,
{
    THREAD_ENGINE.with(|engine| f(&mut engine.borrow_mut()))
}

/// Draws from the shared engine: see [`RandomEngine::random_int`].
pub fn random_int(low: i32, high: i32) -> i32 {
    shared_engine().random_int(low, high)
}

/// Draws from the shared engine: see [`RandomEngine::random_float`].
pub fn random_float<T>(low: T, high: T) -> T
where
    T: Float + SampleUniform,
{
    shared_engine().random_float(low, high)
}

/// Draws from the shared engine: see [`RandomEngine::random_unit`].
pub fn random_unit<T>() -> T
where
    T: Float + SampleUniform,
{
    shared_engine().random_unit()
}

/// Draws from the shared engine: see [`RandomEngine::random_int_not_in_blacklist`].
pub fn random_int_not_in_blacklist(blacklist: &[i32], low: i32, high: i32) -> Result<i32> {
    shared_engine().random_int_not_in_blacklist(blacklist, low, high)
}
