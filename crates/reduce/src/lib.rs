//! Reduce - left fold and reduction over sequences.
//!
//! This crate provides:
//! - [`reduce()`]: fold a sequence with an optional seed, failing on an empty
//!   unseeded sequence
//! - [`fold()`]: seeded fold with a heterogeneous accumulator
//! - [`try_fold()`] / [`try_reduce()`]: the same with a fallible combining function
//! - [`Reduction`]: method-call spelling on any `Iterator`
//!
//! # Seeds
//!
//! "No seed" is `None`, never a reserved data value. `Some(0)`, `Some("")`
//! and `Some(false)` are seeds like any other:
//!
//! ```
//! use reduce::reduce;
//!
//! assert_eq!(reduce(|a, b| a + b, [1, 2, 3, 4], None), Ok(10));
//! assert_eq!(reduce(|a, b| a + b, [1, 2, 3, 4], Some(10)), Ok(20));
//! assert_eq!(reduce(|a, b| a + b, Vec::<i32>::new(), Some(0)), Ok(0));
//! assert!(reduce(|a: i32, b| a + b, [], None).is_err());
//! ```
//!
//! # Traversal
//!
//! Every operator pulls elements strictly left to right, at most once each,
//! holding nothing but the accumulator and the element being combined.

mod errors;
mod ext;
mod reduce;

pub use errors::{EmptyReductionError, ReduceError};
pub use ext::Reduction;
pub use reduce::{fold, reduce, try_fold, try_reduce};

use std::sync::Once;

use tracing_subscriber::util::TryInitError;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=reduce=debug` or `RUST_LOG=reduce=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            if let Err(err) = install_subscriber() {
                tracing::debug!(%err, "keeping the subscriber installed by the host");
            }
        }
    });
}

/// Install the `RUST_LOG`-filtered fmt subscriber as the global default.
///
/// Fails if the host binary already installed one.
fn install_subscriber() -> Result<(), TryInitError> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::from_default_env();
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_level(true))
        .with(filter)
        .try_init()
}
