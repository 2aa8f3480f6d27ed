//! Euclidean vectors for numeric code.
//!
//! This crate re-exports the [`Vector`] type and everything around it from `evec-linalg`, and
//! hosts the `evec` command-line calculator (see [`cli`]).
//!
//! # Environment Variables
//!
//! * `RUST_LOG`: Overrides the log filters installed by [`init_logger!`], using the usual
//!   [`env_logger`] syntax.
//! * `EVEC_PRECISION`: Number of decimal places the `evec` binary prints for each value, unless
//!   `--precision` is given. If unset, values are printed with the shortest representation that
//!   round-trips.

use log::LevelFilter;

pub mod cli;

pub use evec_linalg::*;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .filter(Some("evec_linalg"), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate, `evec` and `evec-linalg` will log at *debug* level. Everything else is
/// filtered unless enabled through `RUST_LOG`.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
