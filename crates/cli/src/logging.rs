// SPDX-License-Identifier: MIT
// Copyright (c) 2026 futurecipherflow contributors

//! `tracing` subscriber setup.
//!
//! Events go to stderr. The filter comes from `FUTURECIPHERFLOW_LOG`
//! (EnvFilter syntax) when set, otherwise `debug` with `--verbose` and
//! `warn` without.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Environment variable holding an EnvFilter directive.
pub const LOG_ENV: &str = "FUTURECIPHERFLOW_LOG";

/// Default filter directive for the given verbosity.
pub fn default_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level(verbose)))
}

/// Install the global subscriber.
///
/// Returns false if a subscriber was already installed; the existing one
/// is left in place.
pub fn init(verbose: bool) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
