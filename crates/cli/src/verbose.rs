// SPDX-License-Identifier: MIT
// Copyright (c) 2026 futurecipherflow contributors

//! Verbose diagnostic output.
//!
//! Writes to stderr, and only when `--verbose` was given. Separate from
//! `tracing` events: this is the human-facing section/line report of what
//! a run did, not a log stream.

/// Verbose output logger. Writes to stderr when enabled.
#[derive(Debug, Clone, Copy)]
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Print an indented line under the current section.
    pub fn log(&self, msg: &str) {
        if self.enabled {
            eprintln!("  {}", msg);
        }
    }

    /// Print an indented `key: value` line.
    pub fn field(&self, key: &str, value: impl std::fmt::Display) {
        if self.enabled {
            eprintln!("  {}: {}", key, value);
        }
    }

    /// Print a section header.
    pub fn section(&self, title: &str) {
        if self.enabled {
            eprintln!("\n{}:", title);
        }
    }
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
