// SPDX-License-Identifier: MIT
// Copyright (c) 2026 futurecipherflow contributors

//! Error types and process exit codes.
//!
//! Library code never terminates the process. Every failure travels as a
//! value up to [`crate::entry`], which alone maps it onto an [`ExitCode`].

use thiserror::Error;

use crate::lifecycle::TransitionError;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// The application ran to completion.
    Success = 0,
    /// The application's run returned an error.
    Failure = 1,
    /// Malformed or unrecognized command-line input.
    Usage = 2,
}

impl ExitCode {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

/// Failure to turn command-line arguments into a [`crate::config::Config`].
///
/// Also carries clap's informational early exits (`--help`, `--version`),
/// which are not failures and map to [`ExitCode::Success`].
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ConfigError(#[from] clap::Error);

impl ConfigError {
    /// True for `--help` / `--version` style exits that print and succeed.
    pub fn is_informational(&self) -> bool {
        matches!(
            self.0.kind(),
            clap::error::ErrorKind::DisplayHelp
                | clap::error::ErrorKind::DisplayVersion
                | clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        )
    }

    /// Usage text (or help/version text) as clap would print it.
    pub fn rendered(&self) -> String {
        self.0.render().to_string()
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.is_informational() {
            ExitCode::Success
        } else {
            ExitCode::Usage
        }
    }
}

/// Failure during [`crate::app::App::run`].
#[derive(Debug, Error)]
pub enum RunError {
    /// The workload returned an error.
    #[error("{name} failed: {source:#}")]
    Failed {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    /// The workload panicked. The payload message is kept when it is a string.
    #[error("{name} panicked: {message}")]
    Panicked { name: String, message: String },

    #[error(transparent)]
    Lifecycle(#[from] TransitionError),
}

impl RunError {
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::Failure
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
