// SPDX-License-Identifier: MIT
// Copyright (c) 2026 futurecipherflow contributors

//! Configuration loading from command-line arguments.
//!
//! Each call to [`load`] builds a fresh parser, so no parser state is
//! retained between calls.

use std::ffi::OsString;

use clap::Parser;

use crate::cli::Cli;
use crate::error::ConfigError;

/// Binary name handed to clap in place of `argv[0]`.
pub const BIN_NAME: &str = "futurecipherflow";

/// Validated options for one process invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    verbose: bool,
}

impl Config {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self::new(cli.verbose)
    }
}

/// Parse `args` (program name excluded) into a [`Config`].
///
/// Unrecognized flags, stray positionals and `--help`/`--version` all come
/// back as [`ConfigError`]; the caller decides what to print and how to exit.
pub fn load<I, T>(args: I) -> Result<Config, ConfigError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv = std::iter::once(OsString::from(BIN_NAME)).chain(args.into_iter().map(Into::into));
    let cli = Cli::try_parse_from(argv)?;
    Ok(Config::from(cli))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
