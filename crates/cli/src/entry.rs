// SPDX-License-Identifier: MIT
// Copyright (c) 2026 futurecipherflow contributors

//! Process entry point.
//!
//! The only place where errors become exit codes and diagnostic output.
//! Everything is written to caller-supplied writers so the full process
//! contract can be exercised in-process.

use std::ffi::OsString;
use std::io::Write;

use crate::app::{App, Idle, Workload};
use crate::config::{self, Config};
use crate::error::{ConfigError, ExitCode, RunError};
use crate::lifecycle::{Lifecycle, Phase};
use crate::logging;

/// Run the binary with the default workload against real stdout/stderr.
pub fn main<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    main_with(
        args,
        |_| Box::new(Idle),
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
}

/// Load configuration, build the application and run it once.
///
/// `make_workload` is only called once configuration has loaded; on a
/// usage error no application is constructed.
pub fn main_with<I, T, F>(
    args: I,
    make_workload: F,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    F: FnOnce(&Config) -> Box<dyn Workload>,
{
    let mut lifecycle = Lifecycle::new();

    let config = match config::load(args) {
        Ok(config) => config,
        Err(e) => return report_config_error(&e, out, err),
    };

    logging::init(config.verbose());
    tracing::debug!("loaded config: verbose={}", config.verbose());

    match drive(&mut lifecycle, config, make_workload) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            emit(err, &format!("error: {}\n", e));
            e.exit_code()
        }
    }
}

fn drive<F>(lifecycle: &mut Lifecycle, config: Config, make_workload: F) -> Result<(), RunError>
where
    F: FnOnce(&Config) -> Box<dyn Workload>,
{
    lifecycle.advance(Phase::Configured)?;
    let workload = make_workload(&config);
    let app = App::with_workload(config, workload);

    lifecycle.advance(Phase::Running)?;
    let outcome = app.run();

    let next = if outcome.is_ok() {
        Phase::Succeeded
    } else {
        Phase::Failed
    };
    lifecycle.advance(next)?;
    outcome
}

fn report_config_error(e: &ConfigError, out: &mut dyn Write, err: &mut dyn Write) -> ExitCode {
    if e.is_informational() {
        emit(out, &e.rendered());
    } else {
        emit(err, &e.rendered());
    }
    e.exit_code()
}

/// Last-chance diagnostic output: a failed write has nowhere left to go.
fn emit(sink: &mut dyn Write, text: &str) {
    let _ = sink.write_all(text.as_bytes());
    let _ = sink.flush();
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
