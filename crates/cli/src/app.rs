// SPDX-License-Identifier: MIT
// Copyright (c) 2026 futurecipherflow contributors

//! The application: owns its configuration and runs its workload once.
//!
//! What the application actually does is delegated to a [`Workload`].
//! Workload failures, panics included, come back from [`App::run`] as a
//! [`RunError`] value; the application never exits the process itself.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::config::Config;
use crate::error::RunError;
use crate::verbose::VerboseLogger;

/// Context handed to a workload for the duration of one run.
pub struct RunContext<'a> {
    pub config: &'a Config,
    pub verbose: &'a VerboseLogger,
}

/// The work performed by [`App::run`].
pub trait Workload {
    /// Short name used in diagnostics and error messages.
    fn name(&self) -> &str;

    fn execute(&self, ctx: &RunContext<'_>) -> anyhow::Result<()>;
}

/// Default workload: does nothing and succeeds.
#[derive(Debug, Default, Clone, Copy)]
pub struct Idle;

impl Workload for Idle {
    fn name(&self) -> &str {
        "idle"
    }

    fn execute(&self, ctx: &RunContext<'_>) -> anyhow::Result<()> {
        ctx.verbose.log("nothing to do");
        Ok(())
    }
}

/// One configured application instance.
pub struct App {
    config: Config,
    workload: Box<dyn Workload>,
}

impl App {
    /// Build an application running the default [`Idle`] workload.
    pub fn new(verbose: bool) -> Self {
        Self::with_workload(Config::new(verbose), Box::new(Idle))
    }

    pub fn with_workload(config: Config, workload: Box<dyn Workload>) -> Self {
        Self { config, workload }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn verbose(&self) -> bool {
        self.config.verbose()
    }

    /// Run the workload to completion.
    ///
    /// Takes `self` by value: an application runs at most once.
    pub fn run(self) -> Result<(), RunError> {
        let verbose = VerboseLogger::new(self.config.verbose());
        let name = self.workload.name().to_string();

        if verbose.is_enabled() {
            verbose.section("Configuration");
            verbose.field("verbose", self.config.verbose());
            verbose.field("workload", &name);
        }

        tracing::info!("running {}", name);
        let ctx = RunContext {
            config: &self.config,
            verbose: &verbose,
        };
        let outcome = match catch_unwind(AssertUnwindSafe(|| self.workload.execute(&ctx))) {
            Ok(Ok(())) => Ok(()),
            Ok(Err(source)) => Err(RunError::Failed {
                name: name.clone(),
                source,
            }),
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                tracing::warn!("{} panicked: {}", name, message);
                Err(RunError::Panicked {
                    name: name.clone(),
                    message,
                })
            }
        };

        if outcome.is_ok() {
            tracing::info!("{} finished", name);
        }
        verbose.section("Result");
        verbose.log(result_line(&outcome));
        outcome
    }
}

/// Verbose summary of a run. The error itself is reported by the entry point.
fn result_line(outcome: &Result<(), RunError>) -> &'static str {
    match outcome {
        Ok(()) => "ok",
        Err(_) => "failed",
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
