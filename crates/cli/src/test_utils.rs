// SPDX-License-Identifier: MIT
// Copyright (c) 2026 futurecipherflow contributors

//! Shared unit test utilities.
//!
//! Scripted workloads and an in-memory harness for the entry point.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::cell::Cell;
use std::rc::Rc;

use crate::app::{RunContext, Workload};
use crate::config::Config;
use crate::entry;
use crate::error::ExitCode;

/// Workload with a fixed outcome.
pub enum Scripted {
    Succeed,
    Fail(&'static str),
    Panic(&'static str),
}

impl Workload for Scripted {
    fn name(&self) -> &str {
        "scripted"
    }

    fn execute(&self, _ctx: &RunContext<'_>) -> anyhow::Result<()> {
        match self {
            Scripted::Succeed => Ok(()),
            Scripted::Fail(msg) => Err(anyhow::anyhow!(*msg)),
            Scripted::Panic(msg) => panic!("{}", msg),
        }
    }
}

/// Workload that records whether it ran and what verbosity it saw.
#[derive(Clone, Default)]
pub struct Probe {
    pub ran: Rc<Cell<u32>>,
    pub saw_verbose: Rc<Cell<Option<bool>>>,
}

impl Workload for Probe {
    fn name(&self) -> &str {
        "probe"
    }

    fn execute(&self, ctx: &RunContext<'_>) -> anyhow::Result<()> {
        self.ran.set(self.ran.get() + 1);
        self.saw_verbose.set(Some(ctx.config.verbose()));
        Ok(())
    }
}

/// Captured result of one in-process invocation.
pub struct Invocation {
    pub code: ExitCode,
    pub stdout: String,
    pub stderr: String,
    /// Whether the workload factory (and so the application) was reached.
    pub constructed: bool,
}

/// Run the entry point in-process with `workload` and captured output.
pub fn invoke(args: &[&str], workload: Scripted) -> Invocation {
    let constructed = Cell::new(false);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = entry::main_with(
        args.iter().copied(),
        |_: &Config| {
            constructed.set(true);
            Box::new(workload) as Box<dyn Workload>
        },
        &mut out,
        &mut err,
    );
    Invocation {
        code,
        stdout: String::from_utf8(out).unwrap(),
        stderr: String::from_utf8(err).unwrap(),
        constructed: constructed.get(),
    }
}
