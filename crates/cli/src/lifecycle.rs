// SPDX-License-Identifier: MIT
// Copyright (c) 2026 futurecipherflow contributors

//! Process lifecycle state machine.
//!
//! ```text
//! Initializing -> Configured -> Running -> Succeeded
//!                                       \-> Failed
//! ```
//!
//! `Succeeded` and `Failed` are terminal.

use std::fmt;

use thiserror::Error;

/// A phase of the process lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Initializing,
    Configured,
    Running,
    Succeeded,
    Failed,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Succeeded | Phase::Failed)
    }

    /// Whether `self -> to` is an edge of the state machine.
    pub fn can_advance_to(self, to: Phase) -> bool {
        matches!(
            (self, to),
            (Phase::Initializing, Phase::Configured)
                | (Phase::Configured, Phase::Running)
                | (Phase::Running, Phase::Succeeded)
                | (Phase::Running, Phase::Failed)
        )
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Initializing => "initializing",
            Phase::Configured => "configured",
            Phase::Running => "running",
            Phase::Succeeded => "succeeded",
            Phase::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Rejected phase transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("illegal lifecycle transition: {from} -> {to}")]
pub struct TransitionError {
    pub from: Phase,
    pub to: Phase,
}

/// Tracks the current phase and enforces legal transitions.
#[derive(Debug)]
pub struct Lifecycle {
    phase: Phase,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            phase: Phase::Initializing,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Move to `to`, or leave the phase untouched and report the bad edge.
    pub fn advance(&mut self, to: Phase) -> Result<Phase, TransitionError> {
        let from = self.phase;
        if !from.can_advance_to(to) {
            return Err(TransitionError { from, to });
        }
        tracing::debug!("lifecycle: {} -> {}", from, to);
        self.phase = to;
        Ok(to)
    }
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
