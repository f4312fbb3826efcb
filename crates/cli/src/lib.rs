// SPDX-License-Identifier: MIT
// Copyright (c) 2026 futurecipherflow contributors

//! futurecipherflow: configure an application from the command line and
//! run it once.
//!
//! Lifecycle: [`config::load`] produces a [`config::Config`], an
//! [`app::App`] is built from it, [`app::App::run`] executes once, and
//! [`entry::main_with`] turns the outcome into an [`error::ExitCode`].

pub mod app;
pub mod cli;
pub mod config;
pub mod entry;
pub mod error;
pub mod lifecycle;
pub mod logging;
pub mod verbose;

#[cfg(test)]
pub mod test_utils;
