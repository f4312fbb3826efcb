//! CLI argument parsing with clap derive.

use clap::Parser;

/// Configure and run the futurecipherflow application
#[derive(Debug, Parser)]
#[command(name = "futurecipherflow")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging (`--verbose` alone means true)
    #[arg(
        short,
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        action = clap::ArgAction::Set
    )]
    pub verbose: bool,
}
