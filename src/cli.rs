// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `cmdstream`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "cmdstream",
    version,
    about = "Run a command and stream its output in colour.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to a colour/runner config file (TOML).
    ///
    /// Without it, `Cmdstream.toml` in the current directory is used if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Run COMMAND through the shell (arguments are joined with spaces).
    #[arg(long)]
    pub shell: bool,

    /// Only show output lines matching this regex.
    #[arg(long, value_name = "REGEX")]
    pub include: Option<String>,

    /// Hide output lines matching this regex.
    #[arg(long, value_name = "REGEX")]
    pub exclude: Option<String>,

    /// Print output without escape sequences.
    #[arg(long)]
    pub no_color: bool,

    /// Fail before spawning when the executable is not on PATH.
    #[arg(long)]
    pub fail_fast: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `CMDSTREAM_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// The command to run, followed by its arguments.
    #[arg(last = true, required = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
