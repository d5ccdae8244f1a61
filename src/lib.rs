// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod sink;
pub mod types;

pub use errors::{CmdstreamError, Result};
pub use exec::{CommandRunner, CommandSpec, IntoCommandSpec, RunnerOptions, cmd_execute, execute};
pub use sink::{ColorSink, FilterSink, LineFilter, OutputSink, Palette};
pub use types::{Channel, OutputEvent, ResolvePolicy};

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::load_or_default;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (colours, resolve policy)
/// - CLI overrides
/// - the line filter
/// - one run of the requested command
///
/// Returns the code the `cmdstream` process should exit with.
pub async fn run(args: CliArgs) -> anyhow::Result<i32> {
    let cfg = load_or_default(args.config.as_deref())?;

    let palette = if args.no_color {
        Palette::plain()
    } else {
        cfg.palette.clone()
    };

    let mut options = cfg.runner_options();
    if args.fail_fast {
        options.resolve = ResolvePolicy::FailFast;
    }

    let spec = command_spec_from_args(&args);
    let filter = LineFilter::new(args.include.as_deref(), args.exclude.as_deref())?;
    debug!(?options, pass_all = filter.is_pass_all(), "running command");

    let sink = ColorSink::new(palette);
    let runner = CommandRunner::new(options);
    let code = runner
        .run_with_filter(spec, |line| filter.accepts(line), &sink, &sink)
        .await?;

    Ok(process_exit_code(code))
}

/// Build the command spec for the CLI's trailing arguments.
pub fn command_spec_from_args(args: &CliArgs) -> CommandSpec {
    if args.shell {
        CommandSpec::Shell(args.command.join(" "))
    } else {
        CommandSpec::Argv(args.command.clone())
    }
}

/// Map a child exit code onto something a process can exit with.
///
/// Negative codes (killed by signal N) follow the shell convention `128 + N`.
pub fn process_exit_code(code: i32) -> i32 {
    if code < 0 {
        (128 + code.saturating_neg()).min(255)
    } else {
        code.min(255)
    }
}
