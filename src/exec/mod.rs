// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`spec`] defines the command shapes and how they become a
//!   `tokio::process::Command` (shell vs. direct exec, `PATH` resolution).
//! - [`process`] owns the spawned child: line reads, polling, final drain.
//! - [`runner`] drives one run and delivers events to the sinks.

pub mod process;
pub mod runner;
pub mod spec;

pub use process::{Drained, ProcessHandle};
pub use runner::{CommandRunner, RunnerOptions};
pub use spec::{CommandSpec, IntoCommandSpec};

use crate::errors::Result;
use crate::sink::ColorSink;

/// Run `spec` with the default runner, printing every line in colour.
pub async fn cmd_execute<C: IntoCommandSpec>(spec: C) -> Result<i32> {
    let sink = ColorSink::default();
    CommandRunner::default().run(spec, &sink, &sink).await
}

/// Run `spec` with the default runner, printing only the stdout/stderr text
/// for which `accept` returns true. The exit status is always printed.
pub async fn execute<C, F>(spec: C, accept: F) -> Result<i32>
where
    C: IntoCommandSpec,
    F: Fn(&str) -> bool + Send + Sync,
{
    let sink = ColorSink::default();
    CommandRunner::default()
        .run_with_filter(spec, accept, &sink, &sink)
        .await
}
