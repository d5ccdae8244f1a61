// src/exec/runner.rs

//! Run one command to completion, streaming its output into sinks.

use tracing::{debug, info};

use crate::errors::Result;
use crate::exec::process::ProcessHandle;
use crate::exec::spec::IntoCommandSpec;
use crate::sink::{FilterSink, OutputSink};
use crate::types::{OutputEvent, ResolvePolicy};

/// Runner configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunnerOptions {
    pub resolve: ResolvePolicy,
}

/// Launches commands and streams their output.
///
/// One call to [`CommandRunner::run`] owns exactly one child process; the
/// runner itself carries no per-run state.
#[derive(Debug, Clone, Default)]
pub struct CommandRunner {
    options: RunnerOptions,
}

impl CommandRunner {
    pub fn new(options: RunnerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RunnerOptions {
        &self.options
    }

    /// Run `spec` until the process exits and return its exit code.
    ///
    /// Event order:
    /// 1. one `stdout` event per line while the process runs (blank lines
    ///    included, as empty text),
    /// 2. after exit, any remaining stdout as a single `stdout` event,
    /// 3. all of stderr as a single `stderr` event (if non-empty),
    /// 4. exactly one `status` event, delivered to `status_sink`.
    ///
    /// An invalid spec fails before anything is spawned or delivered. Launch
    /// and I/O failures come back as `Runtime` and produce no status event.
    /// A non-zero exit code is not an error.
    pub async fn run<C, S, T>(&self, spec: C, sink: &S, status_sink: &T) -> Result<i32>
    where
        C: IntoCommandSpec,
        S: OutputSink + ?Sized,
        T: OutputSink + ?Sized,
    {
        let spec = spec.into_command_spec()?;
        spec.validate()?;

        info!(cmd = %spec, "starting process");
        let cmd = spec.to_command(self.options.resolve)?;
        let mut process = ProcessHandle::spawn(cmd)?;

        let mut live_lines = 0usize;
        while let Some(line) = process.next_stdout_line().await? {
            live_lines += 1;
            sink.deliver(&OutputEvent::stdout(line));
        }
        debug!(live_lines, "live stdout finished");

        let drained = process.drain().await?;

        if !drained.stdout.is_empty() {
            sink.deliver(&OutputEvent::stdout(drained.stdout));
        }
        if !drained.stderr.is_empty() {
            sink.deliver(&OutputEvent::stderr(drained.stderr));
        }

        info!(
            cmd = %spec,
            exit_code = drained.exit_code,
            success = drained.exit_code == 0,
            "process exited"
        );
        status_sink.deliver(&OutputEvent::status(drained.exit_code));

        Ok(drained.exit_code)
    }

    /// Like [`CommandRunner::run`], but only forwards stdout/stderr text for
    /// which `accept` returns true.
    pub async fn run_with_filter<C, F, S, T>(
        &self,
        spec: C,
        accept: F,
        sink: &S,
        status_sink: &T,
    ) -> Result<i32>
    where
        C: IntoCommandSpec,
        F: Fn(&str) -> bool + Send + Sync,
        S: OutputSink + ?Sized,
        T: OutputSink + ?Sized,
    {
        let filtered = FilterSink::new(sink, accept);
        self.run(spec, &filtered, status_sink).await
    }
}
