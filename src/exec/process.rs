// src/exec/process.rs

//! The live child process owned by a single run.

use std::process::{ExitStatus, Stdio};

use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::process::{Child, ChildStdout, Command};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::errors::{CmdstreamError, Result};

/// Everything left over once the process has terminated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drained {
    /// Remaining stdout, newline-trimmed.
    pub stdout: String,
    /// All of stderr, newline-trimmed.
    pub stderr: String,
    pub exit_code: i32,
}

/// A spawned command with piped stdout/stderr.
///
/// Stdout is read line by line by the owner. Stderr is accumulated by a
/// background task so the pipe never fills up while stdout is being read, and
/// is handed back in one piece by [`ProcessHandle::drain`].
///
/// Dropping the handle kills the child if it is still running and closes
/// both pipes.
pub struct ProcessHandle {
    child: Child,
    stdout: Option<BufReader<ChildStdout>>,
    /// Bytes of the line currently being read; survives a cancelled read.
    line_buf: Vec<u8>,
    stderr_task: Option<JoinHandle<std::io::Result<Vec<u8>>>>,
    exit: Option<ExitStatus>,
}

impl ProcessHandle {
    /// Spawn `cmd` with stdout/stderr piped and stdin closed.
    pub fn spawn(mut cmd: Command) -> Result<Self> {
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let mut child = cmd
            .spawn()
            .map_err(|e| CmdstreamError::runtime("spawning process", e))?;

        let stdout = child.stdout.take().map(BufReader::new);
        let stderr_task = child.stderr.take().map(|mut stderr| {
            tokio::spawn(async move {
                let mut buf = Vec::new();
                stderr.read_to_end(&mut buf).await?;
                Ok::<_, std::io::Error>(buf)
            })
        });

        debug!(pid = ?child.id(), "process spawned");

        Ok(Self {
            child,
            stdout,
            line_buf: Vec::new(),
            stderr_task,
            exit: None,
        })
    }

    /// Non-blocking check for termination.
    pub fn try_exit_code(&mut self) -> Result<Option<i32>> {
        if let Some(status) = self.exit {
            return Ok(Some(exit_code(status)));
        }
        let status = self
            .child
            .try_wait()
            .map_err(|e| CmdstreamError::runtime("polling process", e))?;
        self.exit = status;
        Ok(status.map(exit_code))
    }

    /// Wait for the next stdout line, or for the process to exit.
    ///
    /// Returns `None` once stdout is closed or termination has been observed;
    /// whatever stdout is still buffered at that point is collected by
    /// [`ProcessHandle::drain`]. Line reads are preferred over the exit
    /// notification so that output already in the pipe is delivered line by
    /// line.
    pub async fn next_stdout_line(&mut self) -> Result<Option<String>> {
        if self.exit.is_some() {
            return Ok(None);
        }
        let Some(stdout) = self.stdout.as_mut() else {
            return Ok(None);
        };

        tokio::select! {
            biased;

            read = stdout.read_until(b'\n', &mut self.line_buf) => {
                let n = read.map_err(|e| CmdstreamError::runtime("reading stdout", e))?;
                if n == 0 {
                    // EOF; a partial last line (if any) stays in line_buf for drain.
                    debug!("stdout closed");
                    return Ok(None);
                }
                if !self.line_buf.ends_with(b"\n") {
                    // EOF in the middle of a line; leave it for drain.
                    return Ok(None);
                }
                let line = decode_trimmed(&self.line_buf);
                self.line_buf.clear();
                Ok(Some(line))
            }

            status = self.child.wait() => {
                let status = status.map_err(|e| CmdstreamError::runtime("waiting for process", e))?;
                self.exit = Some(status);
                Ok(None)
            }
        }
    }

    /// Block until the process has exited and collect all remaining output.
    pub async fn drain(mut self) -> Result<Drained> {
        let status = match self.exit {
            Some(status) => status,
            None => self
                .child
                .wait()
                .await
                .map_err(|e| CmdstreamError::runtime("waiting for process", e))?,
        };
        self.exit = Some(status);

        let mut rest = std::mem::take(&mut self.line_buf);
        if let Some(mut stdout) = self.stdout.take() {
            stdout
                .read_to_end(&mut rest)
                .await
                .map_err(|e| CmdstreamError::runtime("draining stdout", e))?;
        }

        let stderr = match self.stderr_task.take() {
            Some(task) => task
                .await
                .map_err(|e| CmdstreamError::runtime("collecting stderr", std::io::Error::other(e)))?
                .map_err(|e| CmdstreamError::runtime("reading stderr", e))?,
            None => Vec::new(),
        };

        debug!(
            stdout_bytes = rest.len(),
            stderr_bytes = stderr.len(),
            "drained process output"
        );

        Ok(Drained {
            stdout: decode_trimmed(&rest),
            stderr: decode_trimmed(&stderr),
            exit_code: exit_code(status),
        })
    }
}

impl Drop for ProcessHandle {
    fn drop(&mut self) {
        if let Some(task) = self.stderr_task.take() {
            task.abort();
        }
    }
}

/// Lossy UTF-8 decode with surrounding newlines (and `\r` from CRLF) removed.
fn decode_trimmed(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .trim_matches(|c| c == '\n' || c == '\r')
        .to_string()
}

/// Numeric exit code; signal terminations map to `-<signal>` on Unix.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    -1
}
