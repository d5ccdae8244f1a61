use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Logical stream an [`OutputEvent`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Stdout,
    Stderr,
    /// Final exit status message; always the last event of a run.
    Status,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Channel::Stdout => "stdout",
            Channel::Stderr => "stderr",
            Channel::Status => "status",
        };
        f.write_str(s)
    }
}

/// One unit of output handed to a sink.
///
/// `text` never carries the trailing newline of the line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputEvent {
    pub channel: Channel,
    pub text: String,
}

impl OutputEvent {
    pub fn new(channel: Channel, text: impl Into<String>) -> Self {
        Self {
            channel,
            text: text.into(),
        }
    }

    pub fn stdout(text: impl Into<String>) -> Self {
        Self::new(Channel::Stdout, text)
    }

    pub fn stderr(text: impl Into<String>) -> Self {
        Self::new(Channel::Stderr, text)
    }

    /// The status event for a finished process.
    pub fn status(exit_code: i32) -> Self {
        Self::new(Channel::Status, format!("Process exited with code: {exit_code}"))
    }
}

/// What to do when the first token of an argv-style command cannot be found
/// on `PATH`.
///
/// - `PassThrough`: hand the bare name to the spawn call and let it fail there
///   (default).
/// - `FailFast`: report the failure before spawning anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolvePolicy {
    PassThrough,
    FailFast,
}

impl Default for ResolvePolicy {
    fn default() -> Self {
        ResolvePolicy::PassThrough
    }
}

impl FromStr for ResolvePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "pass_through" => Ok(ResolvePolicy::PassThrough),
            "fail_fast" => Ok(ResolvePolicy::FailFast),
            other => Err(format!(
                "invalid resolve policy: {other} (expected \"pass_through\" or \"fail_fast\")"
            )),
        }
    }
}
