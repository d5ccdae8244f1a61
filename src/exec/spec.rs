// src/exec/spec.rs

//! Command specifications and how they turn into a spawnable command.

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use tokio::process::Command;
use tracing::debug;

use crate::errors::{CmdstreamError, Result};
use crate::types::ResolvePolicy;

/// What to execute.
///
/// - `Shell`: one command line, handed to the platform shell as-is.
/// - `Argv`: an ordered token list, executed directly; the first token is
///   looked up on `PATH` before spawning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandSpec {
    Shell(String),
    Argv(Vec<String>),
}

impl CommandSpec {
    pub fn shell(cmdline: impl Into<String>) -> Self {
        CommandSpec::Shell(cmdline.into())
    }

    pub fn argv<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandSpec::Argv(tokens.into_iter().map(Into::into).collect())
    }

    /// Reject shapes the runner cannot execute.
    ///
    /// A shell string is always accepted (even empty; the shell decides what
    /// that means). A token sequence needs a non-empty first token.
    pub fn validate(&self) -> Result<()> {
        match self {
            CommandSpec::Shell(_) => Ok(()),
            CommandSpec::Argv(tokens) => match tokens.first() {
                None => Err(CmdstreamError::InvalidSpec(
                    "token sequence is empty".to_string(),
                )),
                Some(program) if program.trim().is_empty() => Err(CmdstreamError::InvalidSpec(
                    "first token of the sequence is empty".to_string(),
                )),
                Some(_) => Ok(()),
            },
        }
    }

    /// Build the `tokio::process::Command` for this spec.
    ///
    /// Stdio is left untouched; the caller decides on pipes.
    pub(crate) fn to_command(&self, policy: ResolvePolicy) -> Result<Command> {
        match self {
            CommandSpec::Shell(cmdline) => Ok(shell_command(cmdline)),
            CommandSpec::Argv(tokens) => {
                let (program, args) = tokens
                    .split_first()
                    .ok_or_else(|| CmdstreamError::InvalidSpec("token sequence is empty".into()))?;
                let resolved = resolve_program(program, policy)?;
                let mut cmd = Command::new(resolved);
                cmd.args(args);
                Ok(cmd)
            }
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandSpec::Shell(cmdline) => f.write_str(cmdline),
            CommandSpec::Argv(tokens) => f.write_str(&tokens.join(" ")),
        }
    }
}

fn shell_command(cmdline: &str) -> Command {
    if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(cmdline);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(cmdline);
        c
    }
}

/// Look `program` up on `PATH`.
///
/// Under [`ResolvePolicy::PassThrough`] an unresolvable name is returned
/// unchanged so that the spawn call reports the failure.
fn resolve_program(program: &str, policy: ResolvePolicy) -> Result<OsString> {
    match which::which(program) {
        Ok(path) => {
            debug!(program, resolved = %path.display(), "resolved executable");
            Ok(path.into_os_string())
        }
        Err(err) => match policy {
            ResolvePolicy::PassThrough => {
                debug!(program, error = %err, "executable not resolved; passing name through");
                Ok(PathBuf::from(program).into_os_string())
            }
            ResolvePolicy::FailFast => Err(CmdstreamError::runtime(
                format!("resolving executable '{program}'"),
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("executable not found on PATH: {err}"),
                ),
            )),
        },
    }
}

/// Conversion from caller input into a [`CommandSpec`].
///
/// Strings become the shell form, sequences of strings the argv form.
/// Loosely typed input (`toml::Value`) of any other shape is rejected with
/// [`CmdstreamError::InvalidSpec`].
pub trait IntoCommandSpec {
    fn into_command_spec(self) -> Result<CommandSpec>;
}

impl IntoCommandSpec for CommandSpec {
    fn into_command_spec(self) -> Result<CommandSpec> {
        Ok(self)
    }
}

impl IntoCommandSpec for &CommandSpec {
    fn into_command_spec(self) -> Result<CommandSpec> {
        Ok(self.clone())
    }
}

impl IntoCommandSpec for &str {
    fn into_command_spec(self) -> Result<CommandSpec> {
        Ok(CommandSpec::shell(self))
    }
}

impl IntoCommandSpec for String {
    fn into_command_spec(self) -> Result<CommandSpec> {
        Ok(CommandSpec::Shell(self))
    }
}

impl IntoCommandSpec for Vec<String> {
    fn into_command_spec(self) -> Result<CommandSpec> {
        Ok(CommandSpec::Argv(self))
    }
}

impl IntoCommandSpec for Vec<&str> {
    fn into_command_spec(self) -> Result<CommandSpec> {
        Ok(CommandSpec::argv(self))
    }
}

impl IntoCommandSpec for &[&str] {
    fn into_command_spec(self) -> Result<CommandSpec> {
        Ok(CommandSpec::argv(self.iter().copied()))
    }
}

impl IntoCommandSpec for &[String] {
    fn into_command_spec(self) -> Result<CommandSpec> {
        Ok(CommandSpec::Argv(self.to_vec()))
    }
}

impl<const N: usize> IntoCommandSpec for [&str; N] {
    fn into_command_spec(self) -> Result<CommandSpec> {
        Ok(CommandSpec::argv(self))
    }
}

impl IntoCommandSpec for toml::Value {
    fn into_command_spec(self) -> Result<CommandSpec> {
        match self {
            toml::Value::String(cmdline) => Ok(CommandSpec::Shell(cmdline)),
            toml::Value::Array(items) => {
                let tokens = items
                    .into_iter()
                    .map(|item| match item {
                        toml::Value::String(s) => Ok(s),
                        other => Err(CmdstreamError::InvalidSpec(format!(
                            "token sequence contains a {} instead of a string",
                            other.type_str()
                        ))),
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(CommandSpec::Argv(tokens))
            }
            other => Err(CmdstreamError::InvalidSpec(format!(
                "expected a string or a sequence of strings, got a {}",
                other.type_str()
            ))),
        }
    }
}
