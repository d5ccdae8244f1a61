// src/sink/color.rs

//! Default sink: ANSI-coloured lines on the calling process's stdout/stderr.

use std::io::Write;

use tracing::warn;

use crate::sink::OutputSink;
use crate::types::{Channel, OutputEvent};

pub const DEFAULT_STDOUT_COLOR: &str = "\x1b[34m";
pub const DEFAULT_STDERR_COLOR: &str = "\x1b[1;91m";
pub const DEFAULT_STATUS_COLOR: &str = "\x1b[32m";
pub const DEFAULT_RESET: &str = "\x1b[0m";

/// Escape sequences used per channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub stdout: String,
    pub stderr: String,
    pub status: String,
    pub reset: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            stdout: DEFAULT_STDOUT_COLOR.to_string(),
            stderr: DEFAULT_STDERR_COLOR.to_string(),
            status: DEFAULT_STATUS_COLOR.to_string(),
            reset: DEFAULT_RESET.to_string(),
        }
    }
}

impl Palette {
    /// No escape sequences at all.
    pub fn plain() -> Self {
        Self {
            stdout: String::new(),
            stderr: String::new(),
            status: String::new(),
            reset: String::new(),
        }
    }

    pub fn color_for(&self, channel: Channel) -> &str {
        match channel {
            Channel::Stdout => &self.stdout,
            Channel::Stderr => &self.stderr,
            Channel::Status => &self.status,
        }
    }
}

/// Map a colour name to its escape sequence.
///
/// Accepts the eight basic colours, their `bright_` and `bold_` forms, and
/// `none` (empty sequence).
pub fn named_color(name: &str) -> Option<&'static str> {
    let seq = match name.trim().to_lowercase().as_str() {
        "none" => "",
        "black" => "\x1b[30m",
        "red" => "\x1b[31m",
        "green" => "\x1b[32m",
        "yellow" => "\x1b[33m",
        "blue" => "\x1b[34m",
        "magenta" => "\x1b[35m",
        "cyan" => "\x1b[36m",
        "white" => "\x1b[37m",
        "bright_black" => "\x1b[90m",
        "bright_red" => "\x1b[91m",
        "bright_green" => "\x1b[92m",
        "bright_yellow" => "\x1b[93m",
        "bright_blue" => "\x1b[94m",
        "bright_magenta" => "\x1b[95m",
        "bright_cyan" => "\x1b[96m",
        "bright_white" => "\x1b[97m",
        "bold_black" => "\x1b[1;30m",
        "bold_red" => "\x1b[1;31m",
        "bold_green" => "\x1b[1;32m",
        "bold_yellow" => "\x1b[1;33m",
        "bold_blue" => "\x1b[1;34m",
        "bold_magenta" => "\x1b[1;35m",
        "bold_cyan" => "\x1b[1;36m",
        "bold_white" => "\x1b[1;37m",
        _ => return None,
    };
    Some(seq)
}

/// Writes each event as `<color><text><reset>` followed by a newline.
///
/// `stdout` and `status` events go to stdout, `stderr` events to stderr.
#[derive(Debug, Clone, Default)]
pub struct ColorSink {
    palette: Palette,
}

impl ColorSink {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The decorated text for `event`, without the trailing newline.
    pub fn render(&self, event: &OutputEvent) -> String {
        format!(
            "{}{}{}",
            self.palette.color_for(event.channel),
            event.text,
            self.palette.reset
        )
    }
}

impl OutputSink for ColorSink {
    fn deliver(&self, event: &OutputEvent) {
        let rendered = self.render(event);
        let res = match event.channel {
            Channel::Stdout | Channel::Status => {
                let mut out = std::io::stdout().lock();
                writeln!(out, "{rendered}").and_then(|_| out.flush())
            }
            Channel::Stderr => {
                let mut err = std::io::stderr().lock();
                writeln!(err, "{rendered}").and_then(|_| err.flush())
            }
        };

        if let Err(e) = res {
            warn!(channel = %event.channel, error = %e, "failed to write output line");
        }
    }
}
