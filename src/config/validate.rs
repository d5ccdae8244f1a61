// src/config/validate.rs

use crate::config::model::{ColorsSection, Config, RawConfigFile};
use crate::errors::{CmdstreamError, Result};
use crate::sink::Palette;
use crate::sink::color::named_color;

impl TryFrom<RawConfigFile> for Config {
    type Error = CmdstreamError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        let palette = resolve_palette(&raw.colors)?;
        Ok(Config::new_unchecked(palette, raw.runner.resolve))
    }
}

fn resolve_palette(colors: &ColorsSection) -> Result<Palette> {
    let mut palette = Palette::default();

    if let Some(ref value) = colors.stdout {
        palette.stdout = resolve_color("stdout", value)?;
    }
    if let Some(ref value) = colors.stderr {
        palette.stderr = resolve_color("stderr", value)?;
    }
    if let Some(ref value) = colors.status {
        palette.status = resolve_color("status", value)?;
    }
    if let Some(ref value) = colors.reset {
        palette.reset = resolve_escape("reset", value)?;
    }

    Ok(palette)
}

/// A colour name or a raw escape sequence.
fn resolve_color(key: &str, value: &str) -> Result<String> {
    if let Some(seq) = named_color(value) {
        return Ok(seq.to_string());
    }
    resolve_escape(key, value).map_err(|_| {
        CmdstreamError::ConfigError(format!(
            "[colors].{key}: unknown colour '{value}' (expected a colour name or an escape sequence)"
        ))
    })
}

/// Empty, or an escape sequence without line breaks.
fn resolve_escape(key: &str, value: &str) -> Result<String> {
    if value.is_empty() {
        return Ok(String::new());
    }
    if !value.starts_with('\x1b') {
        return Err(CmdstreamError::ConfigError(format!(
            "[colors].{key} must be empty or start with an escape character (\\u001b)"
        )));
    }
    if value.contains(['\n', '\r']) {
        return Err(CmdstreamError::ConfigError(format!(
            "[colors].{key} must not contain line breaks"
        )));
    }
    Ok(value.to_string())
}
