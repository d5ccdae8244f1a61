// src/config/model.rs

use serde::Deserialize;

use crate::exec::RunnerOptions;
use crate::sink::Palette;
use crate::types::ResolvePolicy;

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [colors]
/// stdout = "blue"
/// stderr = "bright_red"
/// status = "\u001b[32m"
/// reset = "\u001b[0m"
///
/// [runner]
/// resolve = "pass_through"
/// ```
///
/// All sections are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub colors: ColorsSection,

    #[serde(default)]
    pub runner: RunnerSection,
}

/// `[colors]` section.
///
/// Each value is either a colour name (see [`crate::sink::color::named_color`])
/// or a raw escape sequence. Unset entries keep the built-in default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorsSection {
    #[serde(default)]
    pub stdout: Option<String>,

    #[serde(default)]
    pub stderr: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub reset: Option<String>,
}

/// `[runner]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunnerSection {
    /// `"pass_through"` (default) or `"fail_fast"`.
    #[serde(default)]
    pub resolve: ResolvePolicy,
}

/// Validated configuration.
///
/// Only constructed through `TryFrom<RawConfigFile>` (see `validate.rs`) or
/// [`Config::default`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub palette: Palette,
    pub resolve: ResolvePolicy,
}

impl Config {
    pub(crate) fn new_unchecked(palette: Palette, resolve: ResolvePolicy) -> Self {
        Self { palette, resolve }
    }

    pub fn runner_options(&self) -> RunnerOptions {
        RunnerOptions {
            resolve: self.resolve,
        }
    }
}
