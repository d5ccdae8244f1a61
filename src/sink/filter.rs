// src/sink/filter.rs

use regex::Regex;

use crate::errors::{CmdstreamError, Result};
use crate::sink::OutputSink;
use crate::types::{Channel, OutputEvent};

/// Decorator that drops stdout/stderr events rejected by a predicate.
///
/// The predicate only sees the event text. `status` events bypass it and are
/// always forwarded.
pub struct FilterSink<S, F> {
    inner: S,
    accept: F,
}

impl<S, F> FilterSink<S, F>
where
    S: OutputSink,
    F: Fn(&str) -> bool + Send + Sync,
{
    pub fn new(inner: S, accept: F) -> Self {
        Self { inner, accept }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, F> OutputSink for FilterSink<S, F>
where
    S: OutputSink,
    F: Fn(&str) -> bool + Send + Sync,
{
    fn deliver(&self, event: &OutputEvent) {
        if event.channel != Channel::Status && !(self.accept)(&event.text) {
            return;
        }
        self.inner.deliver(event);
    }
}

/// Include/exclude line predicate built from regexes.
///
/// A line is accepted when it matches `include` (if set) and does not match
/// `exclude` (if set).
#[derive(Debug, Clone, Default)]
pub struct LineFilter {
    include: Option<Regex>,
    exclude: Option<Regex>,
}

impl LineFilter {
    pub fn new(include: Option<&str>, exclude: Option<&str>) -> Result<Self> {
        Ok(Self {
            include: include.map(|p| compile("include", p)).transpose()?,
            exclude: exclude.map(|p| compile("exclude", p)).transpose()?,
        })
    }

    pub fn is_pass_all(&self) -> bool {
        self.include.is_none() && self.exclude.is_none()
    }

    pub fn accepts(&self, text: &str) -> bool {
        if let Some(re) = &self.include {
            if !re.is_match(text) {
                return false;
            }
        }
        if let Some(re) = &self.exclude {
            if re.is_match(text) {
                return false;
            }
        }
        true
    }
}

fn compile(which: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| {
        CmdstreamError::ConfigError(format!("invalid {which} pattern '{pattern}': {e}"))
    })
}
