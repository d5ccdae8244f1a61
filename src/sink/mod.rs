// src/sink/mod.rs

//! Output sinks: where runner events end up.
//!
//! - [`color`] holds the default terminal renderer, [`ColorSink`].
//! - [`filter`] holds [`FilterSink`], a predicate decorator around any sink,
//!   and [`LineFilter`], a regex-based predicate used by the CLI.

use std::sync::Arc;

use crate::types::OutputEvent;

pub mod color;
pub mod filter;

pub use color::{ColorSink, Palette};
pub use filter::{FilterSink, LineFilter};

/// Receives runner events one at a time.
///
/// The runner calls `deliver` inline from its read loop, so implementations
/// must return promptly.
pub trait OutputSink: Send + Sync {
    fn deliver(&self, event: &OutputEvent);
}

impl<S: OutputSink + ?Sized> OutputSink for &S {
    fn deliver(&self, event: &OutputEvent) {
        (**self).deliver(event)
    }
}

impl<S: OutputSink + ?Sized> OutputSink for Box<S> {
    fn deliver(&self, event: &OutputEvent) {
        (**self).deliver(event)
    }
}

impl<S: OutputSink + ?Sized> OutputSink for Arc<S> {
    fn deliver(&self, event: &OutputEvent) {
        (**self).deliver(event)
    }
}
