#![allow(dead_code)]

pub use cmdstream_test_utils::builders;
pub use cmdstream_test_utils::{RecordingSink, init_tracing, with_timeout};

use std::sync::{Arc, Mutex};
use std::time::Instant;

use cmdstream::sink::OutputSink;
use cmdstream::types::OutputEvent;

/// Records when each event arrived, to check that output is streamed rather
/// than delivered in one burst at exit.
#[derive(Debug, Clone, Default)]
pub struct TimedSink {
    events: Arc<Mutex<Vec<(Instant, OutputEvent)>>>,
}

impl TimedSink {
    pub fn events(&self) -> Vec<(Instant, OutputEvent)> {
        self.events.lock().unwrap().clone()
    }
}

impl OutputSink for TimedSink {
    fn deliver(&self, event: &OutputEvent) {
        self.events
            .lock()
            .unwrap()
            .push((Instant::now(), event.clone()));
    }
}
