use std::sync::{Arc, Mutex};

use cmdstream::sink::OutputSink;
use cmdstream::types::{Channel, OutputEvent};

/// A sink that records every delivered event.
///
/// Clones share the same event log, so a test can hand one clone to the
/// runner and inspect another afterwards.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<OutputEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<OutputEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Texts of the events on `channel`, in delivery order.
    pub fn texts(&self, channel: Channel) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|e| e.channel == channel)
            .map(|e| e.text)
            .collect()
    }

    pub fn channels(&self) -> Vec<Channel> {
        self.events().into_iter().map(|e| e.channel).collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OutputSink for RecordingSink {
    fn deliver(&self, event: &OutputEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
