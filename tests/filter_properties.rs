// tests/filter_properties.rs

mod common;
use crate::common::RecordingSink;

use proptest::prelude::*;

use cmdstream::sink::{ColorSink, FilterSink, OutputSink};
use cmdstream::types::{Channel, OutputEvent};

fn channel_strategy() -> impl Strategy<Value = Channel> {
    prop_oneof![
        Just(Channel::Stdout),
        Just(Channel::Stderr),
        Just(Channel::Status),
    ]
}

fn event_strategy() -> impl Strategy<Value = OutputEvent> {
    (channel_strategy(), "[a-zA-Z0-9 .:-]{0,40}")
        .prop_map(|(channel, text)| OutputEvent::new(channel, text))
}

fn accept(text: &str) -> bool {
    text.len() % 2 == 0
}

proptest! {
    #[test]
    fn render_is_stateless(
        history in proptest::collection::vec(event_strategy(), 0..10),
        event in event_strategy(),
    ) {
        let fresh = ColorSink::default();
        let used = ColorSink::default();
        for e in &history {
            let _ = used.render(e);
        }

        let first = used.render(&event);
        prop_assert_eq!(&first, &fresh.render(&event));
        prop_assert_eq!(&first, &used.render(&event));
        prop_assert!(first.contains(&event.text));
        prop_assert!(first.ends_with("\x1b[0m"));
    }

    #[test]
    fn filter_forwards_exactly_the_accepted_events(
        events in proptest::collection::vec(event_strategy(), 0..30),
    ) {
        let inner = RecordingSink::new();
        let filtered = FilterSink::new(inner.clone(), accept);

        for e in &events {
            filtered.deliver(e);
        }

        let expected: Vec<OutputEvent> = events
            .iter()
            .filter(|e| e.channel == Channel::Status || accept(&e.text))
            .cloned()
            .collect();
        prop_assert_eq!(inner.events(), expected);
    }
}
