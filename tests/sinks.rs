// tests/sinks.rs

mod common;
use crate::common::{RecordingSink, init_tracing};

use std::error::Error;

use cmdstream::errors::CmdstreamError;
use cmdstream::exec::CommandRunner;
use cmdstream::sink::color::named_color;
use cmdstream::sink::{ColorSink, FilterSink, LineFilter, OutputSink, Palette};
use cmdstream::types::{Channel, OutputEvent};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn default_palette_colours_each_channel() {
    let sink = ColorSink::default();

    assert_eq!(
        sink.render(&OutputEvent::stdout("building")),
        "\x1b[34mbuilding\x1b[0m"
    );
    assert_eq!(
        sink.render(&OutputEvent::stderr("warning")),
        "\x1b[1;91mwarning\x1b[0m"
    );
    assert_eq!(
        sink.render(&OutputEvent::status(0)),
        "\x1b[32mProcess exited with code: 0\x1b[0m"
    );
}

#[test]
fn custom_and_plain_palettes() {
    let palette = Palette {
        stdout: "<o>".to_string(),
        stderr: "<e>".to_string(),
        status: "<s>".to_string(),
        reset: "</>".to_string(),
    };
    let sink = ColorSink::new(palette);
    assert_eq!(sink.render(&OutputEvent::stderr("x")), "<e>x</>");
    assert_eq!(sink.palette().color_for(Channel::Status), "<s>");

    let plain = ColorSink::new(Palette::plain());
    assert_eq!(plain.render(&OutputEvent::stdout("as is")), "as is");
}

#[test]
fn colour_names_map_to_escape_sequences() {
    assert_eq!(named_color("blue"), Some("\x1b[34m"));
    assert_eq!(named_color(" Bright_Red "), Some("\x1b[91m"));
    assert_eq!(named_color("bold_green"), Some("\x1b[1;32m"));
    assert_eq!(named_color("none"), Some(""));
    assert_eq!(named_color("chartreuse"), None);
}

#[test]
fn filter_sink_drops_rejected_text_but_never_status() {
    let inner = RecordingSink::new();
    let filtered = FilterSink::new(inner.clone(), |text: &str| text.contains("keep"));

    filtered.deliver(&OutputEvent::stdout("keep me"));
    filtered.deliver(&OutputEvent::stdout("drop me"));
    filtered.deliver(&OutputEvent::stderr("keep this error"));
    filtered.deliver(&OutputEvent::stderr("noise"));
    filtered.deliver(&OutputEvent::status(1));

    assert_eq!(
        inner.events(),
        vec![
            OutputEvent::stdout("keep me"),
            OutputEvent::stderr("keep this error"),
            OutputEvent::status(1),
        ]
    );
}

#[test]
fn line_filter_combines_include_and_exclude() -> TestResult {
    let filter = LineFilter::new(Some(r"^(Get|Fetch)"), Some(r"\bcached\b"))?;

    assert!(filter.accepts("Get:1 http://deb.debian.org bookworm InRelease"));
    assert!(filter.accepts("Fetched 8,788 kB in 2s"));
    assert!(!filter.accepts("Get:2 cached index"));
    assert!(!filter.accepts("Reading package lists..."));

    let pass_all = LineFilter::default();
    assert!(pass_all.is_pass_all());
    assert!(pass_all.accepts("anything"));
    Ok(())
}

#[test]
fn line_filter_rejects_bad_patterns() {
    match LineFilter::new(Some("(unclosed"), None) {
        Err(CmdstreamError::ConfigError(msg)) => {
            assert!(msg.contains("include"));
            assert!(msg.contains("(unclosed"));
        }
        other => panic!("expected ConfigError, got {other:?}"),
    }
}

#[test]
fn shared_sinks_deliver_through_references() {
    let inner = RecordingSink::new();
    let boxed: Box<dyn OutputSink> = Box::new(inner.clone());
    let arc = std::sync::Arc::new(inner.clone());

    boxed.deliver(&OutputEvent::stdout("a"));
    arc.deliver(&OutputEvent::stdout("b"));
    (&inner).deliver(&OutputEvent::stdout("c"));

    assert_eq!(inner.texts(Channel::Stdout), vec!["a", "b", "c"]);
}

#[cfg(unix)]
#[tokio::test]
async fn run_with_filter_only_forwards_accepted_lines() -> TestResult {
    init_tracing();
    let sink = RecordingSink::new();

    let code = CommandRunner::default()
        .run_with_filter(
            "echo keep 1; sleep 0.1; echo drop 2; sleep 0.1; echo keep 3; echo drop err >&2",
            |line| line.starts_with("keep"),
            &sink,
            &sink,
        )
        .await?;

    assert_eq!(code, 0);
    assert_eq!(sink.texts(Channel::Stdout), vec!["keep 1", "keep 3"]);
    assert!(sink.texts(Channel::Stderr).is_empty());
    assert_eq!(sink.texts(Channel::Status).len(), 1);
    Ok(())
}
