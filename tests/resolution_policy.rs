// tests/resolution_policy.rs
//
// An argv command whose program is not on PATH is a runtime failure under
// both policies. `pass_through` lets the spawn call fail; `fail_fast` stops
// before spawning.

mod common;
use crate::common::{RecordingSink, init_tracing};

use std::error::Error;

use cmdstream::errors::CmdstreamError;
use cmdstream::exec::{CommandRunner, RunnerOptions};
use cmdstream::types::ResolvePolicy;

type TestResult = Result<(), Box<dyn Error>>;

const MISSING: &str = "cmdstream-definitely-not-installed-7c1f";

fn runner(resolve: ResolvePolicy) -> CommandRunner {
    CommandRunner::new(RunnerOptions { resolve })
}

#[tokio::test]
async fn pass_through_fails_at_spawn_without_status() {
    init_tracing();
    let sink = RecordingSink::new();

    let err = runner(ResolvePolicy::PassThrough)
        .run([MISSING, "--help"], &sink, &sink)
        .await
        .expect_err("missing executable must fail");

    match err {
        CmdstreamError::Runtime { ref context, ref source } => {
            assert_eq!(context, "spawning process");
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Runtime error, got {other:?}"),
    }
    assert!(err.to_string().starts_with("An error occurred"));
    assert!(sink.is_empty());
}

#[tokio::test]
async fn fail_fast_fails_before_spawning_without_status() {
    init_tracing();
    let sink = RecordingSink::new();

    let err = runner(ResolvePolicy::FailFast)
        .run(vec![MISSING], &sink, &sink)
        .await
        .expect_err("missing executable must fail");

    match err {
        CmdstreamError::Runtime { ref context, ref source } => {
            assert!(context.contains(MISSING), "context: {context}");
            assert!(context.starts_with("resolving executable"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Runtime error, got {other:?}"),
    }
    assert!(sink.is_empty());
}

#[tokio::test]
async fn default_policy_is_pass_through() {
    assert_eq!(
        CommandRunner::default().options().resolve,
        ResolvePolicy::PassThrough
    );
    assert_eq!("fail-fast".parse::<ResolvePolicy>(), Ok(ResolvePolicy::FailFast));
    assert_eq!(
        "pass_through".parse::<ResolvePolicy>(),
        Ok(ResolvePolicy::PassThrough)
    );
    assert!("sometimes".parse::<ResolvePolicy>().is_err());
}

#[cfg(unix)]
#[tokio::test]
async fn resolvable_programs_run_under_both_policies() -> TestResult {
    init_tracing();

    for policy in [ResolvePolicy::PassThrough, ResolvePolicy::FailFast] {
        let sink = RecordingSink::new();
        let code = runner(policy)
            .run(["sh", "-c", "echo resolved; exit 2"], &sink, &sink)
            .await?;

        assert_eq!(code, 2);
        assert_eq!(sink.len(), 2);
    }
    Ok(())
}

#[cfg(unix)]
#[tokio::test]
async fn missing_program_in_shell_form_is_a_normal_exit() -> TestResult {
    init_tracing();
    let sink = RecordingSink::new();

    // The shell resolves the name itself and reports 127.
    let code = runner(ResolvePolicy::FailFast)
        .run(format!("{MISSING} --help"), &sink, &sink)
        .await?;

    assert_eq!(code, 127);
    assert_eq!(sink.len(), 2, "stderr message and status: {:?}", sink.events());
    Ok(())
}
