#![cfg(unix)]

use nk_factory::supervisor::{run_capture, run_shell, SinkEvent, StreamKind};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

fn collect_events(command: &str) -> (bool, Vec<SinkEvent>) {
    let events = Mutex::new(Vec::new());
    let ok = run_shell(command, None, |event| {
        events.lock().unwrap().push(event);
    });
    (ok, events.into_inner().unwrap())
}

#[test]
fn zero_exit_reports_success() {
    let (ok, _) = collect_events("exit 0");
    assert!(ok);
}

#[test]
fn nonzero_exit_reports_failure() {
    let (ok, _) = collect_events("exit 3");
    assert!(!ok);
}

#[test]
fn stdout_preserves_per_stream_order() {
    let (ok, events) = collect_events("printf 'first\\nsecond\\n'");
    assert!(ok);
    let combined: String = events
        .iter()
        .filter_map(|event| match event {
            SinkEvent::Output(StreamKind::Stdout, text) => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(combined, "first\nsecond\n");
}

#[test]
fn stderr_is_relayed_with_its_stream_tag() {
    let (ok, events) = collect_events("echo oops 1>&2");
    assert!(ok);
    let has_stderr = events.iter().any(|event| {
        matches!(
            event,
            SinkEvent::Output(StreamKind::Stderr, text) if text.contains("oops")
        )
    });
    assert!(has_stderr);
}

#[test]
fn unknown_command_fails_and_reports_into_sink() {
    let (ok, events) = collect_events("definitely-not-a-real-binary-0b1c2d");
    assert!(!ok);
    // The shell itself reports the missing binary on stderr.
    assert!(!events.is_empty());
}

#[test]
fn working_directory_is_honored() {
    let dir = test_dir("supervisor_cwd");
    let (ok, events) = {
        let events = Mutex::new(Vec::new());
        let ok = run_shell("pwd", Some(&dir), |event| {
            events.lock().unwrap().push(event);
        });
        (ok, events.into_inner().unwrap())
    };
    assert!(ok);
    let combined: String = events
        .iter()
        .filter_map(|event| match event {
            SinkEvent::Output(_, text) => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert!(combined.contains("supervisor_cwd"));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn capture_runs_short_probes() {
    let output = run_capture("sh", &["-c", "echo probe"]).unwrap();
    assert!(output.success);
    assert_eq!(output.stdout.trim(), "probe");
}

#[test]
fn capture_reports_nonzero_exit() {
    let output = run_capture("sh", &["-c", "exit 1"]).unwrap();
    assert!(!output.success);
}

fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("nk_{}_{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}
