//! The abort path is exercised by re-running this test binary as a child
//! process, with an environment variable selecting the failing test.

use std::process::{Command, Output};

use faultline::{error, expect, fatal::fatal, location, unwrap};

const CHILD_ENV: &str = "FAULTLINE_FATAL_CHILD";

fn is_child() -> bool {
    std::env::var_os(CHILD_ENV).is_some()
}

fn run_child(test: &str, log_level: &str) -> Output {
    Command::new(std::env::current_exe().unwrap())
        .args([test, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .env("FAULTLINE_LOG", log_level)
        .env("FAULTLINE_COLOR", "never")
        .env_remove("FAULTLINE_LOG_FILE")
        .output()
        .unwrap()
}

fn assert_aborted(output: &Output) {
    assert!(!output.status.success());
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        assert_eq!(output.status.signal(), Some(6), "expected SIGABRT");
    }
}

#[test]
fn child_unwrap_error() {
    if !is_child() {
        return;
    }
    let failing: faultline::Result<u32> = Err(error!(500, "Internal Server Error"));
    let _value = unwrap!(failing);
    unreachable!("unwrap! returned on an error");
}

#[test]
fn child_expect_error() {
    if !is_child() {
        return;
    }
    let failing: faultline::Result<u32> = Err(error!(404, "Player not found"));
    let _value = expect!(failing, "the player list is preloaded");
    unreachable!("expect! returned on an error");
}

#[test]
fn child_fatal() {
    if !is_child() {
        return;
    }
    fatal("Invariant broken", location!());
}

#[test]
fn unwrap_on_error_logs_and_aborts() {
    let output = run_child("child_unwrap_error", "info");
    assert_aborted(&output);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("FATAL: [!] Error 500"));
    assert!(stderr.contains("Internal Server Error"));
    assert!(stderr.contains("FATAL: [PANIC] unwrap() failed"));
    assert!(stderr.contains("(tests/fatal.rs:"));
}

#[test]
fn unwrap_under_fatal_filter_keeps_the_error() {
    let output = run_child("child_unwrap_error", "fatal");
    assert_aborted(&output);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("FATAL: [!] Error 500"));
    assert!(stderr.contains("Internal Server Error"));
    assert!(stderr.contains("expression: failing"));
    assert!(stderr.contains("FATAL: [PANIC] unwrap() failed"));
    assert!(!stderr.contains("ERROR:"));
}

#[test]
fn expect_uses_the_custom_message() {
    let output = run_child("child_expect_error", "info");
    assert_aborted(&output);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Player not found"));
    assert!(stderr.contains("[PANIC] the player list is preloaded"));
}

#[test]
fn fatal_aborts_with_a_banner() {
    let output = run_child("child_fatal", "fatal");
    assert_aborted(&output);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("FATAL: [PANIC] Invariant broken"));
    assert!(stderr.contains("child_fatal (tests/fatal.rs:"));
}

#[test]
fn silenced_logger_still_aborts() {
    let output = run_child("child_fatal", "none");
    assert_aborted(&output);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("[PANIC]"));
}
