// tests/integration/cli_process_test.rs

//! Exercises the compiled binary as a child process: flag handling, exit
//! statuses, and the single result line on stdout.

use super::test_helpers::{run_zkctl, stdout_of};

#[test]
fn test_help_exits_zero_and_lists_commands() {
    let output = run_zkctl(&["--help"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = stdout_of(&output);
    assert!(stdout.contains("exists"));
    assert!(stdout.contains("create"));
    assert!(stdout.contains("remove"));
}

#[test]
fn test_version_exits_zero() {
    let output = run_zkctl(&["--version"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("zkctl"));
}

#[test]
fn test_no_arguments_exits_one() {
    let output = run_zkctl(&[]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_missing_path_flag_exits_one() {
    let output = run_zkctl(&["exists"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_unknown_subcommand_exits_one() {
    let output = run_zkctl(&["watch", "-p", "/app"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_invalid_node_path_exits_one() {
    let output = run_zkctl(&["exists", "-p", "not-absolute"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("invalid node path"));
}

#[test]
fn test_invalid_server_exits_one() {
    let output = run_zkctl(&["exists", "-s", "no-port-here", "-p", "/app"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("invalid server"));
}

#[test]
fn test_unreachable_server_reports_cannot_connect() {
    // Port 1 is essentially never a ZooKeeper server; the connect attempt
    // fails or times out, and either way the result line is the same.
    let output = run_zkctl(&["exists", "-s", "127.0.0.1:1", "-p", "/"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("cannot connect to 127.0.0.1:1"));
}
