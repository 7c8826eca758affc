//! Runs the built binary; only flags that exit before the UI starts.

use std::process::Command;

fn tea_gathering_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tea-gathering"))
}

#[test]
fn help_lists_lesson_options() {
    let output = tea_gathering_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--drinkers"));
    assert!(stdout.contains("--strict"));
    assert!(stdout.contains("keeping components pure"));
}

#[test]
fn missing_drinkers_value_is_an_error() {
    let output = tea_gathering_cmd()
        .arg("--drinkers")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("a value is required") || stderr.contains("requires a value"),
        "Expected clap error about missing value, got: {}",
        stderr
    );
}
