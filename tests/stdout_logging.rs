//! ---
//! rally_section: "05-testing"
//! rally_subsection: "integration-tests"
//! rally_type: "source"
//! rally_scope: "code"
//! rally_description: "Log lines written to stdout by a child process."
//! rally_version: "v0.1.0"
//! rally_owner: "tbd"
//! ---
//! The logger writes straight to the process stdout, so this target runs
//! without the test harness: it re-executes itself as a child that only
//! logs, and inspects exactly what the child printed.
use std::env;
use std::process::Command;

const CHILD_MODE: &str = "RALLYTOOLS_STDOUT_CHILD";

fn main() {
    if let Ok(mode) = env::var(CHILD_MODE) {
        emit_hello(&mode);
        return;
    }

    pretty_setup_prints_one_plain_line();
    json_setup_prints_one_json_object();
    println!("stdout_logging: 2 checks passed");
}

fn emit_hello(mode: &str) {
    rallytools::setup_logging("INFO", mode == "json").expect("configure logging");
    rallytools::get_logger("x").info("hello");
}

fn child_stdout_lines(mode: &str) -> Vec<String> {
    let output = Command::new(env::current_exe().expect("test binary path"))
        .env(CHILD_MODE, mode)
        .output()
        .expect("spawn child");
    assert!(
        output.status.success(),
        "child failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_owned)
        .collect()
}

fn pretty_setup_prints_one_plain_line() {
    let lines = child_stdout_lines("pretty");
    assert_eq!(lines.len(), 1, "unexpected output: {lines:?}");

    // Piped stdout is not a terminal, so no colour codes.
    let line = &lines[0];
    assert!(!line.contains('\x1b'), "colour codes in {line:?}");
    assert!(line.contains(" INFO "), "{line}");
    assert!(line.contains("hello"), "{line}");
    assert!(line.ends_with("logger=x"), "{line}");
}

fn json_setup_prints_one_json_object() {
    let lines = child_stdout_lines("json");
    assert_eq!(lines.len(), 1, "unexpected output: {lines:?}");

    let record: serde_json::Value = serde_json::from_str(&lines[0]).expect("line parses as json");
    assert_eq!(record["message"], "hello");
    assert_eq!(record["logger"], "x");
    assert_eq!(record["level"], "INFO");
    assert!(record["timestamp"].is_string());
}
