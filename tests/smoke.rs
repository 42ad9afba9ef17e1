//! ---
//! rally_section: "05-testing"
//! rally_subsection: "integration-tests"
//! rally_type: "source"
//! rally_scope: "code"
//! rally_description: "Smoke test over the flat import surface."
//! rally_version: "v0.1.0"
//! rally_owner: "tbd"
//! ---
use std::thread;
use std::time::Duration;

use anyhow::Result;
use rallytools as rt;
use serde_json::{json, Value};
use tempfile::tempdir;

#[test]
fn import_surface_basics() -> Result<()> {
    rt::setup_logging("INFO", false)?;
    let log = rt::get_logger("smoke");
    log.info("smoke test");
    assert!(rt::is_configured());
    assert!(!rt::VERSION.is_empty());

    let dir = tempdir()?;
    let path = dir.path().join("x.json");
    rt::write_json(&path, &json!({"a": 1}))?;
    let data: Value = rt::read_json(&path)?;
    assert_eq!(data["a"], 1);
    Ok(())
}

#[test]
fn helpers_compose_through_toolkit_error() -> Result<()> {
    fn pipeline(root: &std::path::Path) -> rt::Result<String> {
        rt::write_text(root.join("in").join("note.txt"), "body")?;
        let text = rt::read_text(root.join("in").join("note.txt"))?;
        rt::read_text(root.join("missing.txt"))?;
        Ok(text)
    }

    let dir = tempdir()?;
    let err = pipeline(dir.path()).unwrap_err();
    assert!(matches!(err, rt::Error::Io(rt::IoError::NotFound { .. })));
    Ok(())
}

#[test]
fn timing_helpers_measure_delays() {
    let sleeper = rt::timeit(|ms: u64| thread::sleep(Duration::from_millis(ms)));
    sleeper.call_with(20);
    assert!(sleeper.last_runtime_secs() >= 0.02);

    let timer = rt::Timer::new();
    timer.time(|| thread::sleep(Duration::from_millis(20)));
    assert!(timer.elapsed() >= Duration::from_millis(20));
}
