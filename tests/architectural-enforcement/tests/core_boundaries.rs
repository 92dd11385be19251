//! The conductor core stays headless
//!
//! Surfaces depend on the core, never the other way round. The core also
//! runs inside the TUI's async event loop, so it must not block it.

use architectural_enforcement::{find_violations, report, workspace_root};

fn core_src() -> std::path::PathBuf {
    workspace_root().join("conductor").join("core").join("src")
}

#[test]
fn core_has_no_terminal_dependencies() {
    let violations = find_violations(&core_src(), &["ratatui", "crossterm", "mailchat_tui"]);
    assert!(
        violations.is_empty(),
        "Core must stay headless:\n{}",
        report(&violations)
    );
}

#[test]
fn core_manifest_has_no_terminal_dependencies() {
    let manifest = std::fs::read_to_string(
        workspace_root().join("conductor").join("core").join("Cargo.toml"),
    )
    .expect("core manifest should be readable");

    for forbidden in ["ratatui", "crossterm", "mailchat-tui"] {
        assert!(
            !manifest.contains(forbidden),
            "conductor/core/Cargo.toml must not depend on {forbidden}"
        );
    }
}

#[test]
fn core_runtime_is_a_dev_dependency_only() {
    let manifest = std::fs::read_to_string(
        workspace_root().join("conductor").join("core").join("Cargo.toml"),
    )
    .expect("core manifest should be readable");

    let runtime_deps = manifest
        .split("[dependencies]")
        .nth(1)
        .and_then(|rest| rest.split("[dev-dependencies]").next())
        .expect("core manifest should have a [dependencies] table");

    assert!(
        !runtime_deps.lines().any(|line| line.trim_start().starts_with("tokio")),
        "conductor/core uses no tokio APIs outside tests; keep it under [dev-dependencies]"
    );
}

#[test]
fn no_blocking_sleep_in_production_code() {
    let root = workspace_root();
    let mut violations = find_violations(&core_src(), &["std::thread::sleep", "thread::sleep("]);
    violations.extend(find_violations(
        &root.join("tui").join("src"),
        &["std::thread::sleep", "thread::sleep("],
    ));
    assert!(
        violations.is_empty(),
        "Use tokio::time instead of blocking sleeps:\n{}",
        report(&violations)
    );
}

#[test]
fn core_does_not_unwrap_outside_tests() {
    let violations = find_violations(&core_src(), &[".unwrap()", ".expect("]);
    assert!(
        violations.is_empty(),
        "Propagate errors instead of panicking:\n{}",
        report(&violations)
    );
}
