//! Architectural Enforcement Integration Tests
//!
//! This package contains integration tests that enforce architectural principles:
//! - The conductor core never depends on a terminal or rendering crate
//! - No blocking sleeps in production code
//! - No `unwrap()` outside tests in the core
//!
//! These tests are designed to catch violations early in the development cycle.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// A line of source that breaks a rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: PathBuf,
    pub line: usize,
    pub text: String,
}

/// Root of the workspace
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

/// Every `.rs` file under `dir`
pub fn rust_sources(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|entry| entry.into_path())
        .collect()
}

/// Lines in `dir` containing any of `patterns`, ignoring comments and
/// everything from the first `#[cfg(test)]` onwards
pub fn find_violations(dir: &Path, patterns: &[&str]) -> Vec<Violation> {
    let mut violations = Vec::new();

    for path in rust_sources(dir) {
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        for (index, line) in content.lines().enumerate() {
            let trimmed = line.trim_start();
            if trimmed.starts_with("#[cfg(test)]") {
                break;
            }
            if trimmed.starts_with("//") {
                continue;
            }
            if patterns.iter().any(|pattern| line.contains(pattern)) {
                violations.push(Violation {
                    path: path.clone(),
                    line: index + 1,
                    text: line.trim().to_string(),
                });
            }
        }
    }

    violations
}

/// Format violations for an assertion message
pub fn report(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}:{}: {}", v.path.display(), v.line, v.text))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_pattern_and_skips_test_module() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("sample.rs"),
            "// ratatui in a comment\nuse ratatui::Frame;\n#[cfg(test)]\nuse ratatui::Terminal;\n",
        )
        .unwrap();

        let found = find_violations(dir.path(), &["ratatui"]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].line, 2);
    }

    #[test]
    fn test_only_rust_files_are_scanned() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.md"), "use ratatui::Frame;\n").unwrap();

        assert!(rust_sources(dir.path()).is_empty());
        assert!(find_violations(dir.path(), &["ratatui"]).is_empty());
    }
}
