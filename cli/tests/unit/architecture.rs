//! Structural tests for architectural boundary enforcement.
//!
//! These tests scan source files to verify that the layer boundaries
//! between domain, application and infrastructure hold.

use std::path::{Path, PathBuf};

/// Collect all `.rs` files under a directory recursively.
fn collect_rs_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(collect_rs_files(&path));
            } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
                files.push(path);
            }
        }
    }
    files
}

/// Read a file and strip comment lines to avoid false positives.
fn read_non_comment_lines(path: &Path) -> Vec<String> {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Vec::new();
    };
    content
        .lines()
        .filter(|l| {
            let trimmed = l.trim();
            !trimmed.starts_with("//") && !trimmed.starts_with("/*") && !trimmed.starts_with('*')
        })
        .map(String::from)
        .collect()
}

fn src_dir(layer: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join(layer)
}

/// Report every line under `layer` containing one of `forbidden`.
fn violations(layer: &str, forbidden: &[&str]) -> Vec<String> {
    let mut found = Vec::new();
    for file in collect_rs_files(&src_dir(layer)) {
        let rel = file
            .strip_prefix(env!("CARGO_MANIFEST_DIR"))
            .unwrap_or(&file)
            .display()
            .to_string();
        for (i, line) in read_non_comment_lines(&file).iter().enumerate() {
            for pattern in forbidden {
                if line.contains(pattern) {
                    found.push(format!("{rel}:{}: `{pattern}` in: {line}", i + 1));
                }
            }
        }
    }
    found
}

#[test]
fn domain_is_free_of_io_and_outer_layers() {
    let found = violations(
        "domain",
        &[
            "tokio",
            "std::fs",
            "std::process",
            "std::net",
            "println!",
            "crate::application",
            "crate::infra",
            "crate::output",
            "crate::cli",
            "crate::app",
        ],
    );
    assert!(
        found.is_empty(),
        "domain boundary violated:\n{}",
        found.join("\n")
    );
}

#[test]
fn application_never_reaches_into_infra_or_presentation() {
    let found = violations(
        "application",
        &[
            "crate::infra",
            "crate::output",
            "crate::cli",
            "crate::app::",
            "println!",
            "std::io::stdin",
        ],
    );
    assert!(
        found.is_empty(),
        "application boundary violated:\n{}",
        found.join("\n")
    );
}

#[test]
fn infra_never_imports_presentation() {
    let found = violations("infra", &["crate::output", "crate::cli", "crate::app::"]);
    assert!(
        found.is_empty(),
        "infra boundary violated:\n{}",
        found.join("\n")
    );
}
