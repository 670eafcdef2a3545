//! Hygiene — enforces coding standards at test time
//!
//! Scans the content crate's production sources for patterns that would let
//! the agent panic inside a host page or swallow errors silently. Each
//! pattern has a budget (zero); it never grows. A second check keeps browser
//! bindings confined to `browser.rs` so the agent core stays testable.

use std::fs;
use std::path::Path;

/// (pattern, budget, why it matters)
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics inside the host page"),
    (".expect(", 0, "panics inside the host page"),
    ("panic!(", 0, "panics inside the host page"),
    ("unreachable!(", 0, "panics inside the host page"),
    ("todo!(", 0, "unfinished stub"),
    ("unimplemented!(", 0, "unfinished stub"),
    ("let _ =", 0, "discards an error without inspecting it"),
    (".ok()", 0, "discards an error without inspecting it"),
    ("Err(_)", 0, "discards an error without inspecting it"),
    ("#[allow(dead_code)]", 0, "hides unused code"),
];

/// Only this file may name browser binding crates.
const BROWSER_SHELL: &str = "browser.rs";
const BROWSER_CRATES: &[&str] = &["web_sys", "js_sys", "wasm_bindgen"];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `content/src/`, excluding test files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| line.contains(pattern))
                .count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("agent.rs")));
    assert!(files.iter().all(|f| !f.path.ends_with("_test.rs")));
}

#[test]
fn pattern_budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, budget, why) in BUDGETS {
        let found = hits(&files, pattern);
        let total: usize = found.iter().map(|(_, c)| c).sum();
        if total > *budget {
            let detail = found
                .iter()
                .map(|(path, count)| format!("    {path}: {count}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("`{pattern}` ({why}): found {total}, max {budget}\n{detail}"));
        }
    }
    assert!(failures.is_empty(), "budget exceeded:\n{}", failures.join("\n"));
}

#[test]
fn browser_bindings_stay_in_shell() {
    let files = source_files();
    let leaks: Vec<String> = files
        .iter()
        .filter(|f| !f.path.ends_with(BROWSER_SHELL))
        .filter(|f| BROWSER_CRATES.iter().any(|c| f.content.contains(&format!("{c}::"))))
        .map(|f| f.path.clone())
        .collect();
    assert!(leaks.is_empty(), "browser bindings outside {BROWSER_SHELL}: {leaks:?}");
}
