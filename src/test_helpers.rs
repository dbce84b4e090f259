//! Shared test utilities for the mdpager test suite.
//!
//! Builds throwaway post corpora in temp directories and reads generated
//! artifacts back as JSON values, so filesystem tests stay short and
//! isolated from each other.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Create a temp posts directory containing the given `(filename, content)`
/// files. The directory is the corpus root — flat, like production.
pub fn posts_dir(files: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (filename, content) in files {
        fs::write(tmp.path().join(filename), content).unwrap();
    }
    tmp
}

/// Corpus of `count` uniform posts named `001-post.md` .. `{count}-post.md`,
/// each with a heading and one body paragraph.
pub fn numbered_corpus(count: usize) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for n in 1..=count {
        let filename = format!("{n:03}-post.md");
        let content = format!("# Post {n}\n\nBody of post number {n}.\n");
        fs::write(tmp.path().join(filename), content).unwrap();
    }
    tmp
}

/// Read a generated artifact back as a JSON value. Panics on a missing file
/// or invalid JSON — both are test failures.
pub fn read_json(path: &Path) -> serde_json::Value {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("artifact {} not readable: {e}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("artifact {} is not valid JSON: {e}", path.display()))
}
