//! Corpus scanning: list post files and extract metadata for each.
//!
//! The posts directory is flat — every `*.md` file directly inside it is
//! one post, identified by its filename. The scan reads each file once,
//! runs metadata extraction, and returns the entries already in final
//! order; pagination and writing happen in [`crate::generate`].
//!
//! ## Ordering
//!
//! Entries are sorted by raw filename, descending. The corpus convention
//! uses zero-padded numeric prefixes, so reverse lexicographic order is
//! newest-first. The sort key is the byte string of the filename itself,
//! with no numeric parsing — clients re-sorting must use the same rule.
//!
//! ## Failure policy
//!
//! An unreadable post file fails the whole scan. Silently skipping a post
//! would ship a manifest whose page count disagrees with the corpus, which
//! is worse than a loud build failure.

use crate::config::BlogConfig;
use crate::metadata;
use crate::types::PostEntry;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Scan an existing posts directory into ordered post entries.
///
/// Callers handle the directory-missing case themselves (it is "zero
/// posts", not an error — see [`crate::generate::generate`]); here a
/// missing directory surfaces as an IO error like any other.
pub fn scan_posts(posts_dir: &Path, config: &BlogConfig) -> Result<Vec<PostEntry>, ScanError> {
    let mut filenames = Vec::new();
    for entry in fs::read_dir(posts_dir)? {
        let entry = entry?;
        let filename = entry.file_name().to_string_lossy().to_string();
        if filename.ends_with(".md") && entry.path().is_file() {
            filenames.push(filename);
        }
    }

    // Newest first (see module docs).
    filenames.sort_by(|a, b| b.cmp(a));

    let excerpt_length = config.effective_excerpt_length();
    let mut posts = Vec::with_capacity(filenames.len());
    for filename in filenames {
        let content = fs::read_to_string(posts_dir.join(&filename))?;
        posts.push(PostEntry {
            meta: metadata::extract(&content, excerpt_length, &filename),
            filename,
        });
    }
    Ok(posts)
}
