//! Pagination and artifact writing.
//!
//! The write side of the pipeline: partition scanned posts into fixed-size
//! pages and materialize `meta.json` plus one `{N}.json` per page in the
//! output directory.
//!
//! ## Regenerate-everything policy
//!
//! There is no in-place update mode. Every run rescans the whole corpus and
//! rewrites every artifact as a wholesale replacement — never append, never
//! patch. The pass is single-threaded and runs to completion; a failure
//! mid-run can leave only the subset of pages written before the failure,
//! which the next triggered run repairs by rewriting everything.
//!
//! ## Manifest shape
//!
//! - Posts directory missing: `{"totalPages":0,"postsPerPage":10}` and no
//!   page files. Zero tells the client "nothing to fetch".
//! - Directory exists but empty: `totalPages` is 1 and `1.json` holds an
//!   empty post list, so client pagination math stays uniform.
//!
//! After a successful run, leftover page files numbered beyond the new
//! `totalPages` (from an earlier, larger corpus) are deleted, so the output
//! directory never serves stale pages.

use crate::config::{self, BlogConfig};
use crate::scan::{self, ScanError};
use crate::types::{PageFile, PagesManifest, PostEntry};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
}

/// What one generation run produced, for CLI reporting.
#[derive(Debug)]
pub struct RunSummary {
    /// All scanned posts, newest first. Empty when the directory is
    /// missing or holds no posts.
    pub posts: Vec<PostEntry>,
    /// `totalPages` as written to the manifest.
    pub total_pages: u32,
    /// `postsPerPage` as written to the manifest.
    pub posts_per_page: u32,
    /// Number of `{N}.json` files written (0 when the directory is missing).
    pub pages_written: u32,
}

/// Page count for a corpus: `ceil(count / per_page)`, floored at 1.
///
/// The floor keeps an existing-but-empty corpus at one (empty) page. The
/// missing-directory case never reaches this function.
pub fn total_pages(post_count: usize, posts_per_page: u32) -> u32 {
    post_count.div_ceil(posts_per_page as usize).max(1) as u32
}

/// Partition ordered posts into consecutive page files.
///
/// Pure function: chunk `i` (1-based) of size `posts_per_page` becomes page
/// `i`. An empty corpus yields exactly one page with an empty post list.
pub fn paginate(posts: &[PostEntry], posts_per_page: u32) -> Vec<PageFile> {
    let per_page = posts_per_page as usize;
    (1..=total_pages(posts.len(), posts_per_page))
        .map(|page| {
            let start = (page as usize - 1) * per_page;
            let end = (start + per_page).min(posts.len());
            PageFile {
                page,
                posts: posts[start..end].to_vec(),
            }
        })
        .collect()
}

/// Run the full generation pass: scan, paginate, write.
///
/// This is the "regenerate now" trigger the build/watch collaborator calls
/// on startup and on every post or config change. Write failures abort the
/// run; a missing posts directory is "zero posts", not an error.
pub fn generate(
    posts_dir: &Path,
    out_dir: &Path,
    config: &BlogConfig,
) -> Result<RunSummary, GenerateError> {
    if !posts_dir.exists() {
        fs::create_dir_all(out_dir)?;
        let manifest = PagesManifest {
            total_pages: 0,
            posts_per_page: config::DEFAULT_POSTS_PER_PAGE,
        };
        write_json(&out_dir.join("meta.json"), &manifest)?;
        return Ok(RunSummary {
            posts: Vec::new(),
            total_pages: 0,
            posts_per_page: manifest.posts_per_page,
            pages_written: 0,
        });
    }

    let posts_per_page = config.effective_posts_per_page();
    let posts = scan::scan_posts(posts_dir, config)?;
    let pages = paginate(&posts, posts_per_page);
    let manifest = PagesManifest {
        total_pages: pages.len() as u32,
        posts_per_page,
    };

    fs::create_dir_all(out_dir)?;
    write_json(&out_dir.join("meta.json"), &manifest)?;
    for page in &pages {
        write_json(&out_dir.join(format!("{}.json", page.page)), page)?;
    }
    remove_stale_pages(out_dir, manifest.total_pages)?;

    Ok(RunSummary {
        posts,
        total_pages: manifest.total_pages,
        posts_per_page,
        pages_written: manifest.total_pages,
    })
}

/// Serialize compactly and overwrite whatever is at `path`.
///
/// Compact output with declaration-ordered keys keeps unchanged input
/// producing byte-identical artifacts.
fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), GenerateError> {
    fs::write(path, serde_json::to_string(value)?)?;
    Ok(())
}

/// Delete `{N}.json` files with `N` beyond the current page count.
///
/// Only purely numeric stems qualify; `meta.json` and anything else in the
/// directory is left alone.
fn remove_stale_pages(out_dir: &Path, total_pages: u32) -> Result<(), GenerateError> {
    for entry in fs::read_dir(out_dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        let Some(stem) = name.strip_suffix(".json") else {
            continue;
        };
        if let Ok(number) = stem.parse::<u32>() {
            if number > total_pages {
                fs::remove_file(entry.path())?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{numbered_corpus, posts_dir, read_json};
    use std::fs;
    use tempfile::TempDir;

    fn run(posts: &Path, out: &Path) -> RunSummary {
        generate(posts, out, &BlogConfig::default()).unwrap()
    }

    // =========================================================================
    // paginate() / total_pages()
    // =========================================================================

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(30, 10), 3);
        assert_eq!(total_pages(31, 10), 4);
        assert_eq!(total_pages(1, 10), 1);
    }

    #[test]
    fn total_pages_floors_at_one() {
        assert_eq!(total_pages(0, 10), 1);
    }

    #[test]
    fn paginate_empty_corpus_is_one_empty_page() {
        let pages = paginate(&[], 10);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].page, 1);
        assert!(pages[0].posts.is_empty());
    }

    #[test]
    fn paginate_chunks_preserve_order() {
        let tmp = numbered_corpus(5);
        let posts = scan::scan_posts(tmp.path(), &BlogConfig::default()).unwrap();
        let pages = paginate(&posts, 2);
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].posts[0].filename, "005-post.md");
        assert_eq!(pages[0].posts[1].filename, "004-post.md");
        assert_eq!(pages[2].posts.len(), 1);
        assert_eq!(pages[2].posts[0].filename, "001-post.md");
    }

    // =========================================================================
    // generate() — directory states
    // =========================================================================

    #[test]
    fn twenty_five_posts_make_three_pages() {
        let tmp = numbered_corpus(25);
        let out = TempDir::new().unwrap();
        let summary = run(tmp.path(), out.path());
        assert_eq!(summary.total_pages, 3);

        let meta = read_json(&out.path().join("meta.json"));
        assert_eq!(meta["totalPages"], 3);
        assert_eq!(meta["postsPerPage"], 10);

        let page1 = read_json(&out.path().join("1.json"));
        assert_eq!(page1["page"], 1);
        assert_eq!(page1["posts"].as_array().unwrap().len(), 10);
        assert_eq!(page1["posts"][0]["filename"], "025-post.md");

        let page3 = read_json(&out.path().join("3.json"));
        assert_eq!(page3["posts"].as_array().unwrap().len(), 5);
        assert_eq!(page3["posts"][4]["filename"], "001-post.md");
    }

    #[test]
    fn empty_directory_writes_one_empty_page() {
        let tmp = posts_dir(&[]);
        let out = TempDir::new().unwrap();
        let summary = run(tmp.path(), out.path());
        assert_eq!(summary.total_pages, 1);

        let meta = read_json(&out.path().join("meta.json"));
        assert_eq!(meta["totalPages"], 1);

        let page1 = read_json(&out.path().join("1.json"));
        assert_eq!(page1["posts"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn missing_directory_writes_zero_manifest_and_no_pages() {
        let tmp = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let summary = run(&tmp.path().join("no-posts-here"), out.path());
        assert_eq!(summary.total_pages, 0);
        assert_eq!(summary.pages_written, 0);

        let meta = read_json(&out.path().join("meta.json"));
        assert_eq!(meta["totalPages"], 0);
        assert_eq!(meta["postsPerPage"], 10);
        assert!(!out.path().join("1.json").exists());
    }

    #[test]
    fn page_size_comes_from_config() {
        let tmp = numbered_corpus(7);
        let out = TempDir::new().unwrap();
        let config = BlogConfig {
            posts_per_page: 3,
            ..BlogConfig::default()
        };
        let summary = generate(tmp.path(), out.path(), &config).unwrap();
        assert_eq!(summary.total_pages, 3);
        let meta = read_json(&out.path().join("meta.json"));
        assert_eq!(meta["postsPerPage"], 3);
    }

    // =========================================================================
    // generate() — artifact contract
    // =========================================================================

    #[test]
    fn optional_fields_absent_from_wire_format() {
        let tmp = posts_dir(&[("001-bare.md", "# Bare Title\n")]);
        let out = TempDir::new().unwrap();
        run(tmp.path(), out.path());

        let page1 = read_json(&out.path().join("1.json"));
        let post = &page1["posts"][0];
        assert_eq!(post["title"], "Bare Title");
        assert!(post.get("excerpt").is_none());
        assert!(post.get("previewImage").is_none());
        assert!(post.get("previewYouTubeId").is_none());
    }

    #[test]
    fn wire_format_uses_camel_case_keys() {
        let tmp = posts_dir(&[(
            "001-rich.md",
            "# Rich\n\nhttps://youtu.be/AbCdEfGhIjK\n\n![p](http://x/p.png)",
        )]);
        let out = TempDir::new().unwrap();
        run(tmp.path(), out.path());

        let post = read_json(&out.path().join("1.json"))["posts"][0].clone();
        assert_eq!(post["previewYouTubeId"], "AbCdEfGhIjK");
        assert_eq!(post["previewImage"], "http://x/p.png");
    }

    #[test]
    fn no_post_carries_both_excerpt_and_video() {
        let tmp = posts_dir(&[
            ("001-text.md", "# A\n\nPlain paragraph."),
            ("002-video.md", "# B\n\nhttps://youtu.be/AbCdEfGhIjK"),
        ]);
        let out = TempDir::new().unwrap();
        let summary = run(tmp.path(), out.path());
        for post in &summary.posts {
            assert!(
                !(post.meta.excerpt.is_some() && post.meta.preview_you_tube_id.is_some()),
                "post {} has both excerpt and video preview",
                post.filename
            );
        }
    }

    #[test]
    fn rerun_on_unchanged_input_is_byte_identical() {
        let tmp = numbered_corpus(12);
        let out = TempDir::new().unwrap();
        run(tmp.path(), out.path());
        let meta_first = fs::read(out.path().join("meta.json")).unwrap();
        let page_first = fs::read(out.path().join("1.json")).unwrap();

        run(tmp.path(), out.path());
        assert_eq!(fs::read(out.path().join("meta.json")).unwrap(), meta_first);
        assert_eq!(fs::read(out.path().join("1.json")).unwrap(), page_first);
    }

    #[test]
    fn artifacts_are_overwritten_not_merged() {
        let tmp = numbered_corpus(2);
        let out = TempDir::new().unwrap();
        fs::write(out.path().join("meta.json"), "stale garbage").unwrap();
        fs::write(out.path().join("1.json"), "stale garbage").unwrap();

        run(tmp.path(), out.path());
        let meta = read_json(&out.path().join("meta.json"));
        assert_eq!(meta["totalPages"], 1);
        let page1 = read_json(&out.path().join("1.json"));
        assert_eq!(page1["posts"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn shrinking_corpus_removes_stale_page_files() {
        let out = TempDir::new().unwrap();
        let big = numbered_corpus(25);
        run(big.path(), out.path());
        assert!(out.path().join("3.json").exists());

        let small = numbered_corpus(5);
        run(small.path(), out.path());
        assert!(out.path().join("1.json").exists());
        assert!(!out.path().join("2.json").exists());
        assert!(!out.path().join("3.json").exists());
        // meta.json and non-page files survive cleanup.
        assert!(out.path().join("meta.json").exists());
    }

    #[test]
    fn non_page_json_survives_cleanup() {
        let out = TempDir::new().unwrap();
        fs::create_dir_all(out.path()).unwrap();
        fs::write(out.path().join("extra.json"), "{}").unwrap();
        let tmp = numbered_corpus(1);
        run(tmp.path(), out.path());
        assert!(out.path().join("extra.json").exists());
    }
}
