//! CLI output formatting.
//!
//! Output is information-centric: the primary line for each post is its
//! positional index and display title, with the source filename and derived
//! previews as indented context lines. Pure `format_*` functions return
//! `Vec<String>` for testability; `print_*` wrappers write to stdout.
//!
//! ```text
//! Posts
//! 001 13 New post
//!     Source: 013-new-post.md
//!     Excerpt: Hello world this is ...
//!     Preview image: http://x/hero.png
//!
//! Wrote 3 pages (25 posts, 10 per page) → public/pages
//! ```

use crate::generate::RunSummary;
use crate::types::PostEntry;
use std::path::Path;

/// Format the post inventory, newest first.
pub fn format_post_inventory(posts: &[PostEntry]) -> Vec<String> {
    let mut lines = vec!["Posts".to_string()];
    if posts.is_empty() {
        lines.push("    (no posts)".to_string());
        return lines;
    }
    for (position, post) in posts.iter().enumerate() {
        lines.push(format!("{:0>3} {}", position + 1, post.meta.title));
        lines.push(format!("    Source: {}", post.filename));
        if let Some(excerpt) = &post.meta.excerpt {
            lines.push(format!("    Excerpt: {excerpt}"));
        }
        if let Some(id) = &post.meta.preview_you_tube_id {
            lines.push(format!("    Preview video: {id}"));
        }
        if let Some(url) = &post.meta.preview_image {
            lines.push(format!("    Preview image: {url}"));
        }
    }
    lines
}

/// Format the one-line result of a generation run.
pub fn format_run_summary(summary: &RunSummary, out_dir: &Path) -> Vec<String> {
    if summary.pages_written == 0 && summary.total_pages == 0 {
        return vec![format!(
            "Posts directory missing — wrote empty manifest → {}",
            out_dir.display()
        )];
    }
    vec![format!(
        "Wrote {} page{} ({} post{}, {} per page) → {}",
        summary.pages_written,
        plural(summary.pages_written as usize),
        summary.posts.len(),
        plural(summary.posts.len()),
        summary.posts_per_page,
        out_dir.display()
    )]
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

pub fn print_post_inventory(posts: &[PostEntry]) {
    for line in format_post_inventory(posts) {
        println!("{line}");
    }
}

pub fn print_run_summary(summary: &RunSummary, out_dir: &Path) {
    for line in format_run_summary(summary, out_dir) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PostMeta;

    fn entry(filename: &str, title: &str, excerpt: Option<&str>) -> PostEntry {
        PostEntry {
            filename: filename.to_string(),
            meta: PostMeta {
                title: title.to_string(),
                excerpt: excerpt.map(String::from),
                preview_image: None,
                preview_you_tube_id: None,
            },
        }
    }

    #[test]
    fn inventory_lists_title_then_source() {
        let posts = vec![entry("013-new-post.md", "13 New post", Some("Hi..."))];
        let lines = format_post_inventory(&posts);
        assert_eq!(lines[0], "Posts");
        assert_eq!(lines[1], "001 13 New post");
        assert_eq!(lines[2], "    Source: 013-new-post.md");
        assert_eq!(lines[3], "    Excerpt: Hi...");
    }

    #[test]
    fn inventory_handles_empty_corpus() {
        let lines = format_post_inventory(&[]);
        assert_eq!(lines, ["Posts", "    (no posts)"]);
    }

    #[test]
    fn summary_counts_pages_and_posts() {
        let summary = RunSummary {
            posts: vec![entry("001-a.md", "1 A", None)],
            total_pages: 1,
            posts_per_page: 10,
            pages_written: 1,
        };
        let lines = format_run_summary(&summary, Path::new("public/pages"));
        assert_eq!(lines, ["Wrote 1 page (1 post, 10 per page) → public/pages"]);
    }

    #[test]
    fn summary_reports_missing_directory() {
        let summary = RunSummary {
            posts: vec![],
            total_pages: 0,
            posts_per_page: 10,
            pages_written: 0,
        };
        let lines = format_run_summary(&summary, Path::new("out"));
        assert_eq!(lines, ["Posts directory missing — wrote empty manifest → out"]);
    }
}
