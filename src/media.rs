//! Inline media detection for post previews.
//!
//! Three stateless classifiers over raw post text, used by metadata
//! extraction to pick a preview image, skip pure-image lines when hunting
//! for the excerpt paragraph, and recognize single-video URLs:
//!
//! - [`first_image_url`] — first image reference in a whole document
//! - [`is_image_line`] — is this line nothing but an image?
//! - [`video_id`] — is this line exactly one recognized YouTube URL?
//!
//! The patterns are compiled once into `LazyLock` statics; there is no
//! shared mutable state and no lifecycle to manage.

use regex::Regex;
use std::sync::LazyLock;

/// Markdown image reference `![alt](url)`, capturing the URL.
static MD_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[[^\]]*\]\(([^)]+)\)").unwrap());

/// HTML image tag `<img ... src="url" ...>`, capturing the URL.
/// Accepts single or double quotes around the attribute value.
static HTML_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<img[^>]+src=["']([^"']+)["']"#).unwrap());

/// A line that is exactly one markdown image and nothing else.
static MD_IMAGE_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*!\[[^\]]*\]\([^)]+\)\s*$").unwrap());

/// An HTML image tag anywhere in a line.
static HTML_IMAGE_ANYWHERE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<img[^>]+src=").unwrap());

/// Whole-line `https://www.youtube.com/watch?v=<id>` (www. optional).
static YOUTUBE_WATCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://(?:www\.)?youtube\.com/watch\?v=([A-Za-z0-9_-]{11})$").unwrap()
});

/// Whole-line `https://youtu.be/<id>` short link.
static YOUTUBE_SHORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https://youtu\.be/([A-Za-z0-9_-]{11})$").unwrap());

/// Find the first image URL in a document.
///
/// Markdown syntax wins over HTML syntax: the whole document is checked for
/// `![alt](url)` first, then for `<img src>`. This is syntax priority, not
/// position priority — a markdown image later in the document beats an HTML
/// image earlier in it.
///
/// A reference whose URL trims to nothing (`![alt]( )`) yields `None`, so
/// an empty string can never reach the wire as a preview.
pub fn first_image_url(content: &str) -> Option<String> {
    MD_IMAGE
        .captures(content)
        .or_else(|| HTML_IMAGE.captures(content))
        .map(|caps| caps[1].trim().to_string())
        .filter(|url| !url.is_empty())
}

/// True when a line carries only an image.
///
/// Either the trimmed line is exactly a markdown image reference, or it
/// contains an HTML image tag anywhere. Such lines are skipped when picking
/// the first text paragraph for the excerpt.
pub fn is_image_line(line: &str) -> bool {
    let trimmed = line.trim();
    MD_IMAGE_ONLY.is_match(trimmed) || HTML_IMAGE_ANYWHERE.is_match(trimmed)
}

/// Extract the video id when a line is exactly one recognized YouTube URL.
///
/// Two shapes qualify, each as an exact whole-line match after trimming:
/// the watch form (`youtube.com/watch?v=...`) and the short-link form
/// (`youtu.be/...`). The id is always 11 characters of `[A-Za-z0-9_-]`;
/// trailing query parameters disqualify the line.
pub fn video_id(line: &str) -> Option<String> {
    let trimmed = line.trim();
    YOUTUBE_WATCH
        .captures(trimmed)
        .or_else(|| YOUTUBE_SHORT.captures(trimmed))
        .map(|caps| caps[1].to_string())
}
