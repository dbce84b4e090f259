//! Records serialized into the generated artifacts.
//!
//! These types define the wire contract between the generator and the
//! client-side app, so field names are camelCase on the wire and optional
//! fields are omitted entirely when underived (never emitted as null).

use serde::{Deserialize, Serialize};

/// Preview metadata derived from one post's content.
///
/// `excerpt` and `preview_you_tube_id` are mutually exclusive: when the
/// first body paragraph is a recognized video URL, the video replaces the
/// text preview. `preview_image` is independent of both — it comes from a
/// whole-document scan and may co-occur with either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMeta {
    /// From the first `# heading`, or derived from the filename as fallback.
    /// Always present, never empty for a non-empty filename.
    pub title: String,
    /// Truncated first body paragraph, with `**` pairs stripped and a
    /// literal `...` suffix. Absent for media-only or body-less posts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// URL of the first image reference anywhere in the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_image: Option<String>,
    /// 11-character YouTube video id, when the first body paragraph is a
    /// recognized single-video URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_you_tube_id: Option<String>,
}

/// One post as it appears in a page file: source filename plus metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostEntry {
    /// Source filename including the `.md` extension — the post's unique
    /// key, and the sort key for newest-first ordering.
    pub filename: String,
    #[serde(flatten)]
    pub meta: PostMeta,
}

/// The `meta.json` manifest, regenerated wholesale every run.
///
/// `total_pages` is forced to 1 for an existing-but-empty corpus so client
/// pagination math never divides by zero; a missing posts directory yields
/// 0 instead, and no page files at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagesManifest {
    pub total_pages: u32,
    pub posts_per_page: u32,
}

/// One `{N}.json` page file: a fixed-size, newest-first slice of the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageFile {
    /// 1-based page number, matching the filename.
    pub page: u32,
    pub posts: Vec<PostEntry>,
}
