//! Per-post metadata extraction.
//!
//! One pure function turns raw post text into a [`PostMeta`] record for the
//! list view. Each field has its own source and fallback chain:
//!
//! - **Title**: first line starting with `# `, marker stripped. Falls back
//!   to the filename-derived title ([`crate::naming`]) when no heading
//!   exists — every post gets a title.
//!
//! - **Excerpt / preview video**: the first body line (strictly after the
//!   heading) that is non-empty, not a heading, and not image-only is the
//!   "first paragraph". If that line is exactly a recognized YouTube URL it
//!   becomes the preview video and no excerpt is emitted; otherwise it is
//!   truncated into the excerpt. The two are mutually exclusive by
//!   construction.
//!
//! - **Preview image**: first image reference anywhere in the *full*
//!   document, heading included — independent of the paragraph hunt, so an
//!   image-only post still gets a list thumbnail.

use crate::media;
use crate::naming;
use crate::types::PostMeta;

/// Extract preview metadata from raw post content.
///
/// `excerpt_length` is a character limit (never split a code point);
/// `filename` is used only as the title fallback.
pub fn extract(content: &str, excerpt_length: usize, filename: &str) -> PostMeta {
    let lines: Vec<&str> = content.split('\n').collect();

    let heading_idx = lines.iter().position(|line| line.starts_with("# "));
    // A bare "# " marker still counts as the heading line for body purposes,
    // but contributes no title text; the filename fallback keeps the title
    // non-empty either way.
    let heading_text =
        heading_idx.map(|idx| lines[idx].strip_prefix("# ").unwrap_or(lines[idx]).trim());
    let title = match heading_text {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => naming::title_from_filename(filename),
    };

    // Body = everything strictly after the heading line; the whole document
    // when there is no heading.
    let body = match heading_idx {
        Some(idx) => &lines[idx + 1..],
        None => &lines[..],
    };

    let first_paragraph = body.iter().copied().find(|line| {
        !line.trim().is_empty() && !line.starts_with('#') && !media::is_image_line(line)
    });

    let preview_you_tube_id = first_paragraph.and_then(media::video_id);
    let excerpt = match first_paragraph {
        Some(paragraph) if preview_you_tube_id.is_none() => {
            Some(make_excerpt(paragraph, excerpt_length))
        }
        _ => None,
    };

    PostMeta {
        title,
        excerpt,
        preview_image: media::first_image_url(content),
        preview_you_tube_id,
    }
}

/// Truncate a paragraph into an excerpt.
///
/// Trim, cut to `limit` characters (even mid-word), strip bold `**`
/// delimiters from the cut slice, and append a literal `...` —
/// unconditionally, even when the paragraph was already shorter than the
/// limit.
fn make_excerpt(paragraph: &str, limit: usize) -> String {
    let truncated: String = paragraph.trim().chars().take(limit).collect();
    let mut excerpt = truncated.replace("**", "");
    excerpt.push_str("...");
    excerpt
}
