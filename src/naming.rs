//! Display titles from the `NNN-slug-words.md` filename convention.
//!
//! Posts without a `# heading` still need a list title, so one is derived
//! mechanically from the filename:
//!
//! - `013-new-post.md` → "13 New post" (leading zeros dropped, dashes to
//!   spaces, first letter capitalized)
//! - `007.md` → "7" (number-only slug)
//! - `about.md` → "About" (no numeric prefix)
//!
//! The function is total: it tolerates arbitrary strings and never returns
//! an empty title for a non-empty base — in the worst case the stripped
//! filename base comes back unchanged.

/// Derive a display title from a post filename.
pub fn title_from_filename(filename: &str) -> String {
    let base = strip_md_suffix(filename).trim();

    if let Some((number, slug)) = split_numbered(base) {
        let text = capitalize_first(slug.replace('-', " ").trim());
        return if text.is_empty() {
            number.to_string()
        } else {
            format!("{number} {text}")
        };
    }

    let fallback = capitalize_first(base.replace('-', " ").trim());
    if fallback.is_empty() {
        base.to_string()
    } else {
        fallback
    }
}

/// Strip a trailing `.md` extension, ASCII case-insensitive.
///
/// Only a literal suffix counts — `"post.md "` keeps its extension because
/// the string doesn't end with it.
fn strip_md_suffix(filename: &str) -> &str {
    let len = filename.len();
    if len >= 3
        && filename.is_char_boundary(len - 3)
        && filename[len - 3..].eq_ignore_ascii_case(".md")
    {
        &filename[..len - 3]
    } else {
        filename
    }
}

/// Split a `NNN-rest` base into its numeric prefix and slug remainder.
///
/// The prefix must be all ASCII digits and fit in a `u64`; anything else
/// (no dash, non-digit prefix, absurdly long digit run) means "no numeric
/// prefix" and the caller falls through to the plain-slug branch.
fn split_numbered(base: &str) -> Option<(u64, &str)> {
    let dash = base.find('-')?;
    let (prefix, rest) = (&base[..dash], &base[dash + 1..]);
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    prefix.parse::<u64>().ok().map(|number| (number, rest))
}

/// Capitalize only the first character, leaving the rest untouched.
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
