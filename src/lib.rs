//! # mdpager
//!
//! Build-time generator of paginated JSON post indexes for a static markdown
//! blog. Your filesystem is the data source: a flat directory of `*.md` files
//! is the post corpus, filenames carry the publication order, and the output
//! is a set of small JSON artifacts a client-side app fetches over HTTP.
//!
//! # Architecture: Scan → Paginate → Write
//!
//! One synchronous pass, re-run wholesale on every relevant change:
//!
//! ```text
//! posts/*.md  →  scan (metadata per post)  →  paginate  →  pages/meta.json
//!                                                          pages/1.json
//!                                                          pages/2.json ...
//! ```
//!
//! The pass is cheap and idempotent — re-running on unchanged input produces
//! byte-identical artifacts — so there is no incremental mode and no partial
//! update. Any change to any post or to the config regenerates everything.
//! Correctness is trivial to reason about at the cost of O(corpus) work per
//! change, which is fine for corpora of tens to low hundreds of posts.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Lists `*.md` files newest-first and extracts metadata per post |
//! | [`generate`] | Partitions posts into pages and writes the JSON artifacts |
//! | [`metadata`] | Per-post extraction: title, excerpt, preview image, preview video |
//! | [`media`] | Inline media detection — image references and single-video URLs |
//! | [`naming`] | `NNN-slug-words.md` filename convention → display titles |
//! | [`config`] | `config.toml` loading with silent fallback to stock defaults |
//! | [`types`] | Records serialized into `meta.json` and the page files |
//! | [`output`] | CLI output formatting — post inventory and run summaries |
//!
//! # Design Decisions
//!
//! ## Filename Order Is Publication Order
//!
//! Posts are sorted by raw filename, descending. The corpus convention is a
//! zero-padded numeric prefix (`001-first-post.md`, `013-new-post.md`), so
//! reverse lexicographic order equals newest-first chronological order. No
//! front-matter, no dates, no database — the filename is the sort key, and
//! any client that re-sorts must use the identical rule.
//!
//! ## Optional Metadata Is Absent, Not Null
//!
//! A post may have no excerpt, no preview image, no preview video. Those
//! fields are plain `Option`s serialized with `skip_serializing_if`, so they
//! are physically missing from the JSON when underived. Clients test for
//! presence, never for null or empty-string sentinels.
//!
//! ## Excerpt and Video Preview Are Mutually Exclusive
//!
//! When a post's first body paragraph is itself a recognized video URL, the
//! video replaces the text preview and no excerpt is emitted. Preview-image
//! detection is independent — it scans the whole document and may co-occur
//! with either.
//!
//! ## Configuration Never Fails
//!
//! `config.toml` is optional, and malformed values fall back to stock
//! defaults silently. A blog build should not be stopped by a typo in a file
//! that only tunes page size and excerpt length.

pub mod config;
pub mod generate;
pub mod media;
pub mod metadata;
pub mod naming;
pub mod output;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
