//! Blog configuration loading.
//!
//! A single optional `config.toml` tunes the two knobs the generator has:
//!
//! ```toml
//! # All options are optional - defaults shown below
//! posts_per_page = 10    # Posts per generated page file
//! excerpt_length = 100   # Excerpt character limit
//! ```
//!
//! Configuration is deliberately never an error source. A missing file, an
//! unreadable file, or malformed TOML all yield stock defaults; a value of
//! `0` falls back to its default at point of use. The build/watch trigger
//! re-runs the whole pass on config changes anyway, so a bad edit costs one
//! run with defaults, not a broken build.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Stock page size when unset or zero.
pub const DEFAULT_POSTS_PER_PAGE: u32 = 10;
/// Stock excerpt character limit when unset or zero.
pub const DEFAULT_EXCERPT_LENGTH: u32 = 100;

/// Generator configuration from `config.toml`.
///
/// Unknown keys are tolerated: the file may be shared with other tools,
/// and rejecting typos would violate the never-fails contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Posts per generated page file. `0` means "use the default".
    pub posts_per_page: u32,
    /// Excerpt character limit. `0` means "use the default".
    pub excerpt_length: u32,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            posts_per_page: DEFAULT_POSTS_PER_PAGE,
            excerpt_length: DEFAULT_EXCERPT_LENGTH,
        }
    }
}

impl BlogConfig {
    /// Page size with the zero-fallback applied.
    pub fn effective_posts_per_page(&self) -> u32 {
        if self.posts_per_page == 0 {
            DEFAULT_POSTS_PER_PAGE
        } else {
            self.posts_per_page
        }
    }

    /// Excerpt limit with the zero-fallback applied.
    pub fn effective_excerpt_length(&self) -> usize {
        if self.excerpt_length == 0 {
            DEFAULT_EXCERPT_LENGTH as usize
        } else {
            self.excerpt_length as usize
        }
    }
}

/// Load configuration from `path`, falling back to stock defaults on any
/// failure (missing file, IO error, parse error). Never fails.
pub fn load_config(path: &Path) -> BlogConfig {
    fs::read_to_string(path)
        .ok()
        .and_then(|content| toml::from_str(&content).ok())
        .unwrap_or_default()
}
