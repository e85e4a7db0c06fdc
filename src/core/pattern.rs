//! Recursive search patterns
//!
//! A pattern such as `compile_commands.json` or `build/*.json` matches the
//! tail of a path relative to the search root, starting at any depth.

use globset::{GlobBuilder, GlobMatcher};
use std::path::{Component, Path};

use crate::core::error::{MergeError, Result};

/// A compiled recursive glob pattern
#[derive(Debug, Clone)]
pub struct SearchPattern {
    original: String,
    matcher: GlobMatcher,
}

impl SearchPattern {
    pub fn new(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Err(MergeError::invalid_pattern(pattern, "pattern is empty"));
        }
        if pattern.starts_with('/') || Path::new(pattern).is_absolute() {
            return Err(MergeError::invalid_pattern(
                pattern,
                "absolute patterns are not supported",
            ));
        }

        let normalized = normalize_pattern(pattern);
        if normalized.is_empty() {
            return Err(MergeError::invalid_pattern(
                pattern,
                "pattern has no name components",
            ));
        }

        let glob = GlobBuilder::new(&format!("**/{normalized}"))
            .literal_separator(true)
            .build()
            .map_err(|e| MergeError::invalid_pattern(pattern, e.kind().to_string()))?;

        Ok(Self {
            original: pattern.to_string(),
            matcher: glob.compile_matcher(),
        })
    }

    /// Match a path relative to the search root
    pub fn matches(&self, relative: &Path) -> bool {
        self.matcher.is_match(relative)
    }

    pub fn as_str(&self) -> &str {
        &self.original
    }
}

/// Drop `.` components, repeated and trailing separators
fn normalize_pattern(pattern: &str) -> String {
    Path::new(pattern)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

impl std::str::FromStr for SearchPattern {
    type Err = MergeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
