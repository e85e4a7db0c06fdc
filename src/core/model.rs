//! Fragment model
//!
//! A merge run reads every matched file into a `Fragment` and collects them,
//! in discovery order, into a `FragmentSet` that the writer consumes.

use std::path::{Path, PathBuf};

/// One matched file and its raw text content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    path: PathBuf,
    content: String,
}

impl Fragment {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Content length in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }
}

/// Ordered, append-only collection of fragments.
///
/// Duplicates (same path or same content) are kept as-is.
#[derive(Debug, Clone, Default)]
pub struct FragmentSet {
    fragments: Vec<Fragment>,
}

impl FragmentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fragment> {
        self.fragments.iter()
    }

    /// Sum of the content lengths of all fragments, in bytes
    pub fn content_len(&self) -> usize {
        self.fragments.iter().map(Fragment::len).sum()
    }
}

impl<'a> IntoIterator for &'a FragmentSet {
    type Item = &'a Fragment;
    type IntoIter = std::slice::Iter<'a, Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Fragment> for FragmentSet {
    fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
        Self {
            fragments: iter.into_iter().collect(),
        }
    }
}

/// Summary of a completed merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    /// Where the merged array was written
    pub output: PathBuf,

    /// Number of fragments merged
    pub fragments: usize,

    /// Bytes of fragment content
    pub content_bytes: usize,

    /// Bytes written to the output, brackets included
    pub bytes_written: usize,
}
