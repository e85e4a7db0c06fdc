//! Fragment discovery
//!
//! Uses walkdir to enumerate every entry under the search root whose relative
//! path matches the search pattern. The merge output is skipped when it
//! already exists and is one of the matches.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::core::error::{MergeError, Result};
use crate::core::paths::{normalize_path, FileId};
use crate::core::pattern::SearchPattern;

/// Recursive walker over a search root
#[derive(Debug)]
pub struct Walker {
    root: PathBuf,
    pattern: SearchPattern,
    excluded: Option<FileId>,
}

impl Walker {
    /// Create a walker over `root`.
    ///
    /// Fails if `root` is missing, not a directory or cannot be inspected.
    pub fn new(root: impl Into<PathBuf>, pattern: SearchPattern) -> Result<Self> {
        let root = root.into();
        match fs::metadata(&root) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => return Err(MergeError::NotADirectory(root)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(MergeError::RootNotFound(root))
            }
            Err(source) => return Err(MergeError::Root { path: root, source }),
        }

        Ok(Self {
            root,
            pattern,
            excluded: None,
        })
    }

    /// Skip `output` during the walk if it exists right now.
    ///
    /// The identity is captured once, so a file created later at the same
    /// path is not excluded.
    pub fn excluding(mut self, output: &Path) -> Self {
        self.excluded = FileId::if_exists(output);
        if self.excluded.is_some() {
            debug!(path = %output.display(), "output exists, excluding it from the merge");
        }
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lazily yield matching paths in file-name order.
    ///
    /// Traversal errors are yielded as `MergeError::Walk`.
    pub fn walk(&self) -> impl Iterator<Item = Result<PathBuf>> + '_ {
        WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(entry) => self.accept(entry).map(Ok),
                Err(source) => Some(Err(MergeError::Walk {
                    path: source
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.root.clone()),
                    source,
                })),
            })
    }

    fn accept(&self, entry: DirEntry) -> Option<PathBuf> {
        let relative = entry.path().strip_prefix(&self.root).ok()?;
        if !self.pattern.matches(relative) {
            return None;
        }

        if self.is_excluded(entry.path()) {
            debug!(path = %entry.path().display(), "skipping merge output");
            return None;
        }

        trace!(path = %normalize_path(relative), "matched");
        Some(entry.into_path())
    }

    fn is_excluded(&self, path: &Path) -> bool {
        match &self.excluded {
            Some(excluded) => FileId::of(path).is_ok_and(|id| &id == excluded),
            None => false,
        }
    }
}
