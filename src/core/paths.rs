//! Path utilities
//!
//! Path rendering for diagnostics and file identity checks used for
//! self-exclusion of the output file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Identity of a file on disk, independent of how its path is spelled.
///
/// Two paths with the same `FileId` refer to the same underlying file,
/// whether they differ by relative/absolute form, symlinks or hard links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileId {
    #[cfg(unix)]
    Inode { dev: u64, ino: u64 },
    #[cfg_attr(unix, allow(dead_code))]
    Canonical(PathBuf),
}

impl FileId {
    /// Resolve the identity of `path`, following symlinks
    pub fn of(path: &Path) -> io::Result<Self> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;
            let meta = fs::metadata(path)?;
            Ok(FileId::Inode {
                dev: meta.dev(),
                ino: meta.ino(),
            })
        }

        #[cfg(not(unix))]
        {
            Ok(FileId::Canonical(fs::canonicalize(path)?))
        }
    }

    /// Identity of `path` if it currently exists
    pub fn if_exists(path: &Path) -> Option<Self> {
        Self::of(path).ok()
    }
}
