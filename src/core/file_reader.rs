//! Fragment reading
//!
//! Every matched file is read in full as UTF-8 text. There is no size limit,
//! lossy decoding or skipping: any failure aborts the merge.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

use crate::core::error::{MergeError, Result};
use crate::core::model::Fragment;

/// Read one matched file into a `Fragment`, content kept verbatim
pub fn read_fragment(path: &Path) -> Result<Fragment> {
    let content = read_text(path).map_err(|source| MergeError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let fragment = Fragment::new(path, content);
    debug!(path = %fragment.path().display(), bytes = fragment.len(), "read fragment");
    Ok(fragment)
}

fn read_text(path: &Path) -> std::io::Result<String> {
    let file = File::open(path)?;
    let capacity = file
        .metadata()
        .map(|m| usize::try_from(m.len()).unwrap_or(0))
        .unwrap_or(0);

    let mut reader = BufReader::new(file);
    let mut content = String::with_capacity(capacity);
    reader.read_to_string(&mut content)?;

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_read_fragment_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("compile_commands.json");
        let content = "{\"file\": \"a.c\"},\r\n  \n";
        fs::write(&path, content).unwrap();

        let fragment = read_fragment(&path).unwrap();
        assert_eq!(fragment.content(), content);
        assert_eq!(fragment.path(), path.as_path());
    }

    #[test]
    fn test_read_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.json");
        fs::write(&path, "").unwrap();

        let fragment = read_fragment(&path).unwrap();
        assert!(fragment.content().is_empty());
        assert_eq!(fragment.len(), 0);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.json");

        let err = read_fragment(&path).unwrap_err();
        assert!(matches!(err, MergeError::Read { .. }));
    }

    #[test]
    fn test_read_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("compile_commands.json");
        fs::create_dir(&path).unwrap();

        let err = read_fragment(&path).unwrap_err();
        assert!(matches!(err, MergeError::Read { .. }));
    }

    #[test]
    fn test_read_invalid_utf8_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("invalid.json");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(&[0xFF, 0xFE, 0x7B, 0x7D]).unwrap();

        let err = read_fragment(&path).unwrap_err();
        match err {
            MergeError::Read { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::InvalidData)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
