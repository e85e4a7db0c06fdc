//! Merged output writer
//!
//! Writes `[`, every fragment verbatim, then `]`. No separators are added
//! and the output file is replaced in place (no temp file, no rename).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

use crate::core::error::{MergeError, Result};
use crate::core::model::FragmentSet;

const OPEN: &[u8] = b"[";
const CLOSE: &[u8] = b"]";

/// Write the merged array to any writer, returning the number of bytes written
pub fn write_merged<W: Write>(out: &mut W, fragments: &FragmentSet) -> std::io::Result<usize> {
    out.write_all(OPEN)?;
    for fragment in fragments {
        out.write_all(fragment.content().as_bytes())?;
    }
    out.write_all(CLOSE)?;
    out.flush()?;

    Ok(OPEN.len() + fragments.content_len() + CLOSE.len())
}

/// Create or truncate `output` and write the merged array into it
pub fn write_merged_file(output: &Path, fragments: &FragmentSet) -> Result<usize> {
    let to_write_error = |source| MergeError::Write {
        path: output.to_path_buf(),
        source,
    };

    let file = File::create(output).map_err(to_write_error)?;
    let mut writer = BufWriter::new(file);
    let written = write_merged(&mut writer, fragments).map_err(to_write_error)?;

    debug!(path = %output.display(), bytes = written, "wrote merged output");
    Ok(written)
}
