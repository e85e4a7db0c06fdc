//! Merge flow
//!
//! Walk the search root, read every match, then write the merged array.
//! All fragments are read before the output is opened, so a read failure
//! leaves any existing output untouched.

use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::backends::walk::Walker;
use crate::core::file_reader::read_fragment;
use crate::core::model::{FragmentSet, MergeReport};
use crate::core::pattern::SearchPattern;
use crate::core::writer::write_merged_file;

/// Options for one merge run
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Root directory to search
    pub dir: PathBuf,

    /// Recursive glob pattern selecting fragment files
    pub pattern: SearchPattern,

    /// Destination of the merged array
    pub output: PathBuf,

    /// Suppress status messages
    pub quiet: bool,

    /// Report fragment and byte counts on completion
    pub verbose: bool,
}

/// Collect every fragment under `root` matching `pattern`, skipping `output`
pub fn collect_fragments(
    root: &Path,
    pattern: &SearchPattern,
    output: &Path,
) -> crate::core::error::Result<FragmentSet> {
    let walker = Walker::new(root, pattern.clone())?.excluding(output);
    debug!(root = %walker.root().display(), pattern = pattern.as_str(), "walking");

    let mut fragments = FragmentSet::new();
    for path in walker.walk() {
        fragments.push(read_fragment(&path?)?);
    }

    Ok(fragments)
}

/// Collect and write, without any user-facing output
pub fn merge(options: &MergeOptions) -> crate::core::error::Result<MergeReport> {
    let pattern = &options.pattern;
    let fragments = collect_fragments(&options.dir, pattern, &options.output)?;
    if fragments.is_empty() {
        warn!(pattern = pattern.as_str(), "no files matched, writing an empty array");
    }
    let bytes_written = write_merged_file(&options.output, &fragments)?;

    let report = MergeReport {
        output: options.output.clone(),
        fragments: fragments.len(),
        content_bytes: fragments.content_len(),
        bytes_written,
    };

    info!(
        fragments = report.fragments,
        content_bytes = report.content_bytes,
        bytes = report.bytes_written,
        output = %report.output.display(),
        "merge complete"
    );
    Ok(report)
}

/// Run the merge command
pub fn run_merge(options: MergeOptions) -> Result<()> {
    if !options.quiet {
        println!("{}", "Merging compile_commands.json...".cyan());
    }

    let report = merge(&options)?;

    if !options.quiet {
        if options.verbose {
            println!(
                "{} ({} fragments, {} bytes -> {})",
                "Successfully merged".green(),
                report.fragments,
                report.bytes_written,
                report.output.display()
            );
        } else {
            println!("{}", "Successfully merged".green());
        }
    }

    Ok(())
}
