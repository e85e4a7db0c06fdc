//! CLI module - Command-line interface definition and handler

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::pattern::SearchPattern;
use crate::flows::merge::{run_merge, MergeOptions};

/// ccmerge - merge compile_commands.json fragments into one JSON array.
#[derive(Parser, Debug)]
#[command(name = "ccmerge")]
#[command(
    author,
    version,
    about,
    long_about = r#"ccmerge recursively searches a directory for files matching a glob pattern
and writes their contents, concatenated verbatim between '[' and ']', to a
single output file.

No separators are inserted: each fragment must carry its own trailing comma
for the result to look like a JSON array. Fragments are not validated.

If the output file already exists inside the searched tree and matches the
pattern, it is skipped so a previous merge is never merged into itself.

Examples:
    ccmerge -d build -p compile_commands.json -o compile_commands.json
    ccmerge --dir out --pattern "*.cc.json" --output out/merged.json
"#
)]
pub struct Cli {
    /// Root directory to search.
    #[arg(short, long, value_name = "DIR")]
    pub dir: PathBuf,

    /// File pattern to search for recursively.
    #[arg(
        short,
        long,
        value_name = "PATTERN",
        long_help = "Glob pattern matched against paths relative to DIR, at any depth.\n\n\
'*' does not cross directory separators; use '**' for that.\n\n\
Example: --pattern compile_commands.json"
    )]
    pub pattern: SearchPattern,

    /// File path to write the merged contents to.
    #[arg(
        short,
        long,
        value_name = "FILE",
        long_help = "File path to write the merged contents to. An existing file is\n\
overwritten; its parent directory must exist."
    )]
    pub output: PathBuf,

    /// Quiet mode (no status messages).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        long_help = "Enable debug diagnostics on stderr and report fragment and byte counts\n\
when the merge completes. RUST_LOG overrides the diagnostic level."
    )]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn merge_options(&self) -> MergeOptions {
        MergeOptions {
            dir: self.dir.clone(),
            pattern: self.pattern.clone(),
            output: self.output.clone(),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    run_merge(cli.merge_options())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from([
            "ccmerge",
            "-d",
            "build",
            "-p",
            "compile_commands.json",
            "-o",
            "out.json",
        ])
        .unwrap();
        assert_eq!(cli.dir, PathBuf::from("build"));
        assert_eq!(cli.pattern.as_str(), "compile_commands.json");
        assert_eq!(cli.output, PathBuf::from("out.json"));
        assert!(!cli.quiet);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_long_flags_to_options() {
        let cli = Cli::try_parse_from([
            "ccmerge",
            "--dir",
            "cc",
            "--pattern",
            "*.json",
            "--output",
            "cc/merged.json",
            "--verbose",
        ])
        .unwrap();
        let options = cli.merge_options();
        assert_eq!(options.dir, PathBuf::from("cc"));
        assert_eq!(options.pattern.as_str(), "*.json");
        assert_eq!(options.output, PathBuf::from("cc/merged.json"));
        assert!(options.verbose);
    }

    #[test]
    fn test_missing_required_flag() {
        let err = Cli::try_parse_from(["ccmerge", "-d", "build", "-p", "x.json"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_pattern_validated_while_parsing() {
        let err = Cli::try_parse_from(["ccmerge", "-d", "b", "-p", "", "-o", "o"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains("pattern is empty"));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let err = Cli::try_parse_from([
            "ccmerge", "-d", "b", "-p", "x", "-o", "o", "--quiet", "--verbose",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}
