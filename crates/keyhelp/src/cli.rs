//! CLI - Command-line argument parsing
//!
//! Defines the CLI structure using clap.
//! Keeps argument parsing separate from execution logic.

use clap::Parser;
use std::path::PathBuf;

/// Build a key help listing from preprocessed driver source
#[derive(Parser, Debug)]
#[command(name = "keyhelp")]
#[command(about = "Turn <HLP> markup from preprocessed driver source into a key help listing", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Input files, read in order ("-" or nothing reads stdin)
    pub files: Vec<PathBuf>,

    /// Write the listing here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format: text, json or jsonl
    #[arg(short, long)]
    pub format: Option<String>,

    /// Order entries by their location hint
    #[arg(long)]
    pub sort: bool,

    /// Configuration file (overrides $KEYHELP_CONFIG and defaults)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// True when input comes from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.files.is_empty() || self.files.iter().all(|f| f.as_os_str() == "-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["keyhelp"]);
        assert!(cli.files.is_empty());
        assert!(cli.reads_stdin());
        assert!(!cli.sort);
        assert_eq!(cli.verbose, 0);
        assert!(cli.format.is_none());
    }

    #[test]
    fn test_full_arguments() {
        let cli = Cli::parse_from([
            "keyhelp", "-o", "out.txt", "--format", "json", "--sort", "-vv", "a.i", "b.i",
        ]);
        assert_eq!(cli.files, vec![PathBuf::from("a.i"), PathBuf::from("b.i")]);
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
        assert_eq!(cli.format.as_deref(), Some("json"));
        assert!(cli.sort);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.reads_stdin());
    }

    #[test]
    fn test_dash_is_stdin() {
        let cli = Cli::parse_from(["keyhelp", "-"]);
        assert!(cli.reads_stdin());
    }
}
