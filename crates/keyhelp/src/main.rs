//! keyhelp - key help listings from preprocessed driver source
//!
//! Reads the whole input, extracts every `<HLP>` record and writes one
//! `location:keys: description` line per record.

use anyhow::Result;
use clap::Parser;
use keyhelp::{app, cli::Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    app::run(cli)
}
