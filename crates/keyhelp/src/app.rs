//! Command execution: read input, build the listing, write it out.

use crate::cli::Cli;
use anyhow::{Context, Result};
use keyhelp_shared::{
    sort_by_location, write_entries, Config, HelpEntry, KeyNotationNormalizer, OutputFormat,
};
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// Effective settings after merging config and command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub sort: bool,
    pub log_level: String,
}

impl Settings {
    /// Command line flags override config values.
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self> {
        let format = match &cli.format {
            Some(name) => name.parse::<OutputFormat>()?,
            None => config.output.format,
        };
        Ok(Self {
            format,
            sort: cli.sort || config.output.sort,
            log_level: crate::logging::effective_level(&config.log.level, cli.verbose),
        })
    }
}

/// Read all input named on the command line, stdin for none or "-".
pub fn read_input(cli: &Cli) -> Result<String> {
    if cli.reads_stdin() {
        return read_stdin();
    }

    let mut text = String::new();
    for path in &cli.files {
        if path.as_os_str() == "-" {
            text.push_str(&read_stdin()?);
        } else {
            let content = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            debug!(target: "keyhelp", "read {} bytes from {}", content.len(), path.display());
            text.push_str(&content);
        }
    }
    Ok(text)
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("reading standard input")?;
    debug!(target: "keyhelp", "read {} bytes from stdin", text.len());
    Ok(text)
}

/// Build the listing for `text` and write it to `out`. Returns the entry count.
pub fn generate<W: Write>(text: &str, settings: &Settings, out: &mut W) -> Result<usize> {
    let normalizer = KeyNotationNormalizer::new(text);
    let stats = normalizer.stats();

    let count = if settings.sort {
        let mut entries: Vec<HelpEntry> = normalizer.entries().collect();
        sort_by_location(&mut entries);
        write_entries(entries, settings.format, out)?
    } else {
        write_entries(normalizer.entries(), settings.format, out)?
    };
    info!(
        target: "keyhelp",
        "{} of {} <HLP> span(s) listed, {} skipped",
        count,
        stats.open_tags,
        stats.skipped()
    );
    Ok(count)
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

/// Entry point used by `main`: load config, set up logging, run.
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let settings = Settings::resolve(&cli, &config)?;
    crate::logging::init(&settings.log_level);
    debug!(target: "keyhelp", ?settings, "starting");

    let text = read_input(&cli)?;
    let mut out = open_output(cli.output.as_deref())?;
    let count = generate(&text, &settings, &mut out)?;
    info!(target: "keyhelp", "wrote {} entries as {}", count, settings.format);
    Ok(())
}
