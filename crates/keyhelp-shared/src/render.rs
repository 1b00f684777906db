//! Output rendering for help entries.

use crate::entry::HelpEntry;
use crate::error::{KeyHelpError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// How entries are written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `location:keys: description`, one per line
    #[default]
    Text,
    /// Pretty JSON array
    Json,
    /// One JSON object per line
    Jsonl,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = KeyHelpError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(KeyHelpError::UnknownFormat(s.to_string())),
        }
    }
}

/// Write `entries` to `out` in the given format. Returns the entry count.
pub fn write_entries<I, W>(entries: I, format: OutputFormat, out: &mut W) -> Result<usize>
where
    I: IntoIterator<Item = HelpEntry>,
    W: Write,
{
    let mut count = 0;
    match format {
        OutputFormat::Text => {
            for entry in entries {
                writeln!(out, "{}", entry)?;
                count += 1;
            }
        }
        OutputFormat::Jsonl => {
            for entry in entries {
                serde_json::to_writer(&mut *out, &entry)?;
                out.write_all(b"\n")?;
                count += 1;
            }
        }
        OutputFormat::Json => {
            let all: Vec<HelpEntry> = entries.into_iter().collect();
            serde_json::to_writer_pretty(&mut *out, &all)?;
            out.write_all(b"\n")?;
            count = all.len();
        }
    }
    out.flush()?;
    Ok(count)
}
