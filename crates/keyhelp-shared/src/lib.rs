//! Shared types and utilities for keyhelp.
//!
//! Extracts `<HLP>` help records from preprocessed braille driver source and
//! rewrites their key notation into a flat `location:keys: description`
//! listing.

pub mod config;
pub mod entry;
pub mod error;
pub mod normalizer;
pub mod parsers;
pub mod render;

pub use config::Config;
pub use entry::{compare_locations, sort_by_location, HelpEntry};
pub use error::{KeyHelpError, Result};
pub use normalizer::{normalize_text, Entries, KeyNotationNormalizer, ScanStats};
pub use parsers::{normalize_keys, scan_records, HelpRecord};
pub use render::{write_entries, OutputFormat};
