//! Parsers for preprocessed driver help markup.
//!
//! - `scan`: finds `<HLP> WHERE : "KEYS" : "DESCRIPTION" </HLP>` records
//! - `notation`: rewrites raw key-code expressions into listing notation
//!
//! Nothing here fails: spans that do not parse are skipped.

pub mod notation;
pub mod scan;

pub use notation::{
    collapse_blank_quotes, factor_pair, fuse_dot_chords, normalize_description,
    normalize_keys, pipes_to_plus, strip_key_prefixes, tighten_alternatives,
};
pub use scan::{count_open_tags, scan_records, HelpRecord, Records, OPEN_TAG};
