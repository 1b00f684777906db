//! Normalized help entries.

use crate::parsers::{normalize_description, normalize_keys, HelpRecord};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// One line of the help listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpEntry {
    /// Location / ordering hint, copied verbatim
    pub location: String,
    /// Normalized key notation (empty when the record had none)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub keys: String,
    /// Description with seams collapsed
    pub description: String,
}

impl HelpEntry {
    /// Normalize a scanned record.
    pub fn from_record(record: &HelpRecord<'_>) -> Self {
        let keys = match record.keys {
            Some(raw) if !raw.is_empty() => normalize_keys(raw),
            _ => String::new(),
        };
        Self {
            location: record.location.to_string(),
            keys,
            description: normalize_description(record.description),
        }
    }

    pub fn has_keys(&self) -> bool {
        !self.keys.is_empty()
    }

    /// Location as a number, if it is one.
    pub fn location_number(&self) -> Option<u64> {
        self.location.parse().ok()
    }
}

impl From<HelpRecord<'_>> for HelpEntry {
    fn from(record: HelpRecord<'_>) -> Self {
        Self::from_record(&record)
    }
}

impl fmt::Display for HelpEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_keys() {
            write!(f, "{}:{}: {}", self.location, self.keys, self.description)
        } else {
            write!(f, "{}:{}", self.location, self.description)
        }
    }
}

/// Compare two locations: numbers first (numerically), then text.
pub fn compare_locations(a: &HelpEntry, b: &HelpEntry) -> Ordering {
    match (a.location_number(), b.location_number()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.location.cmp(&b.location),
    }
}

/// Stable sort by location hint; equal hints keep input order.
pub fn sort_by_location(entries: &mut [HelpEntry]) {
    entries.sort_by(compare_locations);
}
