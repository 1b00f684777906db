//! KeyNotationNormalizer: whole-text help extraction.
//!
//! Wraps the scanner and the notation pipeline. Iteration is lazy and can be
//! restarted any number of times over the same text.

use crate::entry::HelpEntry;
use crate::parsers::{count_open_tags, scan_records, Records};
use tracing::{debug, warn};

/// Counts gathered over one input text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// `<HLP>` opening tags seen
    pub open_tags: usize,
    /// Records that matched the record shape
    pub records: usize,
}

impl ScanStats {
    /// Opening tags that did not produce a record.
    pub fn skipped(&self) -> usize {
        self.open_tags.saturating_sub(self.records)
    }
}

/// Normalizer over one complete input text.
#[derive(Debug, Clone, Copy)]
pub struct KeyNotationNormalizer<'t> {
    text: &'t str,
}

impl<'t> KeyNotationNormalizer<'t> {
    pub fn new(text: &'t str) -> Self {
        Self { text }
    }

    /// Normalized entries in input order.
    pub fn entries(&self) -> Entries<'t> {
        Entries {
            records: scan_records(self.text),
        }
    }

    /// Output lines (without trailing newline) in input order.
    pub fn lines(&self) -> impl Iterator<Item = String> + 't {
        self.entries().map(|entry| entry.to_string())
    }

    /// Scan once more to count matched records against opening tags.
    pub fn stats(&self) -> ScanStats {
        let stats = ScanStats {
            open_tags: count_open_tags(self.text),
            records: scan_records(self.text).count(),
        };
        if stats.skipped() > 0 {
            warn!(
                target: "keyhelp",
                "{} <HLP> span(s) did not match the record shape and were skipped",
                stats.skipped()
            );
        } else {
            debug!(target: "keyhelp", "{} record(s) found", stats.records);
        }
        stats
    }
}

/// Iterator returned by [`KeyNotationNormalizer::entries`].
pub struct Entries<'t> {
    records: Records<'t>,
}

impl Iterator for Entries<'_> {
    type Item = HelpEntry;

    fn next(&mut self) -> Option<Self::Item> {
        self.records.next().map(HelpEntry::from)
    }
}

/// Convenience: all output lines of `text`.
pub fn normalize_text(text: &str) -> Vec<String> {
    KeyNotationNormalizer::new(text).lines().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VOYAGER_SAMPLE: &str = r#"
static int brl_readCommand (...) {
  switch (keys) {
   <HLP> 101: "K_A" / "K_D" : "Move backward/forward" </HLP>
   <HLP> 101: "K_A|K_B" / "K_A|K_C" : "Goto top-left / bottom-left" </HLP>
   <HLP> 601: : "B+C: Space (spacebar)" </HLP>
   <HLP> 601: "Chord-" "DOT1|DOT2" : "Backspace" </HLP>
   <HLP> 205: "CRa#+" "K_UP" : "Switch to virtual console #" </HLP>
   <HLP> 205: "CRa1+CRa2+" "K_RL" / "K_RR" : "Switch to previous/next " "virtual console" </HLP>
  }
}
"#;

    #[test]
    fn test_voyager_sample() {
        let lines = normalize_text(VOYAGER_SAMPLE);
        assert_eq!(
            lines,
            vec![
                "101:A/D: Move backward/forward",
                "101:A+B/C: Goto top-left / bottom-left",
                "601:B+C: Space (spacebar)",
                "601:Chord-12: Backspace",
                "205:CRa#+UP: Switch to virtual console #",
                "205:CRa1+CRa2+RL/RR: Switch to previous/next virtual console",
            ]
        );
    }

    #[test]
    fn test_line_count_matches_records() {
        let normalizer = KeyNotationNormalizer::new(VOYAGER_SAMPLE);
        let stats = normalizer.stats();
        assert_eq!(stats.records, 6);
        assert_eq!(stats.skipped(), 0);
        assert_eq!(normalizer.lines().count(), stats.records);
    }

    #[test]
    fn test_restartable() {
        let normalizer = KeyNotationNormalizer::new(VOYAGER_SAMPLE);
        let first: Vec<_> = normalizer.lines().collect();
        let second: Vec<_> = normalizer.lines().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_stats_reports_skipped() {
        let text = r#"<HLP> 1: : "ok" </HLP> <HLP> broken </HLP> <HLP> 2: "K_A" "#;
        let stats = KeyNotationNormalizer::new(text).stats();
        assert_eq!(stats.open_tags, 3);
        assert_eq!(stats.records, 1);
        assert_eq!(stats.skipped(), 2);
    }

    #[test]
    fn test_no_records() {
        assert!(normalize_text("plain C source, no markup").is_empty());
    }
}
