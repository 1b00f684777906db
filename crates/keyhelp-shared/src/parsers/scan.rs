//! Extraction of `<HLP>` records from preprocessed driver source.
//!
//! A record looks like:
//! ```text
//! <HLP> 101: "K_A|K_B" / "K_A|K_C" : "Goto top-left / bottom-left" </HLP>
//! <HLP> 601: : "B+C: Space (spacebar)" </HLP>
//! ```
//! Each `<HLP> ... </HLP>` span is cut out first and the record shape is then
//! matched against the span body alone, so a malformed span can never reach
//! into the record after it. Spans without this shape are skipped.

use regex::{CaptureMatches, Regex};
use std::sync::LazyLock;

/// Opening tag of a help record.
pub const OPEN_TAG: &str = "<HLP>";

static SPAN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<HLP>(.*?)</HLP>").unwrap());

static BODY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)\A\s*([A-Za-z0-9_]+)\s*:\s*(?:"(.*?)")?\s*:\s*"(.*?)"\s*\z"#).unwrap()
});

/// One help record as found in the input, before any normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpRecord<'t> {
    /// Ordering hint / location identifier
    pub location: &'t str,
    /// Raw key notation, `None` when the keys group is absent
    pub keys: Option<&'t str>,
    /// Raw description, seams included
    pub description: &'t str,
}

impl<'t> HelpRecord<'t> {
    /// Match the text between `<HLP>` and `</HLP>`.
    pub fn parse_body(body: &'t str) -> Option<Self> {
        let caps = BODY_RE.captures(body)?;
        Some(HelpRecord {
            location: caps.get(1)?.as_str(),
            keys: caps.get(2).map(|m| m.as_str()),
            description: caps.get(3)?.as_str(),
        })
    }
}

/// Iterator over the records of one input text, in input order.
///
/// Created by [`scan_records`]. Scanning again restarts from the beginning.
pub struct Records<'t> {
    spans: CaptureMatches<'static, 't>,
}

impl<'t> Iterator for Records<'t> {
    type Item = HelpRecord<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        for caps in self.spans.by_ref() {
            let mut body = caps.get(1).map_or("", |m| m.as_str());
            // An unclosed tag earlier in the span belongs to no record.
            if let Some(pos) = body.rfind(OPEN_TAG) {
                body = &body[pos + OPEN_TAG.len()..];
            }
            if let Some(record) = HelpRecord::parse_body(body) {
                return Some(record);
            }
        }
        None
    }
}

/// Scan `text` for help records.
pub fn scan_records(text: &str) -> Records<'_> {
    Records {
        spans: SPAN_RE.captures_iter(text),
    }
}

/// Number of `<HLP>` opening tags in `text`, matched or not.
pub fn count_open_tags(text: &str) -> usize {
    text.matches(OPEN_TAG).count()
}
