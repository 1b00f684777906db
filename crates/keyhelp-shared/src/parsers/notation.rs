//! Key notation normalization.
//!
//! Turns a stringified key-code expression into the compact form used in
//! help listings:
//!
//! ```text
//! K_A|K_D                         A+D
//! Chord-" "DOT1|DOT2              Chord-12
//! K_RL|K_B" / "K_RL|K_C           RL+B/C
//! CRa1+CRa2+" "K_RL" / "K_RR      CRa1+CRa2+RL/RR
//! ```
//!
//! The steps run in a fixed order; see [`normalize_keys`].

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static KEY_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"K_|DOT").unwrap());

static BLANK_QUOTES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""\s*""#).unwrap());

static ALTERNATIVE_SEP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""?\s*/\s*"?"#).unwrap());

/// Remove every pipe that is directly followed by the text `DOT`.
///
/// Purely textual: `DOT1|DOT2|K_A` becomes `DOT1DOT2|K_A`.
pub fn fuse_dot_chords(keys: &str) -> Cow<'_, str> {
    if keys.contains("|DOT") {
        Cow::Owned(keys.replace("|DOT", "DOT"))
    } else {
        Cow::Borrowed(keys)
    }
}

/// Remove every `K_` and `DOT` occurrence.
pub fn strip_key_prefixes(keys: &str) -> Cow<'_, str> {
    KEY_PREFIX_RE.replace_all(keys, "")
}

/// Remaining pipes denote simultaneous keys.
pub fn pipes_to_plus(keys: &str) -> Cow<'_, str> {
    if keys.contains('|') {
        Cow::Owned(keys.replace('|', "+"))
    } else {
        Cow::Borrowed(keys)
    }
}

/// Remove the `" "` seams left between adjacent string literals.
///
/// Idempotent: a second pass never finds anything to remove.
pub fn collapse_blank_quotes(text: &str) -> Cow<'_, str> {
    BLANK_QUOTES_RE.replace_all(text, "")
}

/// Turn `A" / "B` or `A / B` into `A/B`.
pub fn tighten_alternatives(keys: &str) -> Cow<'_, str> {
    ALTERNATIVE_SEP_RE.replace_all(keys, "/")
}

/// Factor a shared chord out of a pair of alternatives.
///
/// `[PREFIX ]COMMON+FIRST/COMMON+SECOND` becomes `[PREFIX ]COMMON+FIRST/SECOND`.
/// Returns `None` when the keys do not have that shape.
pub fn factor_pair(keys: &str) -> Option<String> {
    let (left, right) = keys.split_once('/')?;
    if right.contains('/') {
        return None;
    }

    let (prefix, chord) = match left.rsplit_once(' ') {
        Some((prefix, chord)) => (Some(prefix), chord),
        None => (None, left),
    };

    let split = chord.rfind('+')?;
    let (common, first) = chord.split_at(split + 1);
    let second = right.strip_prefix(common)?;

    if common.len() < 2 || !is_key_name(first) || !is_key_name(second) {
        return None;
    }

    let factored = format!("{}{}/{}", common, first, second);
    Some(match prefix {
        Some(prefix) => format!("{} {}", prefix, factored),
        None => factored,
    })
}

fn is_key_name(s: &str) -> bool {
    !s.is_empty() && !s.contains(|c: char| c == '+' || c == '/' || c.is_whitespace())
}

/// Run the whole pipeline on a raw key notation.
///
/// 1. fuse dot chords
/// 2. strip `K_` / `DOT`
/// 3. pipes become `+`
/// 4. collapse seams, tighten the `/` separator
/// 5. factor a shared chord out of a pair
pub fn normalize_keys(raw: &str) -> String {
    let keys = fuse_dot_chords(raw);
    let keys = strip_key_prefixes(&keys);
    let keys = pipes_to_plus(&keys);
    let keys = collapse_blank_quotes(&keys);
    let keys = tighten_alternatives(&keys);

    factor_pair(&keys).unwrap_or_else(|| keys.into_owned())
}

/// Collapse seams in a description.
pub fn normalize_description(raw: &str) -> String {
    collapse_blank_quotes(raw).into_owned()
}
