// crates/domain/src/counter.rs
//! Two-pass counter for script bodies.
//!
//! The first pass extracts narrative units: a `＠` speaker line followed by up to
//! three lines of dialogue closed by a `[k]` line, or a single-line `？…：…` choice.
//! The second pass strips markup from every unit and counts the remaining Unicode
//! scalar values.

use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;

use crate::model::Count;

const UNIT_PATTERN: &str = r"(＠([A-Z][：:])?(.*)\n)(.*?\n(?:.*?\n)?)?(.*?)\n\[k\]|(？.+?：.+)";

// Tags holding `#` (ruby) or `&` (gendered text) keep their inner text; only the
// bracket, hash, ampersand and colon characters themselves are dropped.
const STRIP_PATTERN: &str = r"(\[[^#&]+?\]|[\[\]#&:]|？.+?：|^＠.+|\n)";

fn unit_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(UNIT_PATTERN).unwrap())
}

fn strip_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(STRIP_PATTERN).unwrap())
}

/// Count narrative lines and characters in a script body.
///
/// Never fails: text that matches no unit pattern, including dialogue missing its
/// `[k]` terminator, is simply not counted.
#[must_use]
pub fn count(body: &str) -> Count {
    if body.is_empty() {
        return Count::ZERO;
    }

    let body = normalize_newlines(body);
    let strip = strip_regex();

    unit_regex()
        .find_iter(&body)
        .map(|unit| Count::new(1, strip.replace_all(unit.as_str(), "").chars().count()))
        .sum()
}

fn normalize_newlines(body: &str) -> Cow<'_, str> {
    if body.contains('\r') { Cow::Owned(body.replace("\r\n", "\n")) } else { Cow::Borrowed(body) }
}
