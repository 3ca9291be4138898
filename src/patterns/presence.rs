//! Search detectors: one occurrence anywhere in the input suffices.

use regex::Regex;
use std::sync::LazyLock;

use super::{CheckPattern, MatchMode};

macro_rules! presence_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($regex_str).expect("fixed pattern constant"));
    };
}

// ── Parenthesized acronym ──────────────────────────────────────────────────
// One ASCII letter or digit, then any further run of letters/digits, inside
// parentheses. "(IM)", "(4GL)" and "(Scuba)" qualify; "()" and "(!)" do not.
presence_pattern!(RE_ACRONYM, r"\([a-zA-Z0-9][a-zA-Z0-9]*\)");

// ── US zip code ────────────────────────────────────────────────────────────
// Either a space followed by exactly five digits, or a ZIP+4 run (five
// digits, hyphen, four digits). The five-digit form is space-gated while
// ZIP+4 needs no preceding delimiter; the asymmetry is kept verbatim for
// compatibility with the documented verdicts.
presence_pattern!(RE_ZIP_CODE, r"(?: [0-9]{5}|[0-9]{5}-[0-9]{4})");

/// True iff `text` contains a parenthesized alphanumeric token anywhere.
pub fn has_acronym(text: &str) -> bool {
    RE_ACRONYM.is_match(text)
}

/// True iff `text` contains a US zip code anywhere: a space-preceded
/// five-digit code, or a ZIP+4 code with or without a preceding delimiter.
pub fn has_zip_code(text: &str) -> bool {
    RE_ZIP_CODE.is_match(text)
}

/// The search detectors in registry form.
pub fn all_patterns() -> Vec<CheckPattern> {
    vec![
        CheckPattern {
            name: "acronym",
            mode: MatchMode::Search,
            regex: &RE_ACRONYM,
        },
        CheckPattern {
            name: "zip_code",
            mode: MatchMode::Search,
            regex: &RE_ZIP_CODE,
        },
    ]
}
