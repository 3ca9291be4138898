//! Anchored format validators: the whole input must match.

use regex::Regex;
use std::sync::LazyLock;

use super::{CheckPattern, MatchMode};

macro_rules! format_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($regex_str).expect("fixed pattern constant"));
    };
}

// ── Web address ────────────────────────────────────────────────────────────
// A leading letter, the name body, then a dot and the top-level-domain
// region. The TLD region admits digits and further dots on purpose; that is
// the documented behavior, not an oversight. Digit classes throughout this
// crate are written [0-9] because the regex crate's \d is Unicode-aware.
format_pattern!(
    RE_WEB_ADDRESS,
    r"^[a-zA-Z][a-zA-Z0-9_.+\-]+\.[a-zA-Z0-9.\-]+$"
);

// ── 12-hour clock time ─────────────────────────────────────────────────────
// Hour 1-9 as one digit (no leading zero) or 10-12, minutes 00-59, an
// optional single space, and a meridiem indicator in any letter case.
format_pattern!(RE_CLOCK_TIME, r"^(?:1[0-2]|[1-9]):[0-5][0-9] ?(?i:[ap]m)$");

/// True iff `text` is, in its entirety, a top-level web address such as
/// `gmail.com` or `My_Favorite-Blog.US`.
///
/// Trailing characters reject: `web-address.com/homepage` is not an address.
pub fn is_web_address(text: &str) -> bool {
    RE_WEB_ADDRESS.is_match(text)
}

/// True iff `text` is, in its entirety, a 12-hour clock time such as
/// `12:45pm` or `9:59 AM`.
///
/// Hours outside 1-12, minutes outside 00-59, and zero-padded single-digit
/// hours (`09:00am`) all reject.
pub fn is_clock_time(text: &str) -> bool {
    RE_CLOCK_TIME.is_match(text)
}

/// The anchored format validators in registry form.
pub fn all_patterns() -> Vec<CheckPattern> {
    vec![
        CheckPattern {
            name: "web_address",
            mode: MatchMode::Anchored,
            regex: &RE_WEB_ADDRESS,
        },
        CheckPattern {
            name: "clock_time",
            mode: MatchMode::Anchored,
            regex: &RE_CLOCK_TIME,
        },
    ]
}
