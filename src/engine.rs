//! Whole-input evaluation: run every registered check against one string.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::patterns::format::{is_clock_time, is_web_address};
use crate::patterns::presence::{has_acronym, has_zip_code};

/// Boolean verdicts of all four checks for one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdicts {
    pub web_address: bool,
    pub clock_time: bool,
    pub acronym: bool,
    pub zip_code: bool,
}

impl Verdicts {
    /// Whether any check matched.
    pub fn any(&self) -> bool {
        self.web_address || self.clock_time || self.acronym || self.zip_code
    }
}

/// Run every check against `text` once and report the verdicts.
pub fn evaluate(text: &str) -> Verdicts {
    let verdicts = Verdicts {
        web_address: is_web_address(text),
        clock_time: is_clock_time(text),
        acronym: has_acronym(text),
        zip_code: has_zip_code(text),
    };
    debug!(
        len = text.len(),
        web_address = verdicts.web_address,
        clock_time = verdicts.clock_time,
        acronym = verdicts.acronym,
        zip_code = verdicts.zip_code,
        "evaluated checks"
    );
    verdicts
}
