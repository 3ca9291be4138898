pub mod format;
pub mod presence;

use regex::Regex;
use std::sync::LazyLock;

/// How a pattern is applied to its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// The whole input must match, start to end.
    Anchored,
    /// One occurrence anywhere in the input suffices.
    Search,
}

/// A compiled check pattern with its registry metadata.
pub struct CheckPattern {
    pub name: &'static str,
    pub mode: MatchMode,
    pub regex: &'static LazyLock<Regex>,
}

impl CheckPattern {
    /// Apply the pattern to `text`.
    ///
    /// Anchored patterns carry `^…$` in their source, so `is_match` serves
    /// both modes; the mode is recorded so callers can tell full-string
    /// validators from presence detectors.
    pub fn applies(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// All check patterns across both categories.
pub fn all_patterns() -> Vec<CheckPattern> {
    let mut patterns = format::all_patterns();
    patterns.extend(presence::all_patterns());
    patterns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_lists_every_check_once() {
        let patterns = all_patterns();
        assert_eq!(patterns.len(), 4);

        let mut names: Vec<&str> = patterns.iter().map(|p| p.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 4, "pattern names must be unique");
    }

    #[test]
    fn registry_splits_anchored_and_search() {
        let patterns = all_patterns();
        let anchored = patterns
            .iter()
            .filter(|p| p.mode == MatchMode::Anchored)
            .count();
        let search = patterns
            .iter()
            .filter(|p| p.mode == MatchMode::Search)
            .count();
        assert_eq!(anchored, 2);
        assert_eq!(search, 2);
    }

    #[test]
    fn every_pattern_constant_compiles() {
        // Dereferencing forces each LazyLock; a bad pattern panics here
        // rather than at an arbitrary later call site.
        for pattern in all_patterns() {
            let _ = pattern.regex.as_str();
        }
    }

    #[test]
    fn applies_agrees_with_the_public_functions() {
        let samples = ["gmail.com", "12:45pm", "see (IM) here", "AZ 85258-0001"];
        for text in samples {
            for pattern in all_patterns() {
                let expected = match pattern.name {
                    "web_address" => format::is_web_address(text),
                    "clock_time" => format::is_clock_time(text),
                    "acronym" => presence::has_acronym(text),
                    "zip_code" => presence::has_zip_code(text),
                    other => panic!("unknown pattern '{other}'"),
                };
                assert_eq!(
                    pattern.applies(text),
                    expected,
                    "pattern '{}' disagrees on {:?}",
                    pattern.name,
                    text
                );
            }
        }
    }
}
