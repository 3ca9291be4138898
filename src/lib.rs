//! # textcheck
//!
//! Four independent lexical text validators backed by compile-once regex
//! patterns: web-address syntax, 12-hour clock time, parenthesized acronym
//! presence, and US zip-code presence.
//!
//! Each validator is a pure function from `&str` to `bool`. The anchored
//! validators ([`is_web_address`], [`is_clock_time`]) accept only when the
//! entire input matches; the search detectors ([`has_acronym`],
//! [`has_zip_code`]) accept when one occurrence appears anywhere. Pattern
//! constants are compiled once on first use and never mutated, so the
//! functions are safe to call concurrently without coordination.

pub mod engine;
pub mod patterns;

// Re-export the most commonly used items at the crate root.
pub use engine::{evaluate, Verdicts};
pub use patterns::format::{is_clock_time, is_web_address};
pub use patterns::presence::{has_acronym, has_zip_code};
