/// Pattern definitions for the scanner
///
/// This module holds the Thai script pattern and small helpers around it.
/// The pattern matches maximal runs of code points in the Thai Unicode block
/// (U+0E00 to U+0E7F), scanning left to right without overlap.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

/// First code point of the Thai block
pub const THAI_BLOCK_START: char = '\u{0E00}';

/// Last code point of the Thai block
pub const THAI_BLOCK_END: char = '\u{0E7F}';

lazy_static! {
    /// One or more consecutive Thai code points
    pub static ref THAI_PATTERN: Regex = Regex::new(r"[\x{0E00}-\x{0E7F}]+")
        .expect("Thai pattern is a valid regex");
}

/// Deduplicated, sorted matches for one file
pub type MatchSet = BTreeSet<String>;

/// Check whether a character belongs to the Thai block
pub fn is_thai_char(c: char) -> bool {
    (THAI_BLOCK_START..=THAI_BLOCK_END).contains(&c)
}

/// Check whether the content has any Thai text at all
pub fn contains_thai(content: &str) -> bool {
    THAI_PATTERN.is_match(content)
}

/// Iterate over every run of Thai text in the content, in order
pub fn find_thai_runs(content: &str) -> impl Iterator<Item = &str> {
    THAI_PATTERN.find_iter(content).map(|m| m.as_str())
}

/// Collect the runs of Thai text in the content
///
/// # Returns
///
/// The total number of runs (duplicates included) and the set of distinct runs
pub fn collect_matches(content: &str) -> (usize, MatchSet) {
    let mut occurrences = 0;
    let mut matches = MatchSet::new();

    for run in find_thai_runs(content) {
        occurrences += 1;
        matches.insert(run.to_string());
    }

    (occurrences, matches)
}
