//! `letter_counts` — per-character occurrence counts for a string.
//!
//! A [`LetterCounts`] is built in a single pass over a string and answers one
//! question: does this pool of letters cover some other pool? That covering
//! test (`covers`) is the heart of the whole crate — a word is formable from
//! a letter pool exactly when the pool's counts cover the word's counts.
//!
//! Keys are individual `char`s (Unicode code points) compared by exact
//! identity. Nothing here folds case or normalizes; callers that want
//! case-insensitive matching must lowercase *both* sides before building
//! counts (see `finder::FinderConfig`). A character that does not occur in
//! the string is simply absent from the map — counts are always ≥ 1.

use std::collections::HashMap;

/// Occurrence counts for each character of a string.
///
/// Construction is total: any string, including the empty string, produces a
/// valid (possibly empty) map. The value is immutable after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: HashMap<char, u32>,
}

impl LetterCounts {
    /// Count the characters of `word` in one linear pass.
    ///
    /// O(n) in the length of `word`, O(k) space for k distinct characters.
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut counts = HashMap::new();
        for c in word.chars() {
            *counts.entry(c).or_insert(0) += 1;
        }
        LetterCounts { counts }
    }

    /// Number of times `c` occurs (0 if absent).
    #[must_use]
    pub fn count(&self, c: char) -> u32 {
        self.counts.get(&c).copied().unwrap_or(0)
    }

    /// Number of distinct characters.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// True if no character occurs at all (built from the empty string).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// True iff every character required by `target` is available here with
    /// at least the required multiplicity.
    ///
    /// An empty `target` is vacuously covered by anything, including an
    /// empty source. The iteration short-circuits on the first character
    /// that is missing or undersupplied.
    ///
    /// O(d) where d = number of distinct characters in `target`.
    #[must_use]
    pub fn covers(&self, target: &LetterCounts) -> bool {
        target
            .counts
            .iter()
            .all(|(&c, &needed)| self.count(c) >= needed)
    }
}

impl From<&str> for LetterCounts {
    fn from(word: &str) -> Self {
        LetterCounts::from_word(word)
    }
}
