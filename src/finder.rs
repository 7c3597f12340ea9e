//! The word finder: filter a dictionary down to the words formable from a
//! pool of letters.
//!
//! A word is *formable* when the pool contains every one of its characters
//! with at least the word's multiplicity — letters are never consumed across
//! words, so each dictionary entry is checked independently against the full
//! pool. The result is always an order-preserving subsequence of the input
//! dictionary: a stable filter, never a reordering or a deduplication.
//!
//! # Examples
//!
//! ```
//! use letterbank::finder;
//!
//! let dictionary = ["ate", "eat", "tea", "dog"];
//! let matches = finder::find_words("ate", &dictionary);
//! assert_eq!(matches, vec!["ate", "eat", "tea"]);
//! ```
//!
//! Matching is case-sensitive by exact code point unless a caller opts into
//! uniform case folding:
//!
//! ```
//! use letterbank::finder::{find_words_with, FinderConfig};
//!
//! let dictionary = ["Tea", "dog"];
//! let config = FinderConfig { fold_case: true };
//! assert_eq!(find_words_with(config, "ATE", &dictionary), vec!["Tea"]);
//! ```

use crate::errors::FinderError;
use crate::letter_counts::LetterCounts;
use std::borrow::Cow;

/// Matching options for the finder.
///
/// The default is case-sensitive, exact code-point matching — the
/// conservative choice, since letter pools and word lists are conventionally
/// all-lowercase already. With `fold_case` set, lowercasing is applied
/// uniformly to the pool *and* to every dictionary word before counting;
/// folding only one side would silently never match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FinderConfig {
    /// Lowercase both the pool and each word before comparing.
    pub fold_case: bool,
}

/// Find every word in `dictionary` that can be built from the letters of
/// `pool`, in the dictionary's original order.
///
/// Case-sensitive; see [`find_words_with`] for the configurable variant.
/// Total over all inputs: an empty pool, an empty dictionary, duplicate
/// words, and non-alphabetic characters are all well-defined (non-letters
/// are ordinary keys and match only if the pool supplies them). The empty
/// word is formable from any pool, including the empty one.
#[must_use]
pub fn find_words<'a>(pool: &str, dictionary: &[&'a str]) -> Vec<&'a str> {
    find_words_with(FinderConfig::default(), pool, dictionary)
}

/// [`find_words`] with explicit [`FinderConfig`].
///
/// The pool's counts are built exactly once, outside the per-word loop;
/// each word then gets its own counts and a single covering test. Matched
/// words are returned in their original dictionary spelling even when
/// `fold_case` is set.
#[must_use]
pub fn find_words_with<'a>(
    config: FinderConfig,
    pool: &str,
    dictionary: &[&'a str],
) -> Vec<&'a str> {
    let pool_counts = LetterCounts::from_word(&fold(config, pool));
    log::debug!(
        "searching {} words against a pool of {} distinct letters",
        dictionary.len(),
        pool_counts.distinct()
    );

    let matches: Vec<&'a str> = dictionary
        .iter()
        .filter(|word| pool_counts.covers(&LetterCounts::from_word(&fold(config, word))))
        .copied()
        .collect();

    log::debug!("{} of {} words formable", matches.len(), dictionary.len());
    matches
}

/// Strict variant of [`find_words`]: rejects any input outside lowercase
/// a-z *before* any letter counting begins.
///
/// This is an optional hardening layer for callers that want the
/// conventional all-lowercase alphabet enforced at the boundary. No partial
/// result is ever produced — either the whole call is validated and runs,
/// or it fails with a [`FinderError`] naming the first offending character.
///
/// # Errors
///
/// - [`FinderError::InvalidPoolChar`] if `pool` contains anything but a-z.
/// - [`FinderError::InvalidWordChar`] if any dictionary word does.
pub fn find_words_checked<'a>(
    pool: &str,
    dictionary: &[&'a str],
) -> Result<Vec<&'a str>, FinderError> {
    if let Some(invalid_char) = first_non_lowercase(pool) {
        return Err(FinderError::InvalidPoolChar { invalid_char });
    }
    for word in dictionary {
        if let Some(invalid_char) = first_non_lowercase(word) {
            return Err(FinderError::InvalidWordChar {
                word: (*word).to_string(),
                invalid_char,
            });
        }
    }

    Ok(find_words(pool, dictionary))
}

fn fold<'a>(config: FinderConfig, s: &'a str) -> Cow<'a, str> {
    if config.fold_case {
        Cow::Owned(s.to_lowercase())
    } else {
        Cow::Borrowed(s)
    }
}

fn first_non_lowercase(s: &str) -> Option<char> {
    s.chars().find(|c| !c.is_ascii_lowercase())
}
