//! `word_list` — Module to load and preprocess the candidate word list.
//!
//! This module is responsible for reading a word list (either from a file, or
//! from an in-memory string — the latter is important for WebAssembly/browser
//! builds, since direct file I/O isn't allowed there).
//!
//! The output is a `WordList` struct containing a flat `Vec<String>` of
//! lowercase words **in their original file order**. The finder's contract is
//! an order-preserving filter over the dictionary exactly as given, so unlike
//! a solver-oriented list we do NOT sort and do NOT deduplicate — duplicate
//! lines are legitimate input and each occurrence is tested independently.
//!
//! The parsing logic:
//! - Each line is either a bare `word`, or `word;score`.
//! - Bare words are always kept.
//! - For scored lines, `score` is parsed as an integer and words with scores
//!   below `min_score` are skipped; lines whose score fails to parse are
//!   skipped silently.
//! - All words are normalized to lowercase.
//!
//! This module is designed to be **WASM-friendly** — no `std::fs` calls are
//! made unless we're on a native build. The public API provides:
//! - `parse_from_str(...)` — works everywhere, including WASM.
//! - `load_from_path(...)` — **native-only** convenience method to read from
//!   a file path.

/// Struct representing a processed, ready-to-use word list.
///
/// The `words` vector contains all valid words (filtered, lowercased), in
/// the order they appeared in the input.
#[derive(Debug, Clone)]
pub struct WordList {
    /// List of lowercase words, original order preserved.
    /// Example: `["able", "acid", "acorn", ...]`
    pub words: Vec<String>,
}

impl WordList {
    /// Parse a raw word list from an in-memory string.
    ///
    /// This is **WASM-safe** because it doesn't touch the filesystem — you
    /// can pass the contents of a file fetched via JavaScript `fetch()` or
    /// read from the File API directly into this function.
    ///
    /// # Arguments
    /// * `contents`  — The raw file contents. Each line is `word` or `word;score`.
    /// * `min_score` — Scored words below this are skipped (bare words always pass).
    ///
    /// # Behavior
    /// 1. Splits the input into lines and trims whitespace.
    /// 2. Skips empty lines.
    /// 3. For `word;score` lines, parses the score and filters by `min_score`.
    /// 4. Converts every surviving word to lowercase.
    /// 5. Keeps original order; keeps duplicates.
    pub fn parse_from_str(contents: &str, min_score: i32) -> WordList {
        let words: Vec<String> = contents
            .lines()
            .filter_map(|raw_line| {
                let line = raw_line.trim();

                if line.is_empty() {
                    None
                } else if let Some((word_raw, score_raw)) = line.split_once(';') {
                    // Splitting on the first ';' means a word containing
                    // semicolons later (unlikely, but robust) won't break parsing.
                    let score: i32 = score_raw.trim().parse().ok()?;

                    if score < min_score {
                        None
                    } else {
                        Some(word_raw.trim().to_lowercase())
                    }
                } else {
                    // Bare word, no score to filter on.
                    Some(line.to_lowercase())
                }
            })
            .collect();

        WordList { words }
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// This method is **not available** in WebAssembly builds, because
    /// browsers cannot read files from arbitrary paths.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(
        path: P,
        min_score: i32,
    ) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e),
            )
        })?;

        Ok(Self::parse_from_str(&data, min_score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_words() {
        let input = "cat\ndog\nbird";
        let word_list = WordList::parse_from_str(input, 50);

        assert_eq!(word_list.words, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn test_parse_scored_words_filters_low_scores() {
        let input = "apple;100\nbanana;20\ncherry;80";
        let word_list = WordList::parse_from_str(input, 50);

        assert_eq!(word_list.words, vec!["apple", "cherry"]);
    }

    #[test]
    fn test_parse_mixed_bare_and_scored() {
        let input = "cat\ndog;10\nbird;90";
        let word_list = WordList::parse_from_str(input, 50);

        // bare words bypass the score filter
        assert_eq!(word_list.words, vec!["cat", "bird"]);
    }

    #[test]
    fn test_parse_preserves_order() {
        let input = "zebra;50\nab;50\napple;50\ncat;50";
        let word_list = WordList::parse_from_str(input, 45);

        assert_eq!(word_list.words, vec!["zebra", "ab", "apple", "cat"]);
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        let input = "cat;50\ndog;60\ncat;70";
        let word_list = WordList::parse_from_str(input, 45);

        assert_eq!(word_list.words, vec!["cat", "dog", "cat"]);
    }

    #[test]
    fn test_parse_normalizes_to_lowercase() {
        let input = "CAT;50\nDog;60\nBIRD";
        let word_list = WordList::parse_from_str(input, 45);

        assert_eq!(word_list.words, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn test_parse_skips_empty_lines() {
        let input = "cat;50\n\n\ndog;60\n\n";
        let word_list = WordList::parse_from_str(input, 45);

        assert_eq!(word_list.words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_parse_skips_unparsable_scores() {
        let input = "cat;50\napple;bad_score\ndog;60";
        let word_list = WordList::parse_from_str(input, 45);

        assert_eq!(word_list.words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_parse_empty_input() {
        let word_list = WordList::parse_from_str("", 45);
        assert!(word_list.words.is_empty());
    }

    #[test]
    fn test_parse_handles_whitespace() {
        let input = "  cat  ;  50  \n  dog  ;  60  ";
        let word_list = WordList::parse_from_str(input, 45);

        assert_eq!(word_list.words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_parse_negative_scores() {
        let input = "cat;-10\ndog;60\nbird;-5";
        let word_list = WordList::parse_from_str(input, 0);

        assert_eq!(word_list.words, vec!["dog"]);
    }
}
