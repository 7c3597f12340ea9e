//! Integration tests for the letterbank word finder.
//!
//! These tests exercise the complete pipeline from word-list parsing through
//! letter counting to the final ordered match list, using realistic word
//! lists and edge-case letter pools.

use std::fs;

use letterbank::errors::FinderError;
use letterbank::finder::{find_words, find_words_checked, find_words_with, FinderConfig};
use letterbank::letter_counts::LetterCounts;
use letterbank::word_list::WordList;

/// Load the test word list from fixtures
fn load_test_word_list() -> WordList {
    let content = fs::read_to_string("tests/fixtures/test_word_list.txt")
        .expect("Failed to read test word list");

    WordList::parse_from_str(&content, 50)
}

/// Helper to convert Vec<String> to Vec<&str>
fn as_str_slice(words: &[String]) -> Vec<&str> {
    words.iter().map(|s| s.as_str()).collect()
}

mod basic_matching {
    use super::*;

    #[test]
    fn test_anagrams_of_pool_all_match() {
        let dictionary = ["ate", "eat", "tea", "dog", "do", "god", "goo", "go", "good"];
        let matches = find_words("ate", &dictionary);

        assert_eq!(matches, vec!["ate", "eat", "tea"]);
    }

    #[test]
    fn test_partial_words_match() {
        let dictionary = ["map", "pam", "dog", "cat", "lax", "plea", "exams"];
        let matches = find_words("example", &dictionary);

        // "exams" needs an 's'; "example" has none
        assert_eq!(matches, vec!["map", "pam", "lax", "plea"]);
    }

    #[test]
    fn test_word_equal_to_pool_matches() {
        assert_eq!(find_words("apple", &["apple"]), vec!["apple"]);
    }

    #[test]
    fn test_repeated_letters_respected() {
        let dictionary = ["oll", "hole", "hell", "llo"];
        let matches = find_words("hello", &dictionary);

        // "hello" has two l's, so every word here is formable
        assert_eq!(matches, vec!["oll", "hole", "hell", "llo"]);
    }

    #[test]
    fn test_too_many_repeats_rejected() {
        // "banana" needs three a's and two n's
        let dictionary = ["banana", "bandana"];
        assert_eq!(find_words("aanban", &dictionary), vec!["banana"]);
    }
}

mod edge_cases {
    use super::*;

    #[test]
    fn test_empty_pool_nonempty_dictionary() {
        assert!(find_words("", &["ate", "eat", "tea"]).is_empty());
    }

    #[test]
    fn test_empty_pool_with_empty_word() {
        // the empty word is formable even from nothing
        assert_eq!(find_words("", &["ate", ""]), vec![""]);
    }

    #[test]
    fn test_empty_dictionary() {
        let dictionary: [&str; 0] = [];
        assert!(find_words("ate", &dictionary).is_empty());
    }

    #[test]
    fn test_duplicate_words_each_kept() {
        let dictionary = ["tea", "tea", "dog", "tea"];
        assert_eq!(find_words("ate", &dictionary), vec!["tea", "tea", "tea"]);
    }

    #[test]
    fn test_unicode_pool_and_words() {
        let dictionary = ["née", "ne", "en"];
        let matches = find_words("néen", &dictionary);
        assert_eq!(matches, vec!["née", "ne", "en"]);
    }
}

mod properties {
    use super::*;

    #[test]
    fn test_result_is_ordered_subsequence() {
        let word_list = load_test_word_list();
        let dictionary = as_str_slice(&word_list.words);
        let matches = find_words("relatives", &dictionary);

        // every match appears in the dictionary, in the same relative order
        let mut dict_iter = dictionary.iter();
        for m in &matches {
            assert!(
                dict_iter.any(|w| w == m),
                "match '{m}' out of order or missing from dictionary"
            );
        }
    }

    #[test]
    fn test_every_match_is_formable_and_every_nonmatch_is_not() {
        let word_list = load_test_word_list();
        let dictionary = as_str_slice(&word_list.words);
        let pool_counts = LetterCounts::from_word("relatives");
        let matches = find_words("relatives", &dictionary);

        for word in &dictionary {
            let formable = pool_counts.covers(&LetterCounts::from_word(word));
            assert_eq!(
                formable,
                matches.contains(word),
                "classification mismatch for '{word}'"
            );
        }
    }

    #[test]
    fn test_dominating_pool_forms_superset() {
        let word_list = load_test_word_list();
        let dictionary = as_str_slice(&word_list.words);

        // "relativesz" dominates "relatives" (same letters plus a 'z')
        let small = find_words("relatives", &dictionary);
        let large = find_words("relativesz", &dictionary);

        for word in &small {
            assert!(
                large.contains(word),
                "'{word}' formable from the smaller pool but not the dominating one"
            );
        }
    }

    #[test]
    fn test_repeated_calls_identical() {
        let word_list = load_test_word_list();
        let dictionary = as_str_slice(&word_list.words);

        let first = find_words("stainer", &dictionary);
        let second = find_words("stainer", &dictionary);
        assert_eq!(first, second);
    }
}

mod case_folding {
    use super::*;

    #[test]
    fn test_default_is_exact_match() {
        assert!(find_words("ate", &["TEA"]).is_empty());
    }

    #[test]
    fn test_fold_case_applies_to_both_sides() {
        let config = FinderConfig { fold_case: true };
        let matches = find_words_with(config, "ATE", &["Tea", "DOG"]);
        assert_eq!(matches, vec!["Tea"]);
    }
}

mod checked_validation {
    use super::*;

    #[test]
    fn test_checked_happy_path_matches_unchecked() {
        let word_list = load_test_word_list();
        let dictionary = as_str_slice(&word_list.words);

        let checked = find_words_checked("relatives", &dictionary).unwrap();
        let unchecked = find_words("relatives", &dictionary);
        assert_eq!(checked, unchecked);
    }

    #[test]
    fn test_checked_rejects_uppercase_pool() {
        let err = find_words_checked("Ate", &["tea"]).unwrap_err();
        assert_eq!(err.code(), "E001");
        assert!(matches!(err, FinderError::InvalidPoolChar { invalid_char: 'A' }));
    }

    #[test]
    fn test_checked_rejects_punctuation_in_word() {
        let err = find_words_checked("ate", &["te-a"]).unwrap_err();
        assert_eq!(err.code(), "E002");
    }
}

mod word_list_pipeline {
    use super::*;

    #[test]
    fn test_fixture_parsed_in_order_with_score_filter() {
        let word_list = load_test_word_list();

        // low-scored "zyzzyva" filtered out, everything else kept in file order
        assert!(!word_list.words.iter().any(|w| w == "zyzzyva"));
        assert!(word_list.words.len() >= 10);

        let positions: Vec<usize> = ["ate", "tea", "relative"]
            .iter()
            .map(|w| {
                word_list
                    .words
                    .iter()
                    .position(|x| x == w)
                    .unwrap_or_else(|| panic!("'{w}' missing from fixture"))
            })
            .collect();
        assert!(positions[0] < positions[1] && positions[1] < positions[2]);
    }

    #[test]
    fn test_end_to_end_from_fixture() {
        let word_list = load_test_word_list();
        let dictionary = as_str_slice(&word_list.words);

        let matches = find_words("ate", &dictionary);
        assert_eq!(matches, vec!["ate", "eat", "tea", "at"]);
    }
}
