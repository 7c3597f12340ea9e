//! Error types for the optional input-validation layer, with error codes and
//! helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code for documentation lookup:
//!
//! - E001: `InvalidPoolChar` (Non-lowercase character in the letter pool)
//! - E002: `InvalidWordChar` (Non-lowercase character in a dictionary word)
//!
//! The core finder never raises these — it is total over all strings. They
//! only occur when a caller opts into strict lowercase-a-z validation via
//! `finder::find_words_checked`, which rejects bad input up front, before
//! any letter counting begins.

use std::io;

/// Custom error type for checked word-finding operations
#[derive(Debug, thiserror::Error)]
pub enum FinderError {
    #[error("Letter pool contains invalid character '{invalid_char}' (only lowercase a-z allowed)")]
    InvalidPoolChar { invalid_char: char },

    #[error("Word \"{word}\" contains invalid character '{invalid_char}' (only lowercase a-z allowed)")]
    InvalidWordChar { word: String, invalid_char: char },
}

impl From<FinderError> for io::Error {
    fn from(fe: FinderError) -> Self {
        // String version is the least fragile (no Send/Sync bounds issues)
        io::Error::new(io::ErrorKind::InvalidInput, fe.to_string())
    }
}

impl FinderError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            FinderError::InvalidPoolChar { .. } => "E001",
            FinderError::InvalidWordChar { .. } => "E002",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            FinderError::InvalidPoolChar { .. } => {
                Some("Lowercase the pool first, or use the unchecked finder which accepts any characters")
            }
            FinderError::InvalidWordChar { .. } => {
                Some("Word lists loaded via word_list are lowercased already; raw dictionaries may need normalizing")
            }
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
