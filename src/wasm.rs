use crate::errors::FinderError;
use crate::finder::{find_words_checked, find_words_with, FinderConfig};
use crate::log::init_logger;
use crate::word_list::WordList;
use wasm_bindgen::prelude::*;

use serde_wasm_bindgen::to_value;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "E001", "WASM001")
    code: String,
    /// Display message
    message: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<FinderError> for WasmError {
    fn from(e: FinderError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            help: e.help().map(|s| s.to_string()),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {help}"));
        }

        // Create a JavaScript Error object with the formatted message
        js_sys::Error::new(&msg).into()
    }
}

/// Initialize letterbank logging with the specified debug setting.
///
/// # Arguments
/// * `debug_enabled` - If true, use Debug log level; if false, use Info log level
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    // 1. Set up panic hook
    console_error_panic_hook::set_once();

    // 2. Initialize logging with the provided debug setting
    init_logger(debug_enabled);

    log::info!("WASM module initialized");
}

/// JS entry: (letters: string, word_list: string[], fold_case: boolean)
/// returns string[] — the formable words, in word-list order.
#[wasm_bindgen]
pub fn find_words_wasm(
    letters: &str,
    word_list: JsValue,
    fold_case: bool,
) -> Result<JsValue, JsValue> {
    // word_list: string[] -> Vec<String>
    let words: Vec<String> = serde_wasm_bindgen::from_value(word_list).map_err(|e| {
        // Structured error for deserialization failures
        WasmError {
            code: "WASM001".to_string(),
            message: format!("word_list must be string[]: {e}"),
            help: Some("Ensure you're passing a valid string array, e.g., ['cat', 'dog', 'fish']".to_string()),
        }
    })?;
    // Borrow as &[&str] for the finder
    let refs: Vec<&str> = words.iter().map(String::as_str).collect();

    let matches = find_words_with(FinderConfig { fold_case }, letters, &refs);

    to_value(&matches).map_err(|e| {
        WasmError {
            code: "WASM002".to_string(),
            message: format!("serialization failed: {e}"),
            help: Some("This is an internal error. Please report this issue.".to_string()),
        }
        .into()
    })
}

/// Strict JS entry: like `find_words_wasm` but rejects any input outside
/// lowercase a-z with a coded error (E001/E002) before any matching runs.
#[wasm_bindgen]
pub fn find_words_checked_wasm(letters: &str, word_list: JsValue) -> Result<JsValue, JsValue> {
    let words: Vec<String> = serde_wasm_bindgen::from_value(word_list).map_err(|e| {
        WasmError {
            code: "WASM001".to_string(),
            message: format!("word_list must be string[]: {e}"),
            help: Some("Ensure you're passing a valid string array, e.g., ['cat', 'dog', 'fish']".to_string()),
        }
    })?;
    let refs: Vec<&str> = words.iter().map(String::as_str).collect();

    let matches = find_words_checked(letters, &refs).map_err(WasmError::from)?;

    to_value(&matches).map_err(|e| {
        WasmError {
            code: "WASM002".to_string(),
            message: format!("serialization failed: {e}"),
            help: Some("This is an internal error. Please report this issue.".to_string()),
        }
        .into()
    })
}

/// Parse a newline-separated word list string into an array of words.
///
/// Each line of the input is either `word` or `word;score`. Scored words
/// below `min_score` are filtered out. Returns the surviving words as a
/// `JsValue` array of strings, suitable for consumption in JavaScript.
///
/// # Errors
/// Returns a `JsValue` error if serialization fails.
#[wasm_bindgen]
pub fn parse_word_list(text: &str, min_score: i32) -> Result<JsValue, JsValue> {
    let word_list = WordList::parse_from_str(text, min_score);
    to_value(&word_list.words).map_err(|e| {
        WasmError {
            code: "WASM003".to_string(),
            message: format!("serialization failed: {e}"),
            help: Some("This is an internal error. Please report this issue.".to_string()),
        }
        .into()
    })
}
