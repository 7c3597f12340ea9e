// Reusable library API — visible to both CLI and WASM builds
pub mod errors;
pub mod finder;
pub mod letter_counts;
pub mod log;
pub mod word_list;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
