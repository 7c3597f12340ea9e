use clap::Parser;
use std::process::ExitCode;
use std::time::Instant;

use letterbank::errors::FinderError;
use letterbank::finder::{self, FinderConfig};
use letterbank::word_list::WordList;

/// Letterbank word finder
#[derive(Parser, Debug)]
#[command(author, about, long_about = None)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"))]
struct Cli {
    /// The pool of letters available to build words (e.g., "retinas")
    letters: String,

    /// Path to the word list file (`word` or `word;score` per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/wordlist.txt")
    )]
    word_list: String,

    /// Minimum score filter for scored word lists
    #[arg(short = 'm', long, default_value_t = 50)]
    min_score: i32,

    /// Lowercase the letter pool before matching (word lists are lowercased on load)
    #[arg(long, default_value_t = false)]
    fold_case: bool,

    /// Reject input containing anything but lowercase a-z
    #[arg(long, default_value_t = false)]
    checked: bool,
}

/// Entry point of the letterbank CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("LETTERBANK_DEBUG").is_ok();
    letterbank::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        // Print the error to stderr, with detailed formatting if it's a FinderError
        if let Some(finder_err) = e.downcast_ref::<FinderError>() {
            eprintln!("Error: {}", finder_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the letterbank CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the word list from disk, applying the minimum score filter.
/// 3. Find the words formable from the given letter pool.
/// 4. Print each match on stdout.
/// 5. Print diagnostics (timings, counts) on stderr.
///
/// Returns `Ok(())` on success or an error (e.g., missing word-list file,
/// invalid characters in `--checked` mode) which bubbles up to [`main`].
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // 1. Load the word list from disk, filtering out low-score words
    let t_load = Instant::now();
    let word_list = WordList::load_from_path(&cli.word_list, cli.min_score)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    // Build a Vec<&str> of word references for the finder
    let words_ref: Vec<_> = word_list.words.iter().map(String::as_str).collect();

    // 2. Filter the list down to the formable words
    let t_find = Instant::now();
    let matches = if cli.checked {
        finder::find_words_checked(&cli.letters, &words_ref)?
    } else {
        let config = FinderConfig { fold_case: cli.fold_case };
        finder::find_words_with(config, &cli.letters, &words_ref)
    };
    let find_secs = t_find.elapsed().as_secs_f64();

    // 3. Print each match on stdout
    for word in &matches {
        println!("{word}");
    }

    // 4. Print diagnostics (word-list size, timings, number of matches) to stderr
    eprintln!(
        "Loaded {} words in {:.3}s; searched in {:.3}s ({} formable).",
        word_list.words.len(),
        load_secs,
        find_secs,
        matches.len()
    );

    Ok(())
}
