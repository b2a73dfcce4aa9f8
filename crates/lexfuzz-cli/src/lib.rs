// lexfuzz-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use lexfuzz::{Entry, FuzzyLexicon};
use lexfuzz_core::distance::levenshtein;

/// Environment variable naming the wordlist file.
pub const WORDLIST_ENV: &str = "LEXFUZZ_WORDLIST";

/// Wordlist file name looked up in the current directory.
const DEFAULT_WORDLIST: &str = "wordlist.txt";

/// Search for a wordlist file and load it.
///
/// Search order:
/// 1. `wordlist_path` argument (if provided)
/// 2. `LEXFUZZ_WORDLIST` environment variable
/// 3. `wordlist.txt` in the current working directory
pub fn load_lexicon(wordlist_path: Option<&str>) -> Result<FuzzyLexicon, String> {
    let candidates = build_search_paths(wordlist_path);

    for path in &candidates {
        if path.is_file() {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
            return FuzzyLexicon::from_wordlist(&text)
                .map_err(|e| format!("failed to load {}: {}", path.display(), e));
        }
    }

    Err(format!(
        "could not find a wordlist in any of the search paths:\n{}",
        candidates
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of candidate wordlist files.
fn build_search_paths(wordlist_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = wordlist_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var(WORDLIST_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(DEFAULT_WORDLIST));
    }

    paths
}

/// Parse a `--wordlist=PATH` or `-w PATH` argument from command line args.
///
/// Returns `(wordlist_path, remaining_args)`.
pub fn parse_wordlist_path(args: &[String]) -> Result<(Option<String>, Vec<String>), String> {
    let mut wordlist = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--wordlist=") {
            wordlist = Some(val.to_string());
        } else if arg == "--wordlist" || arg == "-w" {
            match iter.next() {
                Some(val) => wordlist = Some(val.clone()),
                None => return Err(format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((wordlist, remaining))
}

/// Parse an edit distance argument.
///
/// Negative values are rejected here, before any search runs.
pub fn parse_distance(value: &str) -> Result<u32, String> {
    let trimmed = value.trim();
    if trimmed.starts_with('-') {
        return Err(format!("edit distance must be non-negative, got {trimmed}"));
    }
    trimmed
        .parse()
        .map_err(|_| format!("invalid edit distance: {trimmed}"))
}

/// Format one hit as `headword (key, distance d)`.
pub fn format_hit(entry: &Entry, term: &str) -> String {
    let distance = levenshtein(&entry.key, term);
    if entry.key == entry.headword {
        format!("{} (distance {distance})", entry.headword)
    } else {
        format!("{} ({}, distance {distance})", entry.headword, entry.key)
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
