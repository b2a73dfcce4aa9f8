// lexfuzz-search: Approximate lookup of words in a wordlist.
//
// Loads a wordlist (one `headword` or `key<TAB>headword` per line) and prints
// every entry whose key is within the given edit distance of each query.
// Queries are compared against keys as-is; simplify them the same way the
// wordlist keys were simplified.
//
// Usage:
//   lexfuzz-search [-w WORDLIST] [OPTIONS] [WORD...]
//
// Options:
//   -w, --wordlist PATH      Wordlist file (default: $LEXFUZZ_WORDLIST, ./wordlist.txt)
//   -k, --distance N         Maximum edit distance (default: 1)
//   -m, --max-distance N     Largest distance accepted by -k (default: 3)
//   -h, --help               Print help

use std::io::{self, BufRead, Write};

use lexfuzz::FuzzyLexicon;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (wordlist, args) =
        lexfuzz_cli::parse_wordlist_path(&args).unwrap_or_else(|e| lexfuzz_cli::fatal(&e));

    if lexfuzz_cli::wants_help(&args) {
        println!("lexfuzz-search: Approximate lookup of words in a wordlist.");
        println!();
        println!("Usage: lexfuzz-search [-w WORDLIST] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, looks up each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -w, --wordlist PATH      Wordlist file (default: ${}, ./wordlist.txt)", lexfuzz_cli::WORDLIST_ENV);
        println!("  -k, --distance N         Maximum edit distance (default: 1)");
        println!("  -m, --max-distance N     Largest distance accepted by -k (default: 3)");
        println!("  -h, --help               Print this help");
        return;
    }

    let mut distance: Option<u32> = None;
    let mut max_distance: Option<u32> = None;
    let mut words: Vec<String> = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-k" | "--distance" | "-m" | "--max-distance" => {
                let Some(value) = iter.next() else {
                    lexfuzz_cli::fatal(&format!("{arg} requires a value"));
                };
                let parsed =
                    lexfuzz_cli::parse_distance(value).unwrap_or_else(|e| lexfuzz_cli::fatal(&e));
                if arg == "-k" || arg == "--distance" {
                    distance = Some(parsed);
                } else {
                    max_distance = Some(parsed);
                }
            }
            _ if arg.starts_with('-') && arg.len() > 1 => {
                lexfuzz_cli::fatal(&format!("unknown option: {arg}"));
            }
            _ => words.push(arg.clone()),
        }
    }

    let mut lexicon =
        lexfuzz_cli::load_lexicon(wordlist.as_deref()).unwrap_or_else(|e| lexfuzz_cli::fatal(&e));
    if let Some(m) = max_distance {
        lexicon.set_max_distance(m);
    }
    if let Some(k) = distance {
        lexicon.set_default_distance(k);
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            lookup_word(word, &lexicon, &mut out);
        }
    } else {
        for word in &words {
            lookup_word(word, &lexicon, &mut out);
        }
    }
}

fn lookup_word(word: &str, lexicon: &FuzzyLexicon, out: &mut impl Write) {
    let hits = lexicon
        .lookup(word)
        .unwrap_or_else(|e| lexfuzz_cli::fatal(&e.to_string()));

    if hits.is_empty() {
        let _ = writeln!(out, "{word}: (no matches)");
        return;
    }
    let _ = writeln!(out, "{word}:");
    for entry in &hits {
        let _ = writeln!(out, "  {}", lexfuzz_cli::format_hit(entry, word));
    }
}
