// fastspell-check: Check spelling of words from stdin.
//
// Reads words from stdin (one per line) and reports whether each word
// is correctly spelled:
//   C: word    (correct)
//   W: word    (wrong / misspelled)
//   S: word    (suggestion, with -s)
//
// Usage:
//   fastspell-check [-d DICT_PATH] [-l LANG] [OPTIONS]
//
// Options:
//   -d, --dict-path PATH   Directory containing LANG.aff and LANG.dic
//   -l, --lang LANG        Dictionary name (default: en_US)
//   -s, --suggest          Also print suggestions for misspelled words
//   -v, --verbose          Log dictionary loading to stderr
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = fastspell_cli::parse_dict_path(&args);
    let (lang, args) = fastspell_cli::parse_lang(&args);

    if fastspell_cli::wants_help(&args) {
        println!("fastspell-check: Check spelling of words from stdin.");
        println!();
        println!("Usage: fastspell-check [-d DICT_PATH] [-l LANG] [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  C: word    (correct)");
        println!("  W: word    (misspelled)");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Directory containing LANG.aff and LANG.dic");
        println!("  -l, --lang LANG        Dictionary name (default: {})", fastspell_cli::DEFAULT_LANG);
        println!("  -s, --suggest          Also print suggestions for misspelled words");
        println!("  -v, --verbose          Log dictionary loading to stderr");
        println!("  -h, --help             Print this help");
        return;
    }

    fastspell_cli::init_logging(&args);
    let show_suggestions = args.iter().any(|a| a == "-s" || a == "--suggest");

    let checker = fastspell_cli::load_checker(dict_path.as_deref(), &lang)
        .unwrap_or_else(|e| fastspell_cli::fatal(&e));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

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

        if checker.check(word) {
            let _ = writeln!(out, "C: {word}");
        } else {
            let _ = writeln!(out, "W: {word}");
            if show_suggestions {
                for suggestion in checker.suggest(word) {
                    let _ = writeln!(out, "S: {suggestion}");
                }
            }
        }
    }
}
