// fastspell-suggest: Generate spelling suggestions.
//
// Prints suggestions for each misspelled word given on the command line,
// or read from stdin (one per line). Correct words are reported as such.
//
// Usage:
//   fastspell-suggest [-d DICT_PATH] [-l LANG] [OPTIONS] [WORD...]
//
// Options:
//   -d, --dict-path PATH     Directory containing LANG.aff and LANG.dic
//   -l, --lang LANG          Dictionary name (default: en_US)
//   -n, --max-suggestions N  Maximum number of suggestions (default: 10)
//   -v, --verbose            Log dictionary loading to stderr
//   -h, --help               Print help

use std::io::{self, BufRead, Write};

use fastspell::SpellChecker;

fn suggest_word(word: &str, checker: &SpellChecker, out: &mut impl Write) {
    if checker.check(word) {
        let _ = writeln!(out, "{word} (correct)");
        return;
    }
    let suggestions = checker.suggest(word);
    if suggestions.is_empty() {
        let _ = writeln!(out, "{word}: (no suggestions)");
    } else {
        let _ = writeln!(out, "{word}:");
        for s in &suggestions {
            let _ = writeln!(out, "  {s}");
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = fastspell_cli::parse_dict_path(&args);
    let (lang, args) = fastspell_cli::parse_lang(&args);

    if fastspell_cli::wants_help(&args) {
        println!("fastspell-suggest: Generate spelling suggestions.");
        println!();
        println!("Usage: fastspell-suggest [-d DICT_PATH] [-l LANG] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, suggests for each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH     Directory containing LANG.aff and LANG.dic");
        println!("  -l, --lang LANG          Dictionary name (default: {})", fastspell_cli::DEFAULT_LANG);
        println!("  -n, --max-suggestions N  Maximum number of suggestions (default: 10)");
        println!("  -v, --verbose            Log dictionary loading to stderr");
        println!("  -h, --help               Print this help");
        return;
    }

    fastspell_cli::init_logging(&args);

    let mut max_suggestions: Option<usize> = None;
    let mut words: Vec<String> = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if arg == "-n" || arg == "--max-suggestions" {
            let Some(value) = iter.next() else {
                fastspell_cli::fatal("--max-suggestions requires a value");
            };
            max_suggestions = Some(
                value
                    .parse()
                    .unwrap_or_else(|_| fastspell_cli::fatal("invalid number for --max-suggestions")),
            );
        } else if !arg.starts_with('-') {
            words.push(arg.clone());
        }
    }

    let mut checker = fastspell_cli::load_checker(dict_path.as_deref(), &lang)
        .unwrap_or_else(|e| fastspell_cli::fatal(&e));
    if let Some(n) = max_suggestions {
        checker.set_max_suggestions(n);
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
            suggest_word(word, &checker, &mut out);
        }
    } else {
        for word in &words {
            suggest_word(word, &checker, &mut out);
        }
    }
}
