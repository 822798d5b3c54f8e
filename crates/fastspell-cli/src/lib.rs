// fastspell-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use fastspell::{Source, SpellChecker};

/// Dictionary used when no `--lang` is given.
pub const DEFAULT_LANG: &str = "en_US";

/// Environment variable naming an extra dictionary directory.
pub const DICT_PATH_ENV: &str = "FASTSPELL_DICT_PATH";

/// Search for `<lang>.aff` and `<lang>.dic` and build a checker.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `FASTSPELL_DICT_PATH` environment variable
/// 3. `~/.fastspell`
/// 4. `/usr/share/hunspell`, `/usr/share/myspell`
/// 5. Current working directory
pub fn load_checker(dict_path: Option<&str>, lang: &str) -> Result<SpellChecker, String> {
    let search_paths = build_search_paths(dict_path);

    for dir in &search_paths {
        let Some((aff, dic)) = dictionary_files(dir, lang) else {
            continue;
        };
        tracing::debug!(aff = %aff.display(), dic = %dic.display(), "loading dictionary");
        return SpellChecker::from_sources(file_source(aff.clone()), file_source(dic.clone()))
            .map_err(|e| format!("failed to load {}: {e}", dir.display()));
    }

    Err(format!(
        "could not find {lang}.aff and {lang}.dic in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Both files of a dictionary in `dir`, if present.
fn dictionary_files(dir: &Path, lang: &str) -> Option<(PathBuf, PathBuf)> {
    let aff = dir.join(format!("{lang}.aff"));
    let dic = dir.join(format!("{lang}.dic"));
    (aff.is_file() && dic.is_file()).then_some((aff, dic))
}

/// A source that reads `path` when the dictionary is loaded.
fn file_source(path: PathBuf) -> Source {
    Source::provider(move || Ok(std::fs::read_to_string(path)?))
}

/// Build the list of directories to search for dictionary files.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var(DICT_PATH_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".fastspell"));
        #[cfg(target_os = "macos")]
        paths.push(home.join("Library").join("Spelling"));
    }

    paths.push(PathBuf::from("/usr/share/hunspell"));
    paths.push(PathBuf::from("/usr/share/myspell"));

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Pull `NAME VALUE` or `LONG=VALUE` out of `args`.
///
/// Returns `(value, remaining_args)`. Exits if the flag has no value.
fn take_option(args: &[String], short: &str, long: &str) -> (Option<String>, Vec<String>) {
    let mut value = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();
    let long_eq = format!("{long}=");

    while let Some(arg) = iter.next() {
        if let Some(v) = arg.strip_prefix(&long_eq) {
            value = Some(v.to_string());
        } else if arg == short || arg == long {
            match iter.next() {
                Some(v) => value = Some(v.clone()),
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    take_option(args, "-d", "--dict-path")
}

/// Parse `--lang=LANG` or `-l LANG`, defaulting to [`DEFAULT_LANG`].
pub fn parse_lang(args: &[String]) -> (String, Vec<String>) {
    let (lang, remaining) = take_option(args, "-l", "--lang");
    (lang.unwrap_or_else(|| DEFAULT_LANG.to_string()), remaining)
}

/// Install a stderr log subscriber: DEBUG with `-v`/`--verbose`, else WARN.
pub fn init_logging(args: &[String]) {
    let verbose = args.iter().any(|a| a == "-v" || a == "--verbose");
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .try_init();
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
