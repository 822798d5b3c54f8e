//! End-to-end checks against the bundled sample English dictionary.
//!
//! Expectations live in `tests/data/scenarios.json`.
//!
//! Run: cargo test -p fastspell --test scenarios

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use fastspell::{LoadError, Source, SourceError, SpellChecker};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct Scenarios {
    correct: Vec<String>,
    incorrect: Vec<String>,
    /// Misspelling to a suggestion that must be offered.
    suggestions: BTreeMap<String, String>,
}

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(name)
}

fn read_data(name: &str) -> String {
    let path = data_path(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
}

fn load_scenarios() -> Scenarios {
    serde_json::from_str(&read_data("scenarios.json"))
        .unwrap_or_else(|e| panic!("failed to parse scenarios.json: {}", e))
}

fn sample_checker() -> SpellChecker {
    SpellChecker::from_text(&read_data("en_sample.aff"), &read_data("en_sample.dic"))
}

// ---------------------------------------------------------------------------
// Checking
// ---------------------------------------------------------------------------

#[test]
fn correct_words_check() {
    let checker = sample_checker();
    let scenarios = load_scenarios();
    let failures: Vec<&String> = scenarios
        .correct
        .iter()
        .filter(|w| !checker.check(w))
        .collect();
    assert!(failures.is_empty(), "rejected: {failures:?}");
}

#[test]
fn incorrect_words_fail() {
    let checker = sample_checker();
    let scenarios = load_scenarios();
    let failures: Vec<&String> = scenarios
        .incorrect
        .iter()
        .filter(|w| checker.check(w))
        .collect();
    assert!(failures.is_empty(), "accepted: {failures:?}");
}

#[test]
fn every_dictionary_entry_checks() {
    let checker = sample_checker();
    let dic = read_data("en_sample.dic");
    for line in dic.lines().skip(1) {
        let word = line.split('/').next().unwrap_or(line);
        assert!(checker.check(word), "{word}");
        assert!(checker.check(&word.to_lowercase()), "{word}");
    }
}

#[test]
fn check_is_idempotent() {
    let checker = sample_checker();
    for word in ["hello", "helo", "100GB", "21st", "Paris"] {
        let first = checker.check(word);
        assert_eq!(checker.check(word), first, "{word}");
    }
}

#[test]
fn long_digit_runs_with_unknown_tail_fail_fast() {
    let checker = sample_checker();
    let started = Instant::now();
    assert!(!checker.check(&format!("{}qq", "1".repeat(40))));
    assert!(checker.check(&format!("{}1st", "2".repeat(40))));
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[test]
fn single_affix_reduction() {
    let checker = sample_checker();
    // one suffix is undone and the base looked up
    assert!(checker.check("helped"));
    assert!(checker.check("helping"));
    // "phone" carries no D flag; reduction accepts any stored base
    assert!(checker.check("phoned"));
    assert!(!checker.check("phonning"));
}

// ---------------------------------------------------------------------------
// Suggestions
// ---------------------------------------------------------------------------

#[test]
fn misspellings_get_expected_suggestions() {
    let checker = sample_checker();
    for (misspelled, expected) in &load_scenarios().suggestions {
        let suggestions = checker.suggest(misspelled);
        assert!(
            suggestions.contains(expected),
            "{misspelled}: {expected} not in {suggestions:?}"
        );
        assert!(suggestions.len() <= 10);
    }
}

#[test]
fn suggestions_are_valid_words() {
    let checker = sample_checker();
    for word in ["helo", "wrld", "seperate", "dgo", "teh"] {
        for suggestion in checker.suggest(word) {
            assert!(checker.check(&suggestion), "{word} -> {suggestion}");
        }
    }
}

#[test]
fn correct_words_get_no_suggestions() {
    let checker = sample_checker();
    for word in ["hello", "cats", "100GB", "21st"] {
        assert!(checker.suggest(word).is_empty(), "{word}");
    }
}

#[test]
fn no_suggest_words_are_never_offered() {
    let checker = sample_checker();
    assert!(checker.check("heck"));
    assert!(!checker.suggest("hecj").contains(&"heck".to_string()));
    assert!(!checker.suggest("hek").contains(&"heck".to_string()));
}

#[test]
fn replacement_with_space() {
    let checker = sample_checker();
    assert_eq!(checker.suggest("alot").first().map(String::as_str), Some("a lot"));
}

#[test]
fn suggest_is_idempotent() {
    let checker = sample_checker();
    let first = checker.suggest("recieve");
    assert_eq!(checker.suggest("recieve"), first);
    assert_eq!(first[0], "receive");
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[test]
fn reload_clears_caches() {
    let mut checker = sample_checker();
    assert!(checker.check("hello"));
    assert!(!checker.suggest("helo").is_empty());
    assert!(checker.cache_stats().check_entries > 0);

    checker.load_dictionary("", "2\nbonjour\nmonde\n").unwrap();
    let stats = checker.cache_stats();
    assert_eq!(stats.check_entries, 0);
    assert_eq!(stats.suggestion_entries, 0);
    assert!(!checker.check("hello"));
    assert!(checker.check("bonjour"));
}

#[test]
fn loading_through_providers() {
    let aff = data_path("en_sample.aff");
    let dic = data_path("en_sample.dic");
    let checker = SpellChecker::from_sources(
        Source::provider(move || Ok(std::fs::read_to_string(aff)?)),
        Source::provider(move || Ok(std::fs::read_to_string(dic)?)),
    )
    .unwrap();
    assert!(checker.check("unlocks"));
}

#[test]
fn failed_load_keeps_old_dictionary() {
    let mut checker = sample_checker();
    let result = checker.load_dictionary(
        Source::provider(|| Err(SourceError::Provider("unreachable host".into()))),
        "1\nbonjour\n",
    );
    assert!(matches!(result, Err(LoadError::Affix(_))));
    assert!(checker.check("hello"));
    assert!(!checker.check("bonjour"));
}

#[test]
fn empty_dictionary_behaves() {
    let checker = SpellChecker::new();
    assert!(!checker.check("hello"));
    assert!(checker.check("12345"));
    assert!(checker.suggest("helo").is_empty());
}
