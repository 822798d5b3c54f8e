// SpellChecker: owns the active dictionary and the result caches.
//
// Design notes:
// - The dictionary is immutable. Reloading builds a complete replacement
//   first and swaps it in only on success, so a failed load leaves the
//   previous dictionary and caches as they were.
// - Caches sit behind `RefCell` because `check` and `suggest` take `&self`.
//   The handle is therefore single-threaded (`!Sync`).
// - Checks made while generating suggestions bypass the check cache.

use std::cell::{Cell, RefCell};

use fastspell_core::BoundedCache;
#[cfg(feature = "suggest")]
use fastspell_core::case::{CaseType, apply_case, detect_case};

use crate::affix::DEFAULT_AFFIX_CACHE_CAPACITY;
use crate::dictionary::Dictionary;
use crate::error::LoadError;
use crate::source::Source;
use crate::speller::Speller;
#[cfg(feature = "suggest")]
use crate::suggestion::{self, SuggestionStrategy, default_strategy};
use crate::trie::DEFAULT_PREFIX_LIMIT;

/// Tunable limits of a [`SpellChecker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpellerOptions {
    /// Most suggestions returned per word.
    pub max_suggestions: usize,
    pub check_cache_capacity: usize,
    pub suggestion_cache_capacity: usize,
    /// Memo size for affix reductions, applied when a dictionary is built.
    pub affix_cache_capacity: usize,
    /// Completions fetched per prefix while suggesting.
    pub prefix_limit: usize,
}

impl Default for SpellerOptions {
    fn default() -> Self {
        Self {
            max_suggestions: 10,
            check_cache_capacity: 10_000,
            suggestion_cache_capacity: 1_000,
            affix_cache_capacity: DEFAULT_AFFIX_CACHE_CAPACITY,
            prefix_limit: DEFAULT_PREFIX_LIMIT,
        }
    }
}

/// Snapshot of cache occupancy and check-cache effectiveness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub check_entries: usize,
    pub suggestion_entries: usize,
    pub affix_entries: usize,
    pub check_hits: u64,
    pub check_misses: u64,
}

/// Spell checker over one installed dictionary.
pub struct SpellChecker {
    dictionary: Dictionary,
    options: SpellerOptions,
    #[cfg(feature = "suggest")]
    strategy: SuggestionStrategy,
    /// Keyed by the word exactly as the caller gave it.
    check_cache: RefCell<BoundedCache<String, bool>>,
    #[cfg(feature = "suggest")]
    suggestion_cache: RefCell<BoundedCache<String, Vec<String>>>,
    check_hits: Cell<u64>,
    check_misses: Cell<u64>,
}

impl Default for SpellChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl SpellChecker {
    /// A checker with an empty dictionary: nothing checks, nothing is
    /// suggested.
    pub fn new() -> Self {
        Self::with_options(SpellerOptions::default())
    }

    pub fn with_options(options: SpellerOptions) -> Self {
        Self::with_dictionary(Dictionary::empty(), options)
    }

    /// A checker built from affix and dictionary text.
    pub fn from_text(aff: &str, dic: &str) -> Self {
        let options = SpellerOptions::default();
        let dictionary = Dictionary::from_text_with_cache(aff, dic, options.affix_cache_capacity);
        Self::with_dictionary(dictionary, options)
    }

    /// A checker built from two content sources.
    pub fn from_sources(aff: impl Into<Source>, dic: impl Into<Source>) -> Result<Self, LoadError> {
        let mut checker = Self::new();
        checker.load_dictionary(aff, dic)?;
        Ok(checker)
    }

    fn with_dictionary(dictionary: Dictionary, options: SpellerOptions) -> Self {
        Self {
            dictionary,
            options,
            #[cfg(feature = "suggest")]
            strategy: default_strategy(options.prefix_limit),
            check_cache: RefCell::new(BoundedCache::new(options.check_cache_capacity)),
            #[cfg(feature = "suggest")]
            suggestion_cache: RefCell::new(BoundedCache::new(options.suggestion_cache_capacity)),
            check_hits: Cell::new(0),
            check_misses: Cell::new(0),
        }
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Replace the dictionary with one built from `aff` and `dic`.
    ///
    /// On error the current dictionary and caches are left untouched.
    pub fn load_dictionary(
        &mut self,
        aff: impl Into<Source>,
        dic: impl Into<Source>,
    ) -> Result<(), LoadError> {
        let dictionary =
            Dictionary::from_sources(aff.into(), dic.into(), self.options.affix_cache_capacity)?;
        self.install(dictionary);
        Ok(())
    }

    /// Replace the dictionary with one built from text. Cannot fail.
    pub fn load_text(&mut self, aff: &str, dic: &str) {
        let dictionary =
            Dictionary::from_text_with_cache(aff, dic, self.options.affix_cache_capacity);
        self.install(dictionary);
    }

    fn install(&mut self, dictionary: Dictionary) {
        tracing::debug!(
            words = dictionary.word_count(),
            flags = dictionary.affixes().flag_count(),
            "installed dictionary"
        );
        self.dictionary = dictionary;
        self.clear_caches();
    }

    // =========================================================================
    // Core methods
    // =========================================================================

    /// Whether `word` is spelled correctly. Empty words are not.
    pub fn check(&self, word: &str) -> bool {
        if let Some(&cached) = self.check_cache.borrow().get(word) {
            self.check_hits.set(self.check_hits.get() + 1);
            return cached;
        }
        self.check_misses.set(self.check_misses.get() + 1);

        let correct = self.dictionary.spell(word);
        self.check_cache
            .borrow_mut()
            .insert(word.to_string(), correct);
        correct
    }

    /// Ranked corrections for `word`, best first.
    ///
    /// Empty for correct or empty words. Suggestions follow the input's
    /// capitalization when it is `Capitalized` or `ALL CAPS`.
    #[cfg(feature = "suggest")]
    pub fn suggest(&self, word: &str) -> Vec<String> {
        if word.is_empty() || self.check(word) {
            return Vec::new();
        }
        if let Some(cached) = self.suggestion_cache.borrow().get(word) {
            return cached.clone();
        }

        let mut suggestions = suggestion::suggest(
            &self.dictionary,
            &self.strategy,
            word,
            self.options.max_suggestions,
        );
        let case = detect_case(word);
        if matches!(case, CaseType::FirstUpper | CaseType::AllUpper) {
            suggestions = suggestions.iter().map(|s| apply_case(s, case)).collect();
        }

        self.suggestion_cache
            .borrow_mut()
            .insert(word.to_string(), suggestions.clone());
        suggestions
    }

    // =========================================================================
    // Options and inspection
    // =========================================================================

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn options(&self) -> &SpellerOptions {
        &self.options
    }

    /// Change the suggestion limit. Cached suggestions are dropped.
    pub fn set_max_suggestions(&mut self, value: usize) {
        self.options.max_suggestions = value;
        #[cfg(feature = "suggest")]
        self.suggestion_cache.borrow_mut().clear();
    }

    /// Change how many completions each prefix contributes.
    #[cfg(feature = "suggest")]
    pub fn set_prefix_limit(&mut self, value: usize) {
        self.options.prefix_limit = value;
        self.strategy = default_strategy(value);
        self.suggestion_cache.borrow_mut().clear();
    }

    /// Drop all cached check and suggestion results.
    pub fn clear_caches(&self) {
        self.check_cache.borrow_mut().clear();
        #[cfg(feature = "suggest")]
        self.suggestion_cache.borrow_mut().clear();
        self.check_hits.set(0);
        self.check_misses.set(0);
    }

    pub fn cache_stats(&self) -> CacheStats {
        #[cfg(feature = "suggest")]
        let suggestion_entries = self.suggestion_cache.borrow().len();
        #[cfg(not(feature = "suggest"))]
        let suggestion_entries = 0;
        CacheStats {
            check_entries: self.check_cache.borrow().len(),
            suggestion_entries,
            affix_entries: self.dictionary.affixes().cached_reductions(),
            check_hits: self.check_hits.get(),
            check_misses: self.check_misses.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceError;

    const AFF: &str = "SFX S Y 1\nSFX S 0 s [^s]\nREP 1\nREP ie ei\n";
    const DIC: &str = "4\nhello/S\nworld\nreceive\ngb\n";

    fn checker() -> SpellChecker {
        SpellChecker::from_text(AFF, DIC)
    }

    #[test]
    fn empty_checker() {
        let checker = SpellChecker::new();
        assert!(!checker.check("hello"));
        assert!(checker.dictionary().is_empty());
        #[cfg(feature = "suggest")]
        assert!(checker.suggest("helo").is_empty());
    }

    #[test]
    fn check_uses_the_cache() {
        let checker = checker();
        assert!(checker.check("hello"));
        assert!(checker.check("hello"));
        assert!(!checker.check("helo"));
        let stats = checker.cache_stats();
        assert_eq!(stats.check_entries, 2);
        assert_eq!(stats.check_hits, 1);
        assert_eq!(stats.check_misses, 2);
    }

    #[test]
    fn cache_key_is_the_original_word() {
        let checker = checker();
        assert!(checker.check("Hello"));
        assert!(checker.check("hello"));
        assert_eq!(checker.cache_stats().check_entries, 2);
    }

    #[test]
    fn empty_word() {
        let checker = checker();
        assert!(!checker.check(""));
        #[cfg(feature = "suggest")]
        assert!(checker.suggest("").is_empty());
    }

    #[test]
    #[cfg(feature = "suggest")]
    fn correct_words_get_no_suggestions() {
        let checker = checker();
        assert!(checker.suggest("hellos").is_empty());
        assert!(checker.suggest("42").is_empty());
    }

    #[test]
    #[cfg(feature = "suggest")]
    fn suggestions_follow_input_case() {
        let checker = checker();
        assert!(checker.suggest("Helo").contains(&"Hello".to_string()));
        assert!(checker.suggest("HELO").contains(&"HELLO".to_string()));
        assert!(checker.suggest("helo").contains(&"hello".to_string()));
    }

    #[test]
    #[cfg(feature = "suggest")]
    fn suggestion_checks_bypass_check_cache() {
        let checker = checker();
        checker.suggest("wrld");
        // only "wrld" itself went through the cached path
        assert_eq!(checker.cache_stats().check_entries, 1);
        assert_eq!(checker.cache_stats().suggestion_entries, 1);
    }

    #[test]
    #[cfg(feature = "suggest")]
    fn suggest_is_idempotent() {
        let checker = checker();
        let first = checker.suggest("recieve");
        assert_eq!(checker.suggest("recieve"), first);
        assert_eq!(first[0], "receive");
    }

    #[test]
    #[cfg(feature = "suggest")]
    fn max_suggestions_is_respected() {
        let mut checker = checker();
        checker.set_max_suggestions(1);
        assert!(checker.suggest("helo").len() <= 1);
        checker.set_max_suggestions(0);
        assert!(checker.suggest("helo").is_empty());
    }

    #[test]
    fn reload_replaces_dictionary_and_clears_caches() {
        let mut checker = checker();
        assert!(checker.check("hello"));
        assert!(!checker.check("bonjour"));
        checker.load_dictionary("", "1\nbonjour\n").unwrap();
        assert_eq!(checker.cache_stats().check_entries, 0);
        assert!(checker.check("bonjour"));
        assert!(!checker.check("hello"));
    }

    #[test]
    fn failed_reload_keeps_previous_state() {
        let mut checker = checker();
        assert!(checker.check("hello"));
        let err = checker
            .load_dictionary(
                Source::from(AFF),
                Source::provider(|| Err(SourceError::Provider("network down".into()))),
            )
            .unwrap_err();
        assert!(matches!(err, LoadError::Dictionary(_)));
        assert!(checker.check("hello"));
        assert_eq!(checker.cache_stats().check_entries, 1);
    }

    #[test]
    #[cfg(feature = "suggest")]
    fn clear_caches_resets_stats() {
        let checker = checker();
        checker.check("world");
        checker.suggest("wrld");
        checker.clear_caches();
        assert_eq!(checker.cache_stats(), CacheStats {
            affix_entries: checker.dictionary().affixes().cached_reductions(),
            ..CacheStats::default()
        });
    }

    #[test]
    fn small_caches_stay_bounded() {
        let options = SpellerOptions {
            check_cache_capacity: 5,
            ..SpellerOptions::default()
        };
        let mut checker = SpellChecker::with_options(options);
        checker.load_text(AFF, DIC);
        for i in 0..50 {
            checker.check(&format!("word{i}"));
        }
        assert!(checker.cache_stats().check_entries <= 5);
    }

    #[test]
    fn from_sources_accepts_bytes() {
        let checker = SpellChecker::from_sources(AFF.as_bytes().to_vec(), DIC).unwrap();
        assert!(checker.check("hellos"));
        assert!(checker.check("receive"));
    }
}
