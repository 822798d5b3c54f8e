// Immutable dictionary: word store, affix rules and auxiliary tables

use hashbrown::{HashMap, HashSet};

use crate::affix::{AffixRuleSet, DEFAULT_AFFIX_CACHE_CAPACITY};
use crate::error::LoadError;
use crate::parser::{AffixData, DicData, parse_aff_with_capacity, parse_dic};
use crate::rules::{CompoundRule, ConversionRule, ReplacementRule};
use crate::source::Source;
use crate::speller::{Speller, check_word};
use crate::trie::PrefixTree;

/// A fully built dictionary. Never modified after construction; reloading
/// builds a new one.
#[derive(Debug, Default)]
pub struct Dictionary {
    words: PrefixTree,
    affixes: AffixRuleSet,
    replacements: Vec<ReplacementRule>,
    conversions: Vec<ConversionRule>,
    compound_rules: Vec<CompoundRule>,
    compound_parts: HashMap<String, Vec<char>>,
    compound_min: usize,
    try_chars: String,
    word_chars: String,
    no_suggest: HashSet<String>,
}

impl Dictionary {
    /// An empty dictionary: every check fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from affix and dictionary text.
    pub fn from_text(aff: &str, dic: &str) -> Self {
        Self::from_text_with_cache(aff, dic, DEFAULT_AFFIX_CACHE_CAPACITY)
    }

    /// Build from text with a custom affix reduction memo size.
    pub fn from_text_with_cache(aff: &str, dic: &str, affix_cache_capacity: usize) -> Self {
        let affix = parse_aff_with_capacity(aff, affix_cache_capacity);
        let entries = parse_dic(dic, &affix);
        Self::assemble(affix, entries)
    }

    /// Resolve both sources, then build. Nothing is built if either fails.
    pub fn from_sources(aff: Source, dic: Source, affix_cache_capacity: usize) -> Result<Self, LoadError> {
        let aff = aff.resolve().map_err(LoadError::Affix)?;
        let dic = dic.resolve().map_err(LoadError::Dictionary)?;
        Ok(Self::from_text_with_cache(&aff, &dic, affix_cache_capacity))
    }

    fn assemble(affix: AffixData, entries: DicData) -> Self {
        Self {
            words: entries.words,
            affixes: affix.rules,
            replacements: affix.replacements,
            conversions: affix.conversions,
            compound_rules: affix.compound_rules,
            compound_parts: entries.compound_parts,
            compound_min: affix.compound_min,
            try_chars: affix.try_chars,
            word_chars: affix.word_chars,
            no_suggest: entries.no_suggest,
        }
    }

    pub fn words(&self) -> &PrefixTree {
        &self.words
    }

    pub fn affixes(&self) -> &AffixRuleSet {
        &self.affixes
    }

    pub fn conversions(&self) -> &[ConversionRule] {
        &self.conversions
    }

    pub fn compound_rules(&self) -> &[CompoundRule] {
        &self.compound_rules
    }

    pub fn compound_parts(&self) -> &HashMap<String, Vec<char>> {
        &self.compound_parts
    }

    /// Minimum compound part length (at least 1).
    pub fn compound_min(&self) -> usize {
        self.compound_min.max(1)
    }

    /// `WORDCHARS` from the affix file.
    ///
    /// Recorded for callers that split running text into words. Checking
    /// and suggesting take single words and do not consult it, like the
    /// informational `SET` and `FLAG` directives.
    pub fn word_chars(&self) -> &str {
        &self.word_chars
    }

    /// Number of distinct stored words, affixed forms included.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Speller for Dictionary {
    fn spell(&self, word: &str) -> bool {
        check_word(self, word).is_some()
    }

    fn replacements(&self) -> &[ReplacementRule] {
        &self.replacements
    }

    fn try_chars(&self) -> &str {
        &self.try_chars
    }

    fn words_with_prefix(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.words.words_with_prefix(prefix, limit)
    }

    fn base_forms(&self, word: &str) -> Vec<String> {
        self.affixes.reduce_to_base_forms(word)
    }

    fn surface_forms(&self, word: &str) -> Vec<String> {
        self.affixes.expand_to_surface_forms(word)
    }

    fn is_suggestible(&self, word: &str) -> bool {
        !self.no_suggest.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceError;

    #[test]
    fn empty_dictionary_rejects_everything() {
        let dict = Dictionary::empty();
        assert!(dict.is_empty());
        assert!(!dict.spell("hello"));
        assert!(!dict.spell(""));
        assert_eq!(dict.compound_min(), 1);
    }

    #[test]
    fn word_chars_are_informational() {
        let with = Dictionary::from_text("WORDCHARS 0123456789'\n", "1\nhello\n");
        let without = Dictionary::from_text("", "1\nhello\n");
        assert_eq!(with.word_chars(), "0123456789'");
        assert_eq!(without.word_chars(), "");
        for word in ["hello", "hello'", "hello1"] {
            assert_eq!(with.spell(word), without.spell(word), "{word}");
        }
    }

    #[test]
    fn built_from_text() {
        let dict = Dictionary::from_text("SFX S Y 1\nSFX S 0 s .\nTRY abc\nREP ie ei\n", "2\nhello/S\nworld\n");
        assert_eq!(dict.word_count(), 3);
        assert!(dict.spell("hellos"));
        assert!(dict.spell("World"));
        assert_eq!(dict.try_chars(), "abc");
        assert_eq!(dict.replacements().len(), 1);
        assert_eq!(dict.words_with_prefix("hel", 5), vec!["hello", "hellos"]);
    }

    #[test]
    fn failing_source_builds_nothing() {
        let result = Dictionary::from_sources(
            Source::from("SFX S Y 0\n"),
            Source::provider(|| Err(SourceError::Provider("gone".into()))),
            16,
        );
        assert!(matches!(result, Err(LoadError::Dictionary(_))));

        let result = Dictionary::from_sources(Source::from(vec![0xc3, 0x28]), Source::from("1\nx\n"), 16);
        assert!(matches!(result, Err(LoadError::Affix(SourceError::InvalidUtf8(_)))));
    }

    #[test]
    fn no_suggest_words_are_not_suggestible() {
        let dict = Dictionary::from_text("NOSUGGEST !\n", "2\nheck/!\nhello\n");
        assert!(dict.spell("heck"));
        assert!(!dict.is_suggestible("heck"));
        assert!(dict.is_suggestible("hello"));
    }
}
