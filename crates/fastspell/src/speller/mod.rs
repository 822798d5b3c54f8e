// Spell checking: the membership pipeline and the speller interface

pub mod compound;
pub mod pipeline;
pub mod special;

use crate::rules::ReplacementRule;

pub use pipeline::{Acceptance, check_word};

/// Anything that can decide whether a word is correct.
///
/// Suggestion generators validate their candidates through this trait. The
/// lexicon accessors have empty defaults so a plain word list can act as a
/// speller; [`Dictionary`](crate::Dictionary) overrides all of them.
pub trait Speller {
    /// Whether `word` is correct. Never consults a result cache.
    fn spell(&self, word: &str) -> bool;

    /// Common-misspelling substitutions.
    fn replacements(&self) -> &[ReplacementRule] {
        &[]
    }

    /// Extra characters to try in edits, most likely first.
    fn try_chars(&self) -> &str {
        ""
    }

    /// Stored words starting with `prefix`.
    fn words_with_prefix(&self, _prefix: &str, _limit: usize) -> Vec<String> {
        Vec::new()
    }

    /// Candidate base forms of an affixed word.
    fn base_forms(&self, _word: &str) -> Vec<String> {
        Vec::new()
    }

    /// `word` followed by its affixed forms.
    fn surface_forms(&self, word: &str) -> Vec<String> {
        vec![word.to_string()]
    }

    /// Whether `word` may be offered as a suggestion.
    fn is_suggestible(&self, _word: &str) -> bool {
        true
    }
}
