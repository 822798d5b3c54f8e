// Membership check pipeline

use fastspell_core::character::lower_word;

use super::compound::matches_compound;
use super::special::is_special_token;
use crate::dictionary::Dictionary;
use crate::rules::convert;

/// The step that accepted a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
    /// Stored exactly as written (after input conversion).
    Exact,
    /// Stored in lower case.
    Lowercase,
    /// Number, literal, hash or quantity.
    Special,
    /// Reduces to a stored word by removing one affix.
    Affixed,
    /// Valid compound of stored parts.
    Compound,
}

/// Run the checks in order and report the first one that accepts `word`.
///
/// Steps: input conversion, exact lookup, lower-case lookup, special
/// tokens, affix reduction, compound rules. Nothing here is cached except
/// the affix reductions inside the rule set.
pub fn check_word(dictionary: &Dictionary, word: &str) -> Option<Acceptance> {
    if word.is_empty() {
        return None;
    }
    let word = convert(dictionary.conversions(), word);
    let words = dictionary.words();

    if words.contains_exact(&word) {
        return Some(Acceptance::Exact);
    }
    let lower = lower_word(&word);
    if words.contains_exact(&lower) {
        return Some(Acceptance::Lowercase);
    }
    if is_special_token(&word, |unit| words.contains_exact(unit)) {
        return Some(Acceptance::Special);
    }
    if dictionary
        .affixes()
        .reduce_to_base_forms(&lower)
        .iter()
        .any(|base| words.contains_exact(base))
    {
        return Some(Acceptance::Affixed);
    }
    if matches_compound(
        &lower,
        dictionary.compound_parts(),
        dictionary.compound_rules(),
        dictionary.compound_min(),
    ) {
        return Some(Acceptance::Compound);
    }
    None
}
