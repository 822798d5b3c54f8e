// Suggestion generation and ranking

pub mod generators;
pub mod ranking;
pub mod status;
pub mod strategy;

use crate::speller::Speller;

pub use generators::SuggestionGenerator;
pub use status::{Candidate, CandidateOrigin, SuggestionStatus};
pub use strategy::{SuggestionStrategy, default_strategy};

/// Corrections for a misspelled `word`, best first, at most `max`.
///
/// Works on the lower-cased word and returns lower-case suggestions. The
/// caller decides whether the word needed correcting in the first place.
pub fn suggest(
    speller: &dyn Speller,
    strategy: &SuggestionStrategy,
    word: &str,
    max: usize,
) -> Vec<String> {
    if word.is_empty() || max == 0 {
        return Vec::new();
    }

    let mut status = SuggestionStatus::new(word, max).with_try_chars(speller.try_chars());
    let replacements_suffice = strategy.generate(speller, &mut status);
    tracing::trace!(
        word,
        cost = status.cost(),
        candidates = status.candidate_count(),
        replacements = status.replacement_count(),
        "generated suggestion candidates"
    );

    let lowered = status.word().to_string();
    let candidates = status.into_candidates();
    let mut ranked = if replacements_suffice {
        candidates.into_iter().map(|c| c.word).collect()
    } else {
        ranking::rank(&lowered, candidates)
    };
    ranked.retain(|w| speller.is_suggestible(w));
    ranked.truncate(max);
    ranked
}
