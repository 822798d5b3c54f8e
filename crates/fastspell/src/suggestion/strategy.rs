// Suggestion strategy: replacement rules first, edits and lexicon
// enrichment only when replacements are not enough

use super::generators::*;
use super::status::SuggestionStatus;
use crate::speller::Speller;
use crate::trie::DEFAULT_PREFIX_LIMIT;

/// Primary and secondary generator lists.
///
/// Primaries always run. If they already found at least
/// `max_suggestion_count` candidates the secondaries are skipped.
pub struct SuggestionStrategy {
    primary_generators: Vec<Box<dyn SuggestionGenerator>>,
    generators: Vec<Box<dyn SuggestionGenerator>>,
}

impl SuggestionStrategy {
    pub fn new(
        primary_generators: Vec<Box<dyn SuggestionGenerator>>,
        generators: Vec<Box<dyn SuggestionGenerator>>,
    ) -> Self {
        Self {
            primary_generators,
            generators,
        }
    }

    /// Run the generators. Returns `true` when the primaries alone
    /// produced enough candidates.
    pub fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus) -> bool {
        for generator in &self.primary_generators {
            generator.generate(speller, status);
        }
        if status.candidate_count() >= status.max_suggestion_count() {
            return true;
        }
        for generator in &self.generators {
            generator.generate(speller, status);
        }
        false
    }
}

impl Default for SuggestionStrategy {
    fn default() -> Self {
        default_strategy(DEFAULT_PREFIX_LIMIT)
    }
}

/// `REP` rules, then single edits, prefix completions, confusion
/// substitutions and affix variants.
pub fn default_strategy(prefix_limit: usize) -> SuggestionStrategy {
    SuggestionStrategy::new(
        vec![Box::new(ReplacementTable)],
        vec![
            Box::new(Deletion),
            Box::new(Substitution),
            Box::new(Insertion),
            Box::new(Transposition),
            Box::new(PrefixCompletion { limit: prefix_limit }),
            Box::new(ConfusionSubstitution { limit: prefix_limit }),
            Box::new(AffixVariants),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Everything;

    impl Speller for Everything {
        fn spell(&self, _word: &str) -> bool {
            true
        }
    }

    struct Nothing;

    impl Speller for Nothing {
        fn spell(&self, _word: &str) -> bool {
            false
        }
    }

    #[test]
    fn secondaries_skipped_when_primaries_suffice() {
        let strategy = SuggestionStrategy::new(vec![Box::new(Deletion)], vec![Box::new(Insertion)]);
        let mut status = SuggestionStatus::new("abcd", 3).with_try_chars("");
        assert!(strategy.generate(&Everything, &mut status));
        assert_eq!(status.candidate_count(), 4);
    }

    #[test]
    fn secondaries_run_otherwise() {
        let strategy = default_strategy(5);
        let mut status = SuggestionStatus::new("ab", 10).with_try_chars("");
        assert!(!strategy.generate(&Nothing, &mut status));
        assert_eq!(status.candidate_count(), 0);
        assert!(status.cost() > 0);
    }
}
