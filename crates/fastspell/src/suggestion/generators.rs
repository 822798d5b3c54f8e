// Individual suggestion generators: each applies one class of edit to the
// misspelled word and validates the candidates through the speller.

use super::status::{CandidateOrigin, SuggestionStatus};
use crate::speller::Speller;
use crate::trie::DEFAULT_PREFIX_LIMIT;

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// One class of candidate generation.
pub trait SuggestionGenerator {
    /// Add verified candidates for the word tracked by `status`.
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus);
}

/// Check `candidate` and record it if the speller accepts it.
pub fn suggest_candidate(
    speller: &dyn Speller,
    status: &mut SuggestionStatus,
    candidate: String,
    origin: CandidateOrigin,
) {
    if candidate.is_empty() || status.has_seen(&candidate) {
        return;
    }
    status.charge();
    if speller.spell(&candidate) {
        status.add_candidate(candidate, origin);
    }
}

// ---------------------------------------------------------------------------
// Replacement (REP)
// ---------------------------------------------------------------------------

/// Applies each `REP` rule at one match position at a time.
///
/// A replacement that introduces a space is accepted when every resulting
/// word checks.
pub struct ReplacementTable;

impl SuggestionGenerator for ReplacementTable {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus) {
        let word = status.word().to_string();
        for rule in speller.replacements() {
            for candidate in rule.candidates(&word) {
                if candidate.is_empty() || status.has_seen(&candidate) {
                    continue;
                }
                status.charge();
                if candidate.split(' ').all(|part| !part.is_empty() && speller.spell(part)) {
                    status.add_candidate(candidate, CandidateOrigin::Replacement);
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Single-character edits
// ---------------------------------------------------------------------------

/// Removes one character.
pub struct Deletion;

impl SuggestionGenerator for Deletion {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus) {
        let chars = status.chars().to_vec();
        for i in 0..chars.len() {
            let candidate: String = chars[..i].iter().chain(&chars[i + 1..]).collect();
            suggest_candidate(speller, status, candidate, CandidateOrigin::Edit);
        }
    }
}

/// Replaces one character with each alphabet character.
pub struct Substitution;

impl SuggestionGenerator for Substitution {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus) {
        let mut chars = status.chars().to_vec();
        let alphabet = status.alphabet().to_vec();
        for i in 0..chars.len() {
            let original = chars[i];
            for &c in &alphabet {
                if c == original {
                    continue;
                }
                chars[i] = c;
                suggest_candidate(speller, status, chars.iter().collect(), CandidateOrigin::Edit);
            }
            chars[i] = original;
        }
    }
}

/// Inserts each alphabet character at each position.
pub struct Insertion;

impl SuggestionGenerator for Insertion {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus) {
        let chars = status.chars().to_vec();
        let alphabet = status.alphabet().to_vec();
        for i in 0..=chars.len() {
            for &c in &alphabet {
                let candidate: String = chars[..i]
                    .iter()
                    .chain(std::iter::once(&c))
                    .chain(&chars[i..])
                    .collect();
                suggest_candidate(speller, status, candidate, CandidateOrigin::Edit);
            }
        }
    }
}

/// Swaps two adjacent characters.
pub struct Transposition;

impl SuggestionGenerator for Transposition {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus) {
        let chars = status.chars().to_vec();
        for candidate in transpositions(&chars) {
            suggest_candidate(speller, status, candidate, CandidateOrigin::Edit);
        }
    }
}

/// Every distinct adjacent swap of `chars`.
fn transpositions(chars: &[char]) -> Vec<String> {
    let mut out = Vec::new();
    let mut buffer = chars.to_vec();
    for i in 1..buffer.len() {
        if buffer[i - 1] == buffer[i] {
            continue;
        }
        buffer.swap(i - 1, i);
        out.push(buffer.iter().collect());
        buffer.swap(i - 1, i);
    }
    out
}

// ---------------------------------------------------------------------------
// Lexicon-driven enrichment
// ---------------------------------------------------------------------------

/// Stored words that continue a prefix of the input, of the input with its
/// last two prefix characters swapped, or of a transposed input.
pub struct PrefixCompletion {
    pub limit: usize,
}

impl Default for PrefixCompletion {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PREFIX_LIMIT,
        }
    }
}

impl SuggestionGenerator for PrefixCompletion {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus) {
        let chars = status.chars().to_vec();
        let mut prefixes: Vec<String> = Vec::new();
        for i in 1..=chars.len() {
            let mut prefix = chars[..i].to_vec();
            prefixes.push(prefix.iter().collect());
            if i > 1 && prefix[i - 2] != prefix[i - 1] {
                prefix.swap(i - 2, i - 1);
                prefixes.push(prefix.iter().collect());
            }
        }
        prefixes.extend(transpositions(&chars));

        for prefix in &prefixes {
            for word in speller.words_with_prefix(prefix, self.limit) {
                suggest_candidate(speller, status, word, CandidateOrigin::Completion);
            }
        }
    }
}

/// Letters and digraphs commonly written in place of one another.
const CONFUSIONS: &[(&str, &[&str])] = &[
    ("a", &["e"]),
    ("e", &["a", "i"]),
    ("i", &["e", "y"]),
    ("o", &["a", "u"]),
    ("u", &["o"]),
    ("y", &["i"]),
    ("s", &["z"]),
    ("z", &["s"]),
    ("c", &["k", "s"]),
    ("k", &["c"]),
    ("f", &["ph"]),
    ("ph", &["f"]),
];

/// Swaps one commonly confused letter or digraph, then looks up stored
/// words continuing the result, with and without one extra inserted
/// character. Reaches corrections two edits away such as
/// `grafic` -> `graphic` and `kat` -> `cart`.
pub struct ConfusionSubstitution {
    pub limit: usize,
}

impl Default for ConfusionSubstitution {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PREFIX_LIMIT,
        }
    }
}

impl SuggestionGenerator for ConfusionSubstitution {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus) {
        let alphabet = status.alphabet().to_vec();
        for variant in confusion_variants(status.word()) {
            let chars: Vec<char> = variant.chars().collect();
            let mut prefixes = vec![variant];
            for i in 0..=chars.len() {
                for &c in &alphabet {
                    prefixes.push(
                        chars[..i]
                            .iter()
                            .chain(std::iter::once(&c))
                            .chain(&chars[i..])
                            .collect(),
                    );
                }
            }
            for prefix in &prefixes {
                for word in speller.words_with_prefix(prefix, self.limit) {
                    suggest_candidate(speller, status, word, CandidateOrigin::Confusion);
                }
            }
        }
    }
}

/// Every distinct single confusion swap of `word`, in position order.
fn confusion_variants(word: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for (i, _) in word.char_indices() {
        let (head, tail) = word.split_at(i);
        for (from, replacements) in CONFUSIONS {
            let Some(rest) = tail.strip_prefix(from) else {
                continue;
            };
            for to in *replacements {
                let variant = format!("{head}{to}{rest}");
                if variant != word && !out.contains(&variant) {
                    out.push(variant);
                }
            }
        }
    }
    out
}

/// Affixed forms of the input and of its candidate base forms.
pub struct AffixVariants;

impl SuggestionGenerator for AffixVariants {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus) {
        let word = status.word().to_string();
        let mut forms = speller.surface_forms(&word);
        for base in speller.base_forms(&word) {
            forms.extend(speller.surface_forms(&base));
        }
        for form in forms {
            suggest_candidate(speller, status, form, CandidateOrigin::AffixVariant);
        }
    }
}
