// Suggestion status tracking: candidates, deduplication and cost

use fastspell_core::character::lower_word;
use hashbrown::HashSet;

/// Which generator produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateOrigin {
    /// A `REP` substitution. Ranked ahead of everything else.
    Replacement,
    /// A single-character edit.
    Edit,
    /// A stored word sharing a prefix with the input.
    Completion,
    /// A stored word reached through a commonly confused letter.
    Confusion,
    /// An affixed form of the input or of one of its base forms.
    AffixVariant,
}

/// A verified candidate, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub word: String,
    pub origin: CandidateOrigin,
}

/// State of one suggestion run.
///
/// Holds the lower-cased input, the edit alphabet and every verified
/// candidate. Each check made while generating increments the cost
/// counter through [`charge`](Self::charge).
pub struct SuggestionStatus {
    word: String,
    chars: Vec<char>,
    max_suggestions: usize,
    alphabet: Vec<char>,
    cost: usize,
    candidates: Vec<Candidate>,
    seen: HashSet<String>,
}

impl SuggestionStatus {
    pub fn new(original: &str, max_suggestions: usize) -> Self {
        let word = lower_word(original);
        let chars = word.chars().collect();
        let mut seen = HashSet::new();
        seen.insert(word.clone());
        Self {
            word,
            chars,
            max_suggestions,
            alphabet: Vec::new(),
            cost: 0,
            candidates: Vec::new(),
            seen,
        }
    }

    /// Use `a..z` followed by the lower-cased characters of `extra` that
    /// are not already present.
    pub fn with_try_chars(mut self, extra: &str) -> Self {
        let mut alphabet: Vec<char> = ('a'..='z').collect();
        for c in lower_word(extra).chars() {
            if !alphabet.contains(&c) {
                alphabet.push(c);
            }
        }
        self.alphabet = alphabet;
        self
    }

    /// The lower-cased word being corrected.
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    pub fn max_suggestion_count(&self) -> usize {
        self.max_suggestions
    }

    /// Count one check.
    pub fn charge(&mut self) {
        self.cost += 1;
    }

    pub fn cost(&self) -> usize {
        self.cost
    }

    /// Whether `word` was already recorded (or is the input itself).
    pub fn has_seen(&self, word: &str) -> bool {
        self.seen.contains(word)
    }

    /// Record a verified candidate. Duplicates and the input word are
    /// ignored; the first origin wins.
    pub fn add_candidate(&mut self, word: String, origin: CandidateOrigin) {
        if !self.seen.insert(word.clone()) {
            return;
        }
        self.candidates.push(Candidate { word, origin });
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Number of candidates that came from `REP` rules.
    pub fn replacement_count(&self) -> usize {
        self.candidates
            .iter()
            .filter(|c| c.origin == CandidateOrigin::Replacement)
            .count()
    }

    pub fn into_candidates(self) -> Vec<Candidate> {
        self.candidates
    }
}
