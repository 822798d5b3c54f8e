// Candidate ranking

use fastspell_core::distance::levenshtein_chars;

use super::status::{Candidate, CandidateOrigin};

/// Largest edit distance accepted for a word of `len` characters:
/// `ceil(0.7 * len)`.
pub fn max_distance(len: usize) -> usize {
    (len * 7).div_ceil(10)
}

/// Whether the candidate starts like the word: the word's first or second
/// letter occurs in the candidate's first two letters, or the word starts
/// with the candidate's second letter.
pub fn shares_prefix_letter(word: &[char], candidate: &[char]) -> bool {
    let Some(&first) = word.first() else {
        return false;
    };
    let head = &candidate[..candidate.len().min(2)];
    head.contains(&first)
        || word.get(1).is_some_and(|second| head.contains(second))
        || candidate.get(1) == Some(&first)
}

/// Order candidates for presentation.
///
/// Replacement candidates come first, in discovery order. The rest must
/// have a length within `[len - 2, len + 3]`, share a leading letter with
/// the word and lie within [`max_distance`]; they are sorted by distance,
/// then same first letter, then length difference, then discovery order.
pub fn rank(word: &str, candidates: Vec<Candidate>) -> Vec<String> {
    let word_chars: Vec<char> = word.chars().collect();
    let len = word_chars.len();
    let limit = max_distance(len);

    let mut ranked = Vec::new();
    let mut scored = Vec::new();
    for candidate in candidates {
        if candidate.origin == CandidateOrigin::Replacement {
            ranked.push(candidate.word);
            continue;
        }
        let chars: Vec<char> = candidate.word.chars().collect();
        if chars.len() + 2 < len || chars.len() > len + 3 {
            continue;
        }
        if !shares_prefix_letter(&word_chars, &chars) {
            continue;
        }
        let distance = levenshtein_chars(&word_chars, &chars);
        if distance > limit {
            continue;
        }
        let different_first = chars.first() != word_chars.first();
        let length_gap = chars.len().abs_diff(len);
        scored.push((distance, different_first, length_gap, candidate.word));
    }

    // Stable sort keeps discovery order among equal keys.
    scored.sort_by_key(|(distance, different_first, gap, _)| (*distance, *different_first, *gap));
    ranked.extend(scored.into_iter().map(|(.., word)| word));
    ranked
}
