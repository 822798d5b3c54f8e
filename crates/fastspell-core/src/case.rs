// Case pattern detection and restoration

use crate::character::{is_lower, is_upper, simple_lower, simple_upper};

/// Letter-case pattern of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// No letters at all: "123", "--".
    NoLetters,
    /// Every letter lowercase: "hello".
    AllLower,
    /// First letter uppercase, the rest lowercase: "Hello".
    FirstUpper,
    /// Anything else: "hELLo", "McDonald".
    Complex,
    /// Every letter uppercase: "HELLO".
    AllUpper,
}

/// Classify the case pattern of `word`. Non-letters are ignored.
pub fn detect_case(word: &str) -> CaseType {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return CaseType::NoLetters;
    };

    let first_upper = is_upper(first);
    let mut no_letters = !first_upper && !is_lower(first);
    let mut all_upper = !is_lower(first);
    let mut rest_lower = true;

    for c in chars {
        if is_upper(c) {
            no_letters = false;
            rest_lower = false;
        }
        if is_lower(c) {
            no_letters = false;
            all_upper = false;
        }
    }

    if no_letters {
        CaseType::NoLetters
    } else if all_upper {
        CaseType::AllUpper
    } else if !rest_lower {
        CaseType::Complex
    } else if first_upper {
        CaseType::FirstUpper
    } else {
        CaseType::AllLower
    }
}

/// Rewrite `word` to follow `case_type`.
///
/// `NoLetters` and `Complex` leave the word untouched.
pub fn apply_case(word: &str, case_type: CaseType) -> String {
    match case_type {
        CaseType::NoLetters | CaseType::Complex => word.to_string(),
        CaseType::AllLower => word.chars().map(simple_lower).collect(),
        CaseType::AllUpper => word.chars().map(simple_upper).collect(),
        CaseType::FirstUpper => {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => std::iter::once(simple_upper(first))
                    .chain(chars.map(simple_lower))
                    .collect(),
                None => String::new(),
            }
        }
    }
}
