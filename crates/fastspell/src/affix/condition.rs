// Affix entry conditions

use fastspell_core::AffixKind;
use regex::Regex;

/// Constraint on the base word an affix entry may attach to.
///
/// Conditions are regular expressions anchored at the end of the word the
/// affix works on: the start of the base for prefixes, the end of the base
/// for suffixes. A pattern that fails to compile never matches.
#[derive(Debug, Clone)]
pub enum Condition {
    /// Empty or `.` condition.
    Always,
    Pattern(Regex),
    /// The condition text was not a valid pattern.
    Never,
}

impl Condition {
    /// Compile a condition from affix-file text for the given affix kind.
    pub fn compile(text: &str, kind: AffixKind) -> Self {
        if text.is_empty() || text == "." {
            return Self::Always;
        }
        let anchored = match kind {
            AffixKind::Prefix => format!("^(?:{text})"),
            AffixKind::Suffix => format!("(?:{text})$"),
        };
        match Regex::new(&anchored) {
            Ok(regex) => Self::Pattern(regex),
            Err(err) => {
                tracing::debug!(condition = text, %err, "affix condition never matches");
                Self::Never
            }
        }
    }

    /// Whether `word` satisfies the condition.
    pub fn matches(&self, word: &str) -> bool {
        match self {
            Self::Always => true,
            Self::Pattern(regex) => regex.is_match(word),
            Self::Never => false,
        }
    }
}
