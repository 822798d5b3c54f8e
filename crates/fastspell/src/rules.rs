// Auxiliary affix-file rules: REP replacements, ICONV conversions and
// COMPOUNDRULE patterns

use regex::Regex;

/// A common-misspelling substitution (`REP from to`).
///
/// `from` is a regular expression; `_` in `to` stands for a space.
#[derive(Debug, Clone)]
pub struct ReplacementRule {
    pub from: String,
    pub to: String,
    pattern: Regex,
}

impl ReplacementRule {
    /// Compile a rule. Returns `None` if `from` is not a valid pattern.
    pub fn new(from: &str, to: &str) -> Option<Self> {
        let pattern = Regex::new(from).ok()?;
        Some(Self {
            from: from.to_string(),
            to: to.replace('_', " "),
            pattern,
        })
    }

    /// Whether the pattern occurs anywhere in `word`.
    pub fn applies_to(&self, word: &str) -> bool {
        self.pattern.is_match(word)
    }

    /// One rewritten word per (non-empty) match, replacing only that match.
    /// The first entry replaces the first match.
    pub fn candidates(&self, word: &str) -> Vec<String> {
        self.pattern
            .find_iter(word)
            .filter(|m| !m.is_empty())
            .map(|m| format!("{}{}{}", &word[..m.start()], self.to, &word[m.end()..]))
            .collect()
    }
}

/// Input character conversion (`ICONV from to`), applied literally to
/// every occurrence before a word is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRule {
    pub from: String,
    pub to: String,
}

impl ConversionRule {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub fn apply(&self, word: &str) -> String {
        if self.from.is_empty() {
            return word.to_string();
        }
        word.replace(&self.from, &self.to)
    }
}

/// Apply every conversion in order.
pub fn convert(rules: &[ConversionRule], word: &str) -> String {
    rules
        .iter()
        .fold(word.to_string(), |acc, rule| rule.apply(&acc))
}

/// A `COMPOUNDRULE` pattern: a regular expression over single-character
/// flags describing which sequences of word parts form a valid compound.
#[derive(Debug, Clone)]
pub struct CompoundRule {
    pub pattern: String,
    matcher: Regex,
}

impl CompoundRule {
    /// Compile a rule. Returns `None` if the pattern is invalid.
    pub fn new(pattern: &str) -> Option<Self> {
        let matcher = Regex::new(&format!("^(?:{pattern})$")).ok()?;
        Some(Self {
            pattern: pattern.to_string(),
            matcher,
        })
    }

    /// Whether a sequence of part flags (one flag per part) is accepted.
    pub fn matches_flags(&self, flags: &str) -> bool {
        self.matcher.is_match(flags)
    }

    /// Flag characters mentioned by the pattern.
    pub fn flag_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.pattern
            .chars()
            .filter(|c| !matches!(c, '*' | '?' | '+' | '(' | ')' | '|'))
    }
}
