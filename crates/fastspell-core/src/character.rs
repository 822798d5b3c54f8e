// Character case mapping and digit classes

/// Lowercase a single character, keeping only the first character of
/// multi-character expansions.
pub fn simple_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Uppercase a single character, keeping only the first character of
/// multi-character expansions.
pub fn simple_upper(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

/// Whether `c` is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c != simple_lower(c)
}

/// Whether `c` is a lowercase letter.
pub fn is_lower(c: char) -> bool {
    c != simple_upper(c)
}

/// Whether `c` is `0` or `1`.
pub fn is_binary_digit(c: char) -> bool {
    matches!(c, '0' | '1')
}

/// Whether every character of a non-empty string satisfies `pred`.
pub fn all_chars(s: &str, pred: impl Fn(char) -> bool) -> bool {
    !s.is_empty() && s.chars().all(pred)
}

/// Lowercase a whole word with the same one-to-one mapping as
/// [`simple_lower`], so character counts never change.
pub fn lower_word(word: &str) -> String {
    word.chars().map(simple_lower).collect()
}
