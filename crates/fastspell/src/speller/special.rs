// Tokens accepted without a dictionary entry: numbers, hex and binary
// literals, hashes and quantities with units

use fastspell_core::character::{all_chars, is_binary_digit, lower_word};

/// Shortest and longest bare hex strings (short hashes up to SHA-1).
const HEX_RUN: std::ops::RangeInclusive<usize> = 7..=40;

/// Whether `word` is a number-like token.
///
/// `is_word` is asked about the unit of a quantity such as `100GB`
/// (lower-cased letters after the digits).
pub fn is_special_token(word: &str, is_word: impl Fn(&str) -> bool) -> bool {
    if all_chars(word, |c| c.is_ascii_digit()) {
        return true;
    }
    if let Some(hex) = word.strip_prefix("0x") {
        if all_chars(hex, |c| c.is_ascii_hexdigit()) {
            return true;
        }
    }
    if let Some(bits) = word.strip_prefix("0b") {
        if all_chars(bits, is_binary_digit) {
            return true;
        }
    }
    if HEX_RUN.contains(&word.chars().count()) && all_chars(word, |c| c.is_ascii_hexdigit()) {
        return true;
    }
    is_quantity(word, is_word)
}

/// Digits followed by a known unit word.
fn is_quantity(word: &str, is_word: impl Fn(&str) -> bool) -> bool {
    let split = word.find(|c: char| !c.is_ascii_digit()).unwrap_or(word.len());
    if split == 0 || split == word.len() {
        return false;
    }
    let unit = &word[split..];
    all_chars(unit, |c| c.is_ascii_alphabetic()) && is_word(&lower_word(unit))
}
