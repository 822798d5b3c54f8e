// Compound words: segmentation into dictionary parts matched against
// COMPOUNDRULE flag patterns

use hashbrown::HashMap;

use crate::rules::CompoundRule;

/// Upper bound on part/flag choices tried for one word.
const MAX_ATTEMPTS: usize = 10_000;

/// Whether `word` splits into two or more parts, each at least `min_len`
/// characters and listed in `parts`, such that choosing one compound flag
/// per part spells a sequence accepted by one of `rules`.
///
/// Positions from which no chain of parts reaches the end are pruned up
/// front, and every flag choice is charged against `MAX_ATTEMPTS`, so
/// the search stays bounded however many flags each part carries.
pub fn matches_compound(
    word: &str,
    parts: &HashMap<String, Vec<char>>,
    rules: &[CompoundRule],
    min_len: usize,
) -> bool {
    if word.is_empty() || parts.is_empty() || rules.is_empty() {
        return false;
    }
    let chars: Vec<char> = word.chars().collect();
    let min_len = min_len.max(1);
    let reaches_end = reachable_positions(&chars, parts, min_len);
    if !reaches_end[0] {
        return false;
    }
    let mut search = Segmentation {
        chars: &chars,
        parts,
        rules,
        min_len,
        reaches_end,
        flags: String::new(),
        part_count: 0,
        budget: MAX_ATTEMPTS,
    };
    search.extend_from(0)
}

/// `out[i]` is true when `chars[i..]` splits entirely into known parts.
fn reachable_positions(
    chars: &[char],
    parts: &HashMap<String, Vec<char>>,
    min_len: usize,
) -> Vec<bool> {
    let len = chars.len();
    let mut out = vec![false; len + 1];
    out[len] = true;
    for start in (0..len).rev() {
        let splits = ((start + min_len)..=len).any(|end| {
            out[end] && parts.contains_key(&chars[start..end].iter().collect::<String>())
        });
        out[start] = splits;
    }
    out
}

struct Segmentation<'a> {
    chars: &'a [char],
    parts: &'a HashMap<String, Vec<char>>,
    rules: &'a [CompoundRule],
    min_len: usize,
    reaches_end: Vec<bool>,
    /// One chosen flag per part so far.
    flags: String,
    part_count: usize,
    budget: usize,
}

impl Segmentation<'_> {
    fn extend_from(&mut self, start: usize) -> bool {
        if start == self.chars.len() {
            return self.part_count >= 2 && self.rules.iter().any(|rule| rule.matches_flags(&self.flags));
        }

        let parts = self.parts;
        for end in (start + self.min_len)..=self.chars.len() {
            if !self.reaches_end[end] {
                continue;
            }
            let part: String = self.chars[start..end].iter().collect();
            let Some(flags) = parts.get(&part) else {
                continue;
            };
            for &flag in flags {
                if self.budget == 0 {
                    return false;
                }
                self.budget -= 1;
                self.flags.push(flag);
                self.part_count += 1;
                let found = self.extend_from(end);
                self.flags.pop();
                self.part_count -= 1;
                if found {
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;

    fn ordinal_parts() -> HashMap<String, Vec<char>> {
        let mut parts = HashMap::new();
        for digit in ["0", "2", "3", "4", "5", "6", "7", "8", "9"] {
            parts.insert(digit.to_string(), vec!['n']);
        }
        parts.insert("1".to_string(), vec!['n', '1']);
        parts.insert("th".to_string(), vec!['t']);
        parts
    }

    fn rules(patterns: &[&str]) -> Vec<CompoundRule> {
        patterns.iter().filter_map(|p| CompoundRule::new(p)).collect()
    }

    #[test]
    fn ordinal_numbers() {
        let parts = ordinal_parts();
        let rules = rules(&["n*1t"]);
        assert!(matches_compound("1th", &parts, &rules, 1));
        assert!(matches_compound("11th", &parts, &rules, 1));
        assert!(matches_compound("2021th", &parts, &rules, 1));
        assert!(!matches_compound("12th", &parts, &rules, 1));
        assert!(!matches_compound("th", &parts, &rules, 1));
    }

    #[test]
    fn single_part_is_not_a_compound() {
        let mut parts = HashMap::new();
        parts.insert("sun".to_string(), vec!['a']);
        let rules = rules(&["a*"]);
        assert!(!matches_compound("sun", &parts, &rules, 1));
        assert!(matches_compound("sunsun", &parts, &rules, 1));
    }

    #[test]
    fn min_length_limits_parts() {
        let mut parts = HashMap::new();
        parts.insert("a".to_string(), vec!['x']);
        parts.insert("bc".to_string(), vec!['x']);
        let rules = rules(&["x+"]);
        assert!(matches_compound("abc", &parts, &rules, 1));
        assert!(!matches_compound("abc", &parts, &rules, 2));
    }

    fn digit_parts() -> HashMap<String, Vec<char>> {
        let mut parts = HashMap::new();
        for digit in 0..10 {
            parts.insert(digit.to_string(), vec!['n', 'm']);
        }
        parts.insert("th".to_string(), vec!['t']);
        parts
    }

    #[test]
    fn unreachable_tail_is_rejected_quickly() {
        let parts = digit_parts();
        let rules = rules(&["n*mp", "n*t"]);
        let word = format!("{}qq", "1".repeat(40));
        let started = Instant::now();
        assert!(!matches_compound(&word, &parts, &rules, 1));
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn attempts_are_bounded_when_no_rule_fits() {
        // every split is reachable but no flag sequence ends in `t`
        let parts = digit_parts();
        let rules = rules(&["n*t"]);
        let word = "1".repeat(40);
        let started = Instant::now();
        assert!(!matches_compound(&word, &parts, &rules, 1));
        assert!(started.elapsed() < Duration::from_secs(1));
        assert!(matches_compound("2021th", &parts, &rules, 1));
    }

    #[test]
    fn reachability_marks_splittable_suffixes() {
        let parts = digit_parts();
        let chars: Vec<char> = "12th".chars().collect();
        assert_eq!(reachable_positions(&chars, &parts, 1), vec![true, true, true, false, true]);
        let chars: Vec<char> = "1x".chars().collect();
        assert_eq!(reachable_positions(&chars, &parts, 1), vec![false, false, true]);
    }

    #[test]
    fn nothing_to_match_against() {
        let parts = ordinal_parts();
        assert!(!matches_compound("1th", &parts, &[], 1));
        assert!(!matches_compound("1th", &HashMap::new(), &rules(&["n*1t"]), 1));
        assert!(!matches_compound("", &parts, &rules(&["n*1t"]), 1));
    }
}
