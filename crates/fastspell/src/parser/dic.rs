// Dictionary file (.dic) parser

use fastspell_core::character::lower_word;
use hashbrown::{HashMap, HashSet};

use super::aff::AffixData;
use crate::trie::PrefixTree;

/// Everything read from a dictionary file.
#[derive(Debug, Default)]
pub struct DicData {
    /// Stem words and every surface form their flags produce.
    pub words: PrefixTree,
    /// Compound-rule flags of words usable as compound parts.
    pub compound_parts: HashMap<String, Vec<char>>,
    /// Words (and their affixed forms) never offered as suggestions.
    pub no_suggest: HashSet<String>,
    /// Word count declared on the first line, if there was one.
    pub declared_count: Option<usize>,
    /// Entry lines actually read.
    pub entry_count: usize,
}

/// Parse dictionary text, expanding each entry's flags with `affix`.
pub fn parse_dic(text: &str, affix: &AffixData) -> DicData {
    let mut data = DicData::default();
    let compound_flags: HashSet<char> = affix
        .compound_rules
        .iter()
        .flat_map(|rule| rule.flag_chars())
        .collect();

    let mut first = true;
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if first {
            first = false;
            if let Ok(count) = line.parse::<usize>() {
                data.declared_count = Some(count);
                continue;
            }
        }
        if line.starts_with('#') {
            continue;
        }
        let Some(token) = line.split_whitespace().next() else {
            continue;
        };
        let (word, flags) = token.split_once('/').unwrap_or((token, ""));
        if word.is_empty() {
            continue;
        }
        data.entry_count += 1;
        add_entry(&mut data, affix, &compound_flags, &lower_word(word), flags);
    }

    if let Some(declared) = data.declared_count {
        if declared != data.entry_count {
            tracing::debug!(declared, actual = data.entry_count, "dictionary word count differs from header");
        }
    }
    tracing::debug!(
        entries = data.entry_count,
        words = data.words.len(),
        compound_parts = data.compound_parts.len(),
        "parsed dictionary"
    );
    data
}

fn add_entry(
    data: &mut DicData,
    affix: &AffixData,
    compound_flags: &HashSet<char>,
    word: &str,
    flags: &str,
) {
    let has_flag = |flag: Option<char>| flag.is_some_and(|f| flags.contains(f));

    let part_flags: Vec<char> = flags.chars().filter(|c| compound_flags.contains(c)).collect();
    if !part_flags.is_empty() {
        let known = data.compound_parts.entry(word.to_string()).or_default();
        for flag in part_flags {
            if !known.contains(&flag) {
                known.push(flag);
            }
        }
    }

    let mut forms = vec![word.to_string()];
    let flag_names: Vec<String> = flags.chars().map(String::from).collect();
    for flag in &flag_names {
        forms.extend(affix.rules.expand_with_flag(word, flag));
    }
    let flag_refs: Vec<&str> = flag_names.iter().map(String::as_str).collect();
    forms.extend(affix.rules.cross_expand(word, &flag_refs));

    // Compound-only parts still check on their own but are never offered.
    let no_suggest = has_flag(affix.no_suggest) || has_flag(affix.only_in_compound);
    for form in forms {
        data.words.insert(&form);
        if no_suggest {
            data.no_suggest.insert(form);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_aff;

    const AFF: &str = "\
SFX S Y 2
SFX S 0 s [^sxzh]
SFX S 0 es [sxzh]
PFX U Y 1
PFX U 0 un .
ONLYINCOMPOUND c
NOSUGGEST !
COMPOUNDRULE n*1t
";

    #[test]
    fn expands_flags() {
        let affix = parse_aff(AFF);
        let dic = parse_dic("3\ncat/S\nbox/S\nlock/SU\n", &affix);
        for word in ["cat", "cats", "box", "boxes", "lock", "locks", "unlock", "unlocks"] {
            assert!(dic.words.contains(word), "{word}");
        }
        assert!(!dic.words.contains("boxs"));
        assert_eq!(dic.declared_count, Some(3));
        assert_eq!(dic.entry_count, 3);
    }

    #[test]
    fn words_are_lowercased() {
        let affix = parse_aff("");
        let dic = parse_dic("1\nParis\n", &affix);
        assert!(dic.words.contains_exact("paris"));
    }

    #[test]
    fn count_line_is_advisory() {
        let affix = parse_aff("");
        let dic = parse_dic("hello\nworld\n", &affix);
        assert_eq!(dic.declared_count, None);
        assert!(dic.words.contains("hello"));
        assert!(dic.words.contains("world"));

        let dic = parse_dic("10\nhello\n", &affix);
        assert_eq!(dic.entry_count, 1);
    }

    #[test]
    fn morphology_fields_and_comments_are_ignored() {
        let affix = parse_aff("");
        let dic = parse_dic("2\nrun/S po:verb st:run\n# comment\n\n  walk  \n", &affix);
        assert!(dic.words.contains("run"));
        assert!(dic.words.contains("walk"));
        assert!(!dic.words.contains("po:verb"));
        assert_eq!(dic.entry_count, 2);
    }

    #[test]
    fn unknown_flags_are_harmless() {
        let affix = parse_aff(AFF);
        let dic = parse_dic("1\ndog/XYZ\n", &affix);
        assert!(dic.words.contains("dog"));
        assert_eq!(dic.words.len(), 1);
    }

    #[test]
    fn compound_only_words_are_stored_but_not_suggested() {
        let affix = parse_aff(AFF);
        let dic = parse_dic("3\n0/n1\n1/n1\nth/tc\n", &affix);
        assert!(dic.words.contains("th"));
        assert!(dic.no_suggest.contains("th"));
        assert!(dic.words.contains("1"));
        assert!(!dic.no_suggest.contains("1"));
        assert_eq!(dic.compound_parts.get("th"), Some(&vec!['t']));
        assert_eq!(dic.compound_parts.get("1"), Some(&vec!['n', '1']));
    }

    #[test]
    fn no_suggest_words_are_recorded_with_forms() {
        let affix = parse_aff(AFF);
        let dic = parse_dic("1\ndamn/S!\n", &affix);
        assert!(dic.words.contains("damn"));
        assert!(dic.no_suggest.contains("damn"));
        assert!(dic.no_suggest.contains("damns"));
    }
}
