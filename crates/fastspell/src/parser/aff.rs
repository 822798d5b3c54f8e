// Affix file (.aff) parser

use fastspell_core::AffixKind;

use crate::affix::{AffixEntry, AffixRule, AffixRuleSet, DEFAULT_AFFIX_CACHE_CAPACITY};
use crate::rules::{CompoundRule, ConversionRule, ReplacementRule};

/// Everything read from an affix file.
#[derive(Debug)]
pub struct AffixData {
    pub rules: AffixRuleSet,
    pub replacements: Vec<ReplacementRule>,
    pub conversions: Vec<ConversionRule>,
    pub compound_rules: Vec<CompoundRule>,
    /// Minimum length of a compound part in characters (at least 1).
    pub compound_min: usize,
    /// `TRY` characters, in file order.
    pub try_chars: String,
    pub word_chars: String,
    /// Flag marking words valid only inside compounds.
    pub only_in_compound: Option<char>,
    /// Flag marking words never offered as suggestions.
    pub no_suggest: Option<char>,
    /// Declared `SET` encoding. Text is always handled as UTF-8.
    pub encoding: Option<String>,
    /// Declared `FLAG` type. Only single-character flags are interpreted.
    pub flag_type: Option<String>,
    /// Unknown directives and malformed lines that were ignored.
    pub skipped_lines: usize,
}

impl Default for AffixData {
    fn default() -> Self {
        Self::with_cache_capacity(DEFAULT_AFFIX_CACHE_CAPACITY)
    }
}

impl AffixData {
    fn with_cache_capacity(capacity: usize) -> Self {
        Self {
            rules: AffixRuleSet::with_cache_capacity(capacity),
            replacements: Vec::new(),
            conversions: Vec::new(),
            compound_rules: Vec::new(),
            compound_min: 1,
            try_chars: String::new(),
            word_chars: String::new(),
            only_in_compound: None,
            no_suggest: None,
            encoding: None,
            flag_type: None,
            skipped_lines: 0,
        }
    }
}

/// A rule whose header has been read but whose entries are still arriving.
struct PendingRule {
    rule: AffixRule,
    remaining: usize,
}

/// Parse affix file text. Never fails: unusable lines are skipped.
pub fn parse_aff(text: &str) -> AffixData {
    parse_aff_with_capacity(text, DEFAULT_AFFIX_CACHE_CAPACITY)
}

/// Parse affix file text, sizing the rule set's reduction memo.
pub fn parse_aff_with_capacity(text: &str, cache_capacity: usize) -> AffixData {
    let mut data = AffixData::with_cache_capacity(cache_capacity);
    let mut pending: Option<PendingRule> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();

        if let Some(kind) = AffixKind::from_tag(fields[0]) {
            affix_line(&mut data, &mut pending, kind, &fields);
            continue;
        }

        let handled = match (fields[0], fields.len()) {
            ("REP", n) if n >= 3 => {
                match ReplacementRule::new(fields[1], fields[2]) {
                    Some(rule) => data.replacements.push(rule),
                    None => tracing::warn!(pattern = fields[1], "dropping invalid REP pattern"),
                }
                true
            }
            ("ICONV", n) if n >= 3 => {
                data.conversions.push(ConversionRule::new(fields[1], fields[2]));
                true
            }
            ("REP" | "ICONV", 2) => is_count(fields[1]),
            ("COMPOUNDRULE", 2) if is_count(fields[1]) => true,
            ("COMPOUNDRULE", n) if n >= 2 => {
                match CompoundRule::new(fields[1]) {
                    Some(rule) => data.compound_rules.push(rule),
                    None => {
                        tracing::warn!(pattern = fields[1], "dropping invalid COMPOUNDRULE pattern")
                    }
                }
                true
            }
            ("COMPOUNDMIN", n) if n >= 2 => {
                data.compound_min = fields[1].parse().ok().filter(|&min| min > 0).unwrap_or(1);
                true
            }
            ("TRY", n) if n >= 2 => {
                data.try_chars = fields[1].to_string();
                true
            }
            ("WORDCHARS", n) if n >= 2 => {
                data.word_chars = fields[1].to_string();
                true
            }
            ("ONLYINCOMPOUND", n) if n >= 2 => {
                data.only_in_compound = fields[1].chars().next();
                true
            }
            ("NOSUGGEST", n) if n >= 2 => {
                data.no_suggest = fields[1].chars().next();
                true
            }
            ("SET", n) if n >= 2 => {
                data.encoding = Some(fields[1].to_string());
                true
            }
            ("FLAG", n) if n >= 2 => {
                data.flag_type = Some(fields[1].to_string());
                true
            }
            _ => false,
        };
        if !handled {
            data.skipped_lines += 1;
        }
    }

    if let Some(p) = pending {
        tracing::debug!(flag = %p.rule.flag, missing = p.remaining, "dropping incomplete affix rule");
    }

    tracing::debug!(
        flags = data.rules.flag_count(),
        replacements = data.replacements.len(),
        compound_rules = data.compound_rules.len(),
        skipped = data.skipped_lines,
        "parsed affix data"
    );
    data
}

fn affix_line(
    data: &mut AffixData,
    pending: &mut Option<PendingRule>,
    kind: AffixKind,
    fields: &[&str],
) {
    if let Some(count) = header_count(fields) {
        if let Some(p) = pending.take() {
            tracing::debug!(flag = %p.rule.flag, missing = p.remaining, "dropping incomplete affix rule");
        }
        let rule = AffixRule::new(kind, fields[1], fields[2] == "Y");
        if count == 0 {
            data.rules.add_rule(rule);
        } else {
            *pending = Some(PendingRule { rule, remaining: count });
        }
        return;
    }

    let Some(p) = pending.as_mut() else {
        data.skipped_lines += 1;
        return;
    };
    if fields.len() < 4 || p.rule.kind != kind || p.rule.flag != fields[1] {
        data.skipped_lines += 1;
        return;
    }

    let strip = zero_as_empty(fields[2]);
    let add = zero_as_empty(fields[3].split('/').next().unwrap_or_default());
    let condition = fields.get(4).map_or("", |c| zero_as_empty(c));
    p.rule.entries.push(AffixEntry::new(kind, strip, add, condition));
    p.remaining -= 1;

    if p.remaining == 0 {
        if let Some(done) = pending.take() {
            data.rules.add_rule(done.rule);
        }
    }
}

/// Entry count of a `PFX|SFX flag Y|N count` header line.
fn header_count(fields: &[&str]) -> Option<usize> {
    if fields.len() < 4 || !matches!(fields[2], "Y" | "N") {
        return None;
    }
    fields[3].parse().ok()
}

fn is_count(field: &str) -> bool {
    field.parse::<usize>().is_ok()
}

fn zero_as_empty(field: &str) -> &str {
    if field == "0" { "" } else { field }
}
