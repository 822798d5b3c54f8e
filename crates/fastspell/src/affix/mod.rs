// Affix rule model: expanding base words and reducing surface words
//
// Rules are applied one level deep. A surface word is reduced to candidate
// base forms by undoing a single prefix or suffix entry; a base word is
// expanded by applying a single entry. Cross-product rules may combine one
// prefix with one suffix during dictionary expansion.

pub mod condition;

use std::cell::RefCell;

use fastspell_core::{AffixKind, BoundedCache};
use hashbrown::{HashMap, HashSet};

pub use condition::Condition;

/// Default number of memoized [`AffixRuleSet::reduce_to_base_forms`] results.
pub const DEFAULT_AFFIX_CACHE_CAPACITY: usize = 10_000;

/// One strip/add alternative of an affix rule.
#[derive(Debug, Clone)]
pub struct AffixEntry {
    /// Text removed from the base word (empty for none).
    pub strip: String,
    /// Text added to produce the surface word (empty for none).
    pub add: String,
    pub condition: Condition,
}

impl AffixEntry {
    pub fn new(kind: AffixKind, strip: &str, add: &str, condition: &str) -> Self {
        Self {
            strip: strip.to_string(),
            add: add.to_string(),
            condition: Condition::compile(condition, kind),
        }
    }

    /// Base word to surface word, if this entry applies.
    pub fn apply(&self, kind: AffixKind, base: &str) -> Option<String> {
        if !self.condition.matches(base) {
            return None;
        }
        match kind {
            AffixKind::Prefix => {
                let rest = base.strip_prefix(self.strip.as_str())?;
                Some(format!("{}{rest}", self.add))
            }
            AffixKind::Suffix => {
                let rest = base.strip_suffix(self.strip.as_str())?;
                Some(format!("{rest}{}", self.add))
            }
        }
    }

    /// Surface word to candidate base word, if this entry could have
    /// produced `surface`.
    pub fn reduce(&self, kind: AffixKind, surface: &str) -> Option<String> {
        let base = match kind {
            AffixKind::Prefix => {
                let rest = surface.strip_prefix(self.add.as_str())?;
                format!("{}{rest}", self.strip)
            }
            AffixKind::Suffix => {
                let rest = surface.strip_suffix(self.add.as_str())?;
                format!("{rest}{}", self.strip)
            }
        };
        if base.is_empty() || base == surface || !self.condition.matches(&base) {
            return None;
        }
        Some(base)
    }
}

/// A `PFX` or `SFX` rule: all entries declared under one header.
#[derive(Debug, Clone)]
pub struct AffixRule {
    pub kind: AffixKind,
    pub flag: String,
    /// Whether the rule may combine with rules of the opposite kind.
    pub cross_product: bool,
    pub entries: Vec<AffixEntry>,
}

impl AffixRule {
    pub fn new(kind: AffixKind, flag: &str, cross_product: bool) -> Self {
        Self {
            kind,
            flag: flag.to_string(),
            cross_product,
            entries: Vec::new(),
        }
    }

    /// Every surface form this rule produces from `base`.
    fn expand_into(&self, base: &str, out: &mut Vec<String>, seen: &mut HashSet<String>) {
        for entry in &self.entries {
            if let Some(surface) = entry.apply(self.kind, base) {
                if seen.insert(surface.clone()) {
                    out.push(surface);
                }
            }
        }
    }
}

/// All affix rules of a dictionary, keyed by flag.
///
/// Flags keep the order in which they were first added so that every
/// traversal is deterministic.
#[derive(Debug)]
pub struct AffixRuleSet {
    rules: HashMap<String, Vec<AffixRule>>,
    flags: Vec<String>,
    reduce_cache: RefCell<BoundedCache<String, Vec<String>>>,
}

impl Default for AffixRuleSet {
    fn default() -> Self {
        Self::with_cache_capacity(DEFAULT_AFFIX_CACHE_CAPACITY)
    }
}

impl AffixRuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cache_capacity(capacity: usize) -> Self {
        Self {
            rules: HashMap::new(),
            flags: Vec::new(),
            reduce_cache: RefCell::new(BoundedCache::new(capacity)),
        }
    }

    /// Append a rule to its flag's list.
    pub fn add_rule(&mut self, rule: AffixRule) {
        if !self.rules.contains_key(&rule.flag) {
            self.flags.push(rule.flag.clone());
        }
        self.rules.entry(rule.flag.clone()).or_default().push(rule);
        self.reduce_cache.borrow_mut().clear();
    }

    /// Rules registered under `flag`.
    pub fn rules_for(&self, flag: &str) -> &[AffixRule] {
        self.rules.get(flag).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of distinct flags.
    pub fn flag_count(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// All rules in flag order.
    pub fn rules(&self) -> impl Iterator<Item = &AffixRule> {
        self.flags.iter().flat_map(|flag| self.rules_for(flag))
    }

    fn rules_of_kind(&self, kind: AffixKind) -> impl Iterator<Item = &AffixRule> {
        self.rules().filter(move |rule| rule.kind == kind)
    }

    /// Candidate base forms of a surface word.
    ///
    /// Undoes every prefix entry whose `add` starts the word and every
    /// suffix entry whose `add` ends it, keeping candidates whose entry
    /// condition accepts them. The candidates are not checked against any
    /// word list here. Results are memoized.
    pub fn reduce_to_base_forms(&self, word: &str) -> Vec<String> {
        if let Some(cached) = self.reduce_cache.borrow().get(word) {
            return cached.clone();
        }

        let mut bases = Vec::new();
        let mut seen = HashSet::new();
        for kind in [AffixKind::Prefix, AffixKind::Suffix] {
            for rule in self.rules_of_kind(kind) {
                for entry in &rule.entries {
                    if let Some(base) = entry.reduce(kind, word) {
                        if seen.insert(base.clone()) {
                            bases.push(base);
                        }
                    }
                }
            }
        }

        self.reduce_cache
            .borrow_mut()
            .insert(word.to_string(), bases.clone());
        bases
    }

    /// The base word followed by every form any single rule produces from it.
    pub fn expand_to_surface_forms(&self, base: &str) -> Vec<String> {
        let mut forms = vec![base.to_string()];
        let mut seen = HashSet::new();
        seen.insert(base.to_string());
        for kind in [AffixKind::Prefix, AffixKind::Suffix] {
            for rule in self.rules_of_kind(kind) {
                rule.expand_into(base, &mut forms, &mut seen);
            }
        }
        forms
    }

    /// Surface forms produced from `base` by the rules under `flag`
    /// (the base itself is not included).
    pub fn expand_with_flag(&self, base: &str, flag: &str) -> Vec<String> {
        let mut forms = Vec::new();
        let mut seen = HashSet::new();
        for rule in self.rules_for(flag) {
            rule.expand_into(base, &mut forms, &mut seen);
        }
        forms
    }

    /// Forms carrying both a prefix and a suffix, for flags whose rules
    /// allow cross products.
    pub fn cross_expand(&self, base: &str, flags: &[&str]) -> Vec<String> {
        let prefixes = self.crossable(flags, AffixKind::Prefix);
        if prefixes.is_empty() {
            return Vec::new();
        }

        let mut suffixed = Vec::new();
        let mut seen = HashSet::new();
        for rule in self.crossable(flags, AffixKind::Suffix) {
            rule.expand_into(base, &mut suffixed, &mut seen);
        }

        let mut forms = Vec::new();
        let mut seen = HashSet::new();
        for word in &suffixed {
            for rule in &prefixes {
                rule.expand_into(word, &mut forms, &mut seen);
            }
        }
        forms
    }

    fn crossable(&self, flags: &[&str], kind: AffixKind) -> Vec<&AffixRule> {
        flags
            .iter()
            .flat_map(|flag| self.rules_for(flag))
            .filter(|rule| rule.kind == kind && rule.cross_product)
            .collect()
    }

    /// Number of memoized reductions.
    pub fn cached_reductions(&self) -> usize {
        self.reduce_cache.borrow().len()
    }
}
