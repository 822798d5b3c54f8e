// Shared enums

/// Which end of a word an affix rule works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AffixKind {
    /// `PFX` rules: strip/add at the start of the word.
    Prefix,
    /// `SFX` rules: strip/add at the end of the word.
    Suffix,
}

impl AffixKind {
    /// Parse the directive tag used in affix files (`PFX` / `SFX`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "PFX" => Some(Self::Prefix),
            "SFX" => Some(Self::Suffix),
            _ => None,
        }
    }

    /// The directive tag for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Prefix => "PFX",
            Self::Suffix => "SFX",
        }
    }
}
