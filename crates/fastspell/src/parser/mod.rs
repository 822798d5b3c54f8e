// Hunspell-style affix and dictionary file parsers

pub mod aff;
pub mod dic;

pub use aff::{AffixData, parse_aff, parse_aff_with_capacity};
pub use dic::{DicData, parse_dic};
