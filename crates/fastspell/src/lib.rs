//! Offline spell checking with Hunspell-style affix and dictionary files.
//!
//! - [`trie`] -- lower-cased word store with prefix enumeration
//! - [`affix`] -- prefix/suffix rules, expansion and reduction
//! - [`rules`] -- REP, ICONV and COMPOUNDRULE rules
//! - [`parser`] -- `.aff` and `.dic` text parsers
//! - [`dictionary`] -- the immutable assembled dictionary
//! - [`speller`] -- the membership check pipeline
//! - [`suggestion`] -- candidate generation and ranking (feature `suggest`)
//! - [`handle`] -- [`SpellChecker`], caches and options
//!
//! ```
//! use fastspell::SpellChecker;
//!
//! let checker = SpellChecker::from_text("SFX S Y 1\nSFX S 0 s .\n", "1\ncat/S\n");
//! assert!(checker.check("cats"));
//! assert!(!checker.check("cta"));
//! ```

pub mod affix;
pub mod dictionary;
pub mod error;
pub mod handle;
pub mod parser;
pub mod rules;
pub mod source;
pub mod speller;
#[cfg(feature = "suggest")]
pub mod suggestion;
pub mod trie;

pub use dictionary::Dictionary;
pub use error::LoadError;
pub use handle::{CacheStats, SpellChecker, SpellerOptions};
pub use source::{Source, SourceError};
pub use speller::Speller;
pub use trie::PrefixTree;
