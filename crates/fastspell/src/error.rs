// Error types

use crate::source::SourceError;

/// Failure to install a dictionary. The previous dictionary stays active.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to load affix file: {0}")]
    Affix(#[source] SourceError),
    #[error("failed to load dictionary file: {0}")]
    Dictionary(#[source] SourceError),
}
