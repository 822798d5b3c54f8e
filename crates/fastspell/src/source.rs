// Content sources feeding dictionary text into the engine

use std::fmt;

/// Error produced while obtaining dictionary text.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("content provider failed: {0}")]
    Provider(String),
    #[error("content is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("failed to read content: {0}")]
    Io(#[from] std::io::Error),
}

/// Deferred content: called once, when the dictionary is loaded.
pub type Provider = Box<dyn FnOnce() -> Result<String, SourceError>>;

/// Where affix or dictionary text comes from.
///
/// The engine itself never touches the file system or the network; callers
/// hand it text directly or a provider that fetches it.
pub enum Source {
    Text(String),
    /// Raw bytes; must be UTF-8.
    Bytes(Vec<u8>),
    Provider(Provider),
}

impl Source {
    /// Wrap a closure as a provider source.
    pub fn provider<F>(f: F) -> Self
    where
        F: FnOnce() -> Result<String, SourceError> + 'static,
    {
        Self::Provider(Box::new(f))
    }

    /// Obtain the text, consuming the source.
    pub fn resolve(self) -> Result<String, SourceError> {
        match self {
            Self::Text(text) => Ok(text),
            Self::Bytes(bytes) => Ok(String::from_utf8(bytes)?),
            Self::Provider(provider) => provider(),
        }
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(&text.len()).finish(),
            Self::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

impl From<String> for Source {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Source {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<u8>> for Source {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}
