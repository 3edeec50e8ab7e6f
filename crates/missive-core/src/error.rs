//! Serialization failure type.

use crate::message::MessageFormat;
use thiserror::Error;

/// Error raised when a builder's state cannot be encoded into its target
/// format.
///
/// Builders do not catch or recover from codec failures; they wrap the
/// codec's error here and surface it unchanged. The [`Sender`] propagates
/// it unchanged as well, so the underlying codec error stays reachable
/// through [`std::error::Error::source`].
///
/// [`Sender`]: crate::Sender
#[derive(Debug, Error)]
#[error("{format} encoding failed: {source}")]
pub struct SerializationError {
    format: MessageFormat,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl SerializationError {
    /// Wrap a codec error for the given target format.
    ///
    /// # Parameters
    ///
    /// * `format` - The format that was being encoded
    /// * `source` - The underlying codec error
    pub fn new(
        format: MessageFormat,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            format,
            source: source.into(),
        }
    }

    /// Get the format whose encoding failed.
    pub fn format(&self) -> MessageFormat {
        self.format
    }
}

/// Result type alias for serialization operations.
pub type SerializationResult<T> = Result<T, SerializationError>;
