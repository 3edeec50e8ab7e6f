//! The message value and its wire-format tag.

use std::fmt;

/// Wire formats a message can be encoded into.
///
/// The set of formats is closed: every concrete builder targets exactly
/// one variant, and dispatch over formats can be exhaustive at compile
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageFormat {
    Json,
    Xml,
}

impl MessageFormat {
    /// Get the format tag as a string.
    pub fn name(&self) -> &'static str {
        match self {
            MessageFormat::Json => "JSON",
            MessageFormat::Xml => "XML",
        }
    }

    /// Try to parse a format tag string into a `MessageFormat`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "JSON" => Some(MessageFormat::Json),
            "XML" => Some(MessageFormat::Xml),
            _ => None,
        }
    }

    /// Get all supported formats as a slice.
    pub fn all() -> &'static [MessageFormat] {
        &[MessageFormat::Json, MessageFormat::Xml]
    }
}

impl fmt::Display for MessageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A finished, encoded message.
///
/// `Message` is the immutable product of a builder's
/// [`finalize`](crate::MessageBuilder::finalize) call: the encoded body
/// bytes together with the format they were encoded into. The format tag
/// always matches the builder that produced the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    body: Vec<u8>,
    format: MessageFormat,
}

impl Message {
    /// Create a new message from encoded body bytes.
    ///
    /// Called by builder implementations from `finalize`; there is no
    /// other supported construction path.
    ///
    /// # Parameters
    ///
    /// * `body` - The encoded message bytes
    /// * `format` - The wire format the body was encoded into
    pub fn new(body: Vec<u8>, format: MessageFormat) -> Self {
        Self { body, format }
    }

    /// Get the encoded body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Consume the message and return the body bytes.
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    /// Get the wire format this message was encoded into.
    pub fn format(&self) -> MessageFormat {
        self.format
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.body))
    }
}
