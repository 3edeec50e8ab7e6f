//! XML message encoding.

use missive_core::{Message, MessageBuilder, MessageFormat, SerializationError, SerializationResult};
use serde::Serialize;

/// Wire shape of an XML message.
///
/// The serde rename pins the root element to `<message>`, and the field
/// names are the stable external contract: the builder's internal `text`
/// maps to the `<body>` element. No attributes, no namespaces.
#[derive(Serialize)]
#[serde(rename = "message")]
struct XmlMessage<'a> {
    recipient: &'a str,
    body: &'a str,
}

/// Builder that encodes messages as a single XML document.
///
/// # Example
///
/// ```rust
/// use missive_builders::XmlMessageBuilder;
/// use missive_core::{MessageBuilder, MessageFormat};
///
/// let mut builder = XmlMessageBuilder::new();
/// builder.set_recipient("Alice");
/// builder.set_text("hello");
///
/// let message = builder.finalize().expect("plain strings always encode");
/// assert_eq!(message.format(), MessageFormat::Xml);
/// ```
#[derive(Debug, Default)]
pub struct XmlMessageBuilder {
    recipient: String,
    text: String,
}

impl XmlMessageBuilder {
    /// Create a builder with empty recipient and text.
    pub fn new() -> Self {
        Self::default()
    }
}

impl MessageBuilder for XmlMessageBuilder {
    fn format(&self) -> MessageFormat {
        MessageFormat::Xml
    }

    fn set_recipient(&mut self, recipient: &str) {
        self.recipient = recipient.to_string();
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn finalize(&self) -> SerializationResult<Message> {
        let document = quick_xml::se::to_string(&XmlMessage {
            recipient: &self.recipient,
            body: &self.text,
        })
        .map_err(|err| SerializationError::new(self.format(), err))?;

        Ok(Message::new(document.into_bytes(), self.format()))
    }
}
