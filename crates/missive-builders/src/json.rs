//! JSON message encoding.

use missive_core::{Message, MessageBuilder, MessageFormat, SerializationError, SerializationResult};
use serde::Serialize;

/// Wire shape of a JSON message.
///
/// The field names are the stable external contract: the builder's
/// internal `text` maps to the `message` key. Consumers must not rely on
/// key order.
#[derive(Serialize)]
struct JsonMessage<'a> {
    recipient: &'a str,
    message: &'a str,
}

/// Builder that encodes messages as a single JSON object.
///
/// # Example
///
/// ```rust
/// use missive_builders::JsonMessageBuilder;
/// use missive_core::{MessageBuilder, MessageFormat};
///
/// let mut builder = JsonMessageBuilder::new();
/// builder.set_recipient("Alice");
/// builder.set_text("hello");
///
/// let message = builder.finalize().expect("plain strings always encode");
/// assert_eq!(message.format(), MessageFormat::Json);
/// ```
#[derive(Debug, Default)]
pub struct JsonMessageBuilder {
    recipient: String,
    text: String,
}

impl JsonMessageBuilder {
    /// Create a builder with empty recipient and text.
    pub fn new() -> Self {
        Self::default()
    }
}

impl MessageBuilder for JsonMessageBuilder {
    fn format(&self) -> MessageFormat {
        MessageFormat::Json
    }

    fn set_recipient(&mut self, recipient: &str) {
        self.recipient = recipient.to_string();
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn finalize(&self) -> SerializationResult<Message> {
        let body = serde_json::to_vec(&JsonMessage {
            recipient: &self.recipient,
            message: &self.text,
        })
        .map_err(|err| SerializationError::new(self.format(), err))?;

        Ok(Message::new(body, self.format()))
    }
}
