//! The message builder capability trait.

use crate::error::SerializationResult;
use crate::message::{Message, MessageFormat};

/// Trait defining a wire-format-specific message builder.
///
/// A builder accumulates the message fields through its setters and
/// encodes them into a finished [`Message`] on
/// [`finalize`](MessageBuilder::finalize). Each implementation targets
/// exactly one [`MessageFormat`]; swapping the implementation changes the
/// encoding without changing the construction sequence.
///
/// A builder instance is scoped to one construction session. There is no
/// reset operation and no internal synchronization: do not share one
/// instance across concurrently running directors.
///
/// # Example
///
/// ```rust
/// use missive_core::{Message, MessageBuilder, MessageFormat, SerializationResult};
///
/// #[derive(Default)]
/// struct PlainTextBuilder {
///     recipient: String,
///     text: String,
/// }
///
/// impl MessageBuilder for PlainTextBuilder {
///     fn format(&self) -> MessageFormat {
///         MessageFormat::Json
///     }
///
///     fn set_recipient(&mut self, recipient: &str) {
///         self.recipient = recipient.to_string();
///     }
///
///     fn set_text(&mut self, text: &str) {
///         self.text = text.to_string();
///     }
///
///     fn finalize(&self) -> SerializationResult<Message> {
///         let body = format!("To {}: {}", self.recipient, self.text);
///         Ok(Message::new(body.into_bytes(), self.format()))
///     }
/// }
/// ```
pub trait MessageBuilder {
    /// The wire format this builder encodes into.
    ///
    /// Every [`Message`] returned by [`finalize`](MessageBuilder::finalize)
    /// carries this same format tag.
    fn format(&self) -> MessageFormat;

    /// Store the message recipient.
    ///
    /// No validation is performed; a later call overwrites the earlier
    /// value. There are no side effects beyond the internal state change.
    fn set_recipient(&mut self, recipient: &str);

    /// Store the message body text.
    ///
    /// Same contract as [`set_recipient`](MessageBuilder::set_recipient).
    fn set_text(&mut self, text: &str);

    /// Encode the currently-stored state into a finished [`Message`].
    ///
    /// Observes whatever values the setters stored on this instance, in
    /// program order. Calling it before any setter is legal and encodes
    /// empty-string fields; calling it repeatedly on unchanged state
    /// yields logically identical documents.
    ///
    /// # Returns
    ///
    /// The encoded `Message`, or the codec's error surfaced unchanged.
    fn finalize(&self) -> SerializationResult<Message>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct PlainTextBuilder {
        recipient: String,
        text: String,
    }

    impl MessageBuilder for PlainTextBuilder {
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
            let body = format!("To {}: {}", self.recipient, self.text);
            Ok(Message::new(body.into_bytes(), self.format()))
        }
    }

    #[test]
    fn finalize_observes_setter_values() {
        let mut builder = PlainTextBuilder::default();
        builder.set_recipient("Alice");
        builder.set_text("hello");

        let message = builder.finalize().expect("plain text always encodes");
        assert_eq!(message.body(), b"To Alice: hello");
    }

    #[test]
    fn later_setter_calls_overwrite_earlier_ones() {
        let mut builder = PlainTextBuilder::default();
        builder.set_recipient("Alice");
        builder.set_recipient("Bob");
        builder.set_text("first");
        builder.set_text("second");

        let message = builder.finalize().expect("plain text always encodes");
        assert_eq!(message.body(), b"To Bob: second");
    }

    #[test]
    fn unset_fields_encode_as_empty_strings() {
        let builder = PlainTextBuilder::default();

        let message = builder.finalize().expect("plain text always encodes");
        assert_eq!(message.body(), b"To : ");
    }

    #[test]
    fn builder_is_usable_as_trait_object() {
        let mut builder = PlainTextBuilder::default();
        let dyn_builder: &mut dyn MessageBuilder = &mut builder;

        dyn_builder.set_recipient("Carol");
        dyn_builder.set_text("hi");

        let message = dyn_builder.finalize().expect("plain text always encodes");
        assert_eq!(message.format(), dyn_builder.format());
        assert_eq!(message.body(), b"To Carol: hi");
    }
}
