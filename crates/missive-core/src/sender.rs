//! The director that drives message construction.

use crate::builder::MessageBuilder;
use crate::error::SerializationResult;
use crate::message::Message;

/// Director that assembles a message through any [`MessageBuilder`].
///
/// `Sender` owns the construction sequence (which fields get set, with
/// which values, in which order) while the builder owns the encoding.
/// Swapping the builder argument changes the output format with zero
/// change to the orchestration.
///
/// The sequence is fixed and not configurable by the caller:
/// the recipient is set first, the text second, then the builder is
/// finalized and its result propagated unchanged.
#[derive(Debug, Default)]
pub struct Sender;

impl Sender {
    /// The recipient every built message is addressed to.
    pub const RECIPIENT: &'static str = "Santa Claus";

    /// The body text of every built message.
    pub const TEXT: &'static str = "I have tried to be good all year and hope that you and your reindeers will be able to deliver me a nice present.";

    /// Create a new sender.
    pub fn new() -> Self {
        Self
    }

    /// Build a message through the given builder.
    ///
    /// Runs the fixed construction sequence against `builder` and returns
    /// whatever its [`finalize`](MessageBuilder::finalize) produces,
    /// success or error, unchanged.
    ///
    /// # Parameters
    ///
    /// * `builder` - The wire-format builder to drive
    pub fn build_message(&self, builder: &mut dyn MessageBuilder) -> SerializationResult<Message> {
        tracing::debug!(format = %builder.format(), "assembling message");

        builder.set_recipient(Self::RECIPIENT);
        builder.set_text(Self::TEXT);
        let message = builder.finalize()?;

        tracing::debug!(
            format = %message.format(),
            bytes = message.body().len(),
            "message finalized"
        );
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SerializationError;
    use crate::message::MessageFormat;

    /// Records every builder call so tests can assert the sequence.
    #[derive(Default)]
    struct RecordingBuilder {
        calls: Vec<String>,
    }

    impl MessageBuilder for RecordingBuilder {
        fn format(&self) -> MessageFormat {
            MessageFormat::Json
        }

        fn set_recipient(&mut self, recipient: &str) {
            self.calls.push(format!("recipient={recipient}"));
        }

        fn set_text(&mut self, text: &str) {
            self.calls.push(format!("text={text}"));
        }

        fn finalize(&self) -> SerializationResult<Message> {
            Ok(Message::new(
                self.calls.join("\n").into_bytes(),
                self.format(),
            ))
        }
    }

    struct FailingBuilder;

    impl MessageBuilder for FailingBuilder {
        fn format(&self) -> MessageFormat {
            MessageFormat::Xml
        }

        fn set_recipient(&mut self, _recipient: &str) {}

        fn set_text(&mut self, _text: &str) {}

        fn finalize(&self) -> SerializationResult<Message> {
            Err(SerializationError::new(self.format(), "codec rejected input"))
        }
    }

    #[test]
    fn sender_sets_fields_in_fixed_order() {
        let mut builder = RecordingBuilder::default();

        Sender::new()
            .build_message(&mut builder)
            .expect("recording builder never fails");

        assert_eq!(
            builder.calls,
            vec![
                format!("recipient={}", Sender::RECIPIENT),
                format!("text={}", Sender::TEXT),
            ]
        );
    }

    #[test]
    fn sender_returns_the_finalized_message() {
        let mut builder = RecordingBuilder::default();

        let message = Sender::new()
            .build_message(&mut builder)
            .expect("recording builder never fails");

        assert_eq!(message.format(), MessageFormat::Json);
        let body = String::from_utf8(message.into_body()).expect("recorded calls are UTF-8");
        assert!(body.contains(Sender::RECIPIENT));
        assert!(body.contains(Sender::TEXT));
    }

    #[test]
    fn sender_propagates_finalize_errors_unchanged() {
        let err = Sender::new()
            .build_message(&mut FailingBuilder)
            .expect_err("failing builder always fails");

        assert_eq!(err.format(), MessageFormat::Xml);
        assert_eq!(err.to_string(), "XML encoding failed: codec rejected input");
    }

    #[test]
    fn sender_is_deterministic_across_fresh_builders() {
        let sender = Sender::new();

        let first = sender
            .build_message(&mut RecordingBuilder::default())
            .expect("recording builder never fails");
        let second = sender
            .build_message(&mut RecordingBuilder::default())
            .expect("recording builder never fails");

        assert_eq!(first, second);
    }
}
