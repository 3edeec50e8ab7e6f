//! Builder selection by wire format.

use missive_core::{MessageBuilder, MessageFormat};

use crate::json::JsonMessageBuilder;
use crate::xml::XmlMessageBuilder;

/// Create the builder for the given wire format.
///
/// The format set is closed, so the lookup cannot fail; callers that
/// already know the concrete type can construct it directly instead.
///
/// # Example
///
/// ```rust
/// use missive_builders::builder_for;
/// use missive_core::MessageFormat;
///
/// let builder = builder_for(MessageFormat::Xml);
/// assert_eq!(builder.format(), MessageFormat::Xml);
/// ```
pub fn builder_for(format: MessageFormat) -> Box<dyn MessageBuilder> {
    match format {
        MessageFormat::Json => Box::new(JsonMessageBuilder::new()),
        MessageFormat::Xml => Box::new(XmlMessageBuilder::new()),
    }
}
