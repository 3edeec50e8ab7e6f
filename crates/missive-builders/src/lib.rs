//! # Missive Builders
//!
//! Concrete [`MessageBuilder`](missive_core::MessageBuilder)
//! implementations for the missive library, one per supported wire
//! format.
//!
//! ## Builders
//!
//! - **[`JsonMessageBuilder`]**: encodes a single JSON object with the
//!   keys `recipient` and `message`.
//! - **[`XmlMessageBuilder`]**: encodes a single XML document with a
//!   `<message>` root and `<recipient>`/`<body>` child elements.
//!
//! Use [`builder_for`] to obtain the builder for a
//! [`MessageFormat`](missive_core::MessageFormat) without naming the
//! concrete type.

/// Builder selection by wire format.
pub mod factory;
/// JSON message encoding.
pub mod json;
/// XML message encoding.
pub mod xml;

pub use factory::builder_for;
pub use json::JsonMessageBuilder;
pub use xml::XmlMessageBuilder;
