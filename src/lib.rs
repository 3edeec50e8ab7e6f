//! # Missive
//!
//! Missive is a small library for director-driven message construction:
//! a fixed orchestration sequence assembles a message through whichever
//! wire-format builder it is handed, so the output encoding changes
//! without the orchestration changing.
//!
//! ## Core Components
//!
//! - **[`MessageBuilder`]**: Capability trait over the supported
//!   encoders: set the recipient, set the text, finalize.
//! - **[`JsonMessageBuilder`], [`XmlMessageBuilder`]**: The concrete
//!   encoders, selectable by [`builder_for`].
//! - **[`Sender`]**: The director that runs the construction sequence
//!   against any builder.
//! - **[`Message`]**: The immutable result, encoded bytes plus a
//!   [`MessageFormat`] tag.
//!
//! ## Quick Start
//!
//! ```rust
//! use missive::{builder_for, MessageFormat, Sender};
//!
//! let sender = Sender::new();
//!
//! let mut builder = builder_for(MessageFormat::Json);
//! let message = sender
//!     .build_message(builder.as_mut())
//!     .expect("plain strings always encode");
//!
//! assert_eq!(message.format(), MessageFormat::Json);
//! println!("{message}");
//! ```

pub use missive_builders::{JsonMessageBuilder, XmlMessageBuilder, builder_for};
pub use missive_core::{
    Message, MessageBuilder, MessageFormat, SerializationError, SerializationResult, Sender,
};
