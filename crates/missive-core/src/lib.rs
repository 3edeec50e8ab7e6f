//! # Missive Core
//!
//! Core traits and types for the missive message-construction library.
//! This crate provides the building blocks for assembling outbound
//! messages through interchangeable wire-format builders.
//!
//! ## Core Components
//!
//! - **[`Message`]**: The immutable output value, encoded body bytes plus
//!   a [`MessageFormat`] tag.
//! - **[`MessageBuilder`]**: Capability trait that concrete encoders
//!   implement: set the recipient, set the text, finalize into a
//!   [`Message`].
//! - **[`Sender`]**: Director that runs a fixed construction sequence
//!   against any builder, decoupling which fields get set from how they
//!   are encoded.
//! - **[`SerializationError`]**: The single failure mode, surfaced
//!   unchanged from the underlying codec.

pub mod builder;
pub mod error;
pub mod message;
pub mod sender;

pub use builder::MessageBuilder;
pub use error::{SerializationError, SerializationResult};
pub use message::{Message, MessageFormat};
pub use sender::Sender;
