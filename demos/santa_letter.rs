//! Builds the same letter through every wire-format builder and prints
//! each encoded document.
//!
//! Run with: `cargo run --example santa_letter`

use missive::{MessageFormat, SerializationError, Sender, builder_for};

fn main() -> Result<(), SerializationError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let sender = Sender::new();

    for format in MessageFormat::all() {
        let mut builder = builder_for(*format);
        let message = sender.build_message(builder.as_mut())?;
        println!("{message}");
    }

    Ok(())
}
