//! ahtone CLI library.
//!
//! Holds the command implementations so they can be driven from tests as well
//! as from the `ahtone` binary.

pub mod commands;

/// Destination of the rendered tone, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "public/sounds/human_ah.wav";
