//! Configuration
//!
//! Console settings and the parser for the `console.toml` file the firmware
//! embeds at build time.

pub mod parse;
pub mod types;

pub use parse::{parse_config, ParseError, ParseErrorKind};
pub use types::*;
