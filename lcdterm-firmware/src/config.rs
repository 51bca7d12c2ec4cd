//! Embedded configuration

use defmt::*;
use lcdterm_core::config::{parse_config, ConsoleConfig};

/// Compiled-in configuration; edit console.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../console.toml");

/// Parse the embedded configuration, falling back to defaults
pub fn load() -> ConsoleConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Loaded embedded console.toml");
            config
        }
        Err(e) => {
            warn!(
                "console.toml line {}: {:?}, using defaults",
                e.line, e.kind
            );
            ConsoleConfig::default()
        }
    }
}
