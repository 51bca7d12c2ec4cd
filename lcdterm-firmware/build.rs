//! Build script for lcdterm-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates console.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths and scripts
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate console.toml configuration at compile time
///
/// Mirrors the rules of the on-target parser so a bad file fails the build
/// instead of silently falling back to defaults on the board.
fn validate_config() {
    println!("cargo:rerun-if-changed=console.toml");

    let config_path = Path::new("console.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: console.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds a console.toml configuration file.          ║\n\
            ║  Please create one in the lcdterm-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read console.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in console.toml                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let errors = check_config(&config);
    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid console.toml                                     ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=console.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Accepted value for one key
enum Rule {
    /// Integer in an inclusive range
    Int(i64, i64),
    /// One of a fixed set of strings
    Choice(&'static [&'static str]),
}

const SCHEMA: &[(&str, &[(&str, Rule)])] = &[
    (
        "serial",
        &[
            ("baudrate", Rule::Int(1, u32::MAX as i64)),
            ("data_bits", Rule::Int(7, 8)),
            ("parity", Rule::Choice(&["none", "even", "odd"])),
            ("stop_bits", Rule::Int(1, 2)),
            ("flow_control", Rule::Choice(&["none", "rts_cts"])),
        ],
    ),
    (
        "display",
        &[
            ("background", Rule::Int(0, 0xFF_FFFF)),
            ("text_color", Rule::Int(0, 0xFF_FFFF)),
            ("backlight", Rule::Int(0, 255)),
        ],
    ),
    (
        "layout",
        &[
            ("start_x", Rule::Int(0, u16::MAX as i64)),
            ("start_y", Rule::Int(0, u16::MAX as i64)),
            ("line_space", Rule::Int(0, u16::MAX as i64)),
        ],
    ),
    ("button", &[("debounce_ms", Rule::Int(0, u16::MAX as i64))]),
];

/// Collect every schema violation
fn check_config(config: &toml::Value) -> Vec<String> {
    let mut errors = Vec::new();

    let root = match config.as_table() {
        Some(t) => t,
        None => return vec!["top level must be a table".to_string()],
    };

    for (section, body) in root {
        let Some((_, keys)) = SCHEMA.iter().find(|(name, _)| name == section) else {
            errors.push(format!("unknown section [{}]", section));
            continue;
        };

        let Some(body) = body.as_table() else {
            errors.push(format!("[{}] must be a table", section));
            continue;
        };

        for (key, value) in body {
            let Some((_, rule)) = keys.iter().find(|(name, _)| name == key) else {
                errors.push(format!("[{}] unknown key '{}'", section, key));
                continue;
            };

            match rule {
                Rule::Int(min, max) => match value.as_integer() {
                    Some(v) if (*min..=*max).contains(&v) => {}
                    Some(_) => errors.push(format!(
                        "[{}] {} must be {}-{}",
                        section, key, min, max
                    )),
                    None => errors.push(format!("[{}] {} must be an integer", section, key)),
                },
                Rule::Choice(options) => match value.as_str() {
                    Some(v) if options.iter().any(|o| *o == v) => {}
                    _ => errors.push(format!(
                        "[{}] {} must be one of {}",
                        section,
                        key,
                        options.join(", ")
                    )),
                },
            }
        }
    }

    errors
}
