//! Minimal TOML reader for `console.toml`
//!
//! Handles only the subset the console needs, without allocation:
//! - `[section]` headers
//! - `key = value` pairs (integer, hex integer, quoted string)
//! - Comments (# ...)
//!
//! Unknown sections and keys are errors, so a typo never silently falls
//! back to a default.

use lcdterm_hal::uart::{DataBits, FlowControl, Parity, StopBits};

use super::types::ConsoleConfig;

/// Parse error kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseErrorKind {
    /// Unknown or malformed section header
    InvalidSection,
    /// Key not valid in this section
    UnknownKey,
    /// Value of the wrong type or out of range
    InvalidValue,
    /// Line is neither a header nor `key = value`
    Malformed,
}

/// Parse error with the 1-based line it occurred on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Serial,
    Display,
    Layout,
    Button,
}

/// Parse TOML text into a console configuration
///
/// Keys that are not present keep their default values.
pub fn parse_config(input: &str) -> Result<ConsoleConfig, ParseError> {
    let mut config = ConsoleConfig::default();
    let mut section = Section::Root;

    for (index, line) in input.lines().enumerate() {
        let at = |kind| ParseError {
            line: index + 1,
            kind,
        };
        let line = strip_comment(line).trim();

        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1]).map_err(at)?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(at(ParseErrorKind::Malformed))?;
        apply_value(section, key, value, &mut config).map_err(at)?;
    }

    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ParseErrorKind> {
    match header.trim() {
        "serial" => Ok(Section::Serial),
        "display" => Ok(Section::Display),
        "layout" => Ok(Section::Layout),
        "button" => Ok(Section::Button),
        _ => Err(ParseErrorKind::InvalidSection),
    }
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut ConsoleConfig,
) -> Result<(), ParseErrorKind> {
    match (section, key) {
        (Section::Serial, "baudrate") => {
            config.serial.baudrate = parse_int(value)?;
            if config.serial.baudrate == 0 {
                return Err(ParseErrorKind::InvalidValue);
            }
        }
        (Section::Serial, "data_bits") => {
            config.serial.data_bits = match parse_int::<u8>(value)? {
                7 => DataBits::Seven,
                8 => DataBits::Eight,
                _ => return Err(ParseErrorKind::InvalidValue),
            }
        }
        (Section::Serial, "parity") => {
            config.serial.parity = match parse_string(value)? {
                "none" => Parity::None,
                "even" => Parity::Even,
                "odd" => Parity::Odd,
                _ => return Err(ParseErrorKind::InvalidValue),
            }
        }
        (Section::Serial, "stop_bits") => {
            config.serial.stop_bits = match parse_int::<u8>(value)? {
                1 => StopBits::One,
                2 => StopBits::Two,
                _ => return Err(ParseErrorKind::InvalidValue),
            }
        }
        (Section::Serial, "flow_control") => {
            config.serial.flow_control = match parse_string(value)? {
                "none" => FlowControl::None,
                "rts_cts" => FlowControl::RtsCts,
                _ => return Err(ParseErrorKind::InvalidValue),
            }
        }
        (Section::Display, "background") => config.display.background = parse_color(value)?,
        (Section::Display, "text_color") => config.display.text_color = parse_color(value)?,
        (Section::Display, "backlight") => config.display.backlight = parse_int(value)?,
        (Section::Layout, "start_x") => config.layout.start_x = parse_int(value)?,
        (Section::Layout, "start_y") => config.layout.start_y = parse_int(value)?,
        (Section::Layout, "line_space") => config.layout.line_space = parse_int(value)?,
        (Section::Button, "debounce_ms") => config.button.debounce_ms = parse_int(value)?,
        _ => return Err(ParseErrorKind::UnknownKey),
    }
    Ok(())
}

/// Drop a trailing comment that is not inside a string
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (pos, ch) in line.char_indices() {
        match ch {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..pos],
            _ => {}
        }
    }
    line
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a quoted string value
fn parse_string(value: &str) -> Result<&str, ParseErrorKind> {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .ok_or(ParseErrorKind::InvalidValue)
}

/// Parse a decimal or `0x` hexadecimal integer, allowing `_` separators
fn parse_int<T: TryFrom<u32>>(value: &str) -> Result<T, ParseErrorKind> {
    let mut digits: heapless::String<16> = heapless::String::new();
    for ch in value.chars().filter(|&c| c != '_') {
        digits.push(ch).map_err(|_| ParseErrorKind::InvalidValue)?;
    }

    let raw = match digits.strip_prefix("0x") {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => digits.parse::<u32>(),
    }
    .map_err(|_| ParseErrorKind::InvalidValue)?;
    T::try_from(raw).map_err(|_| ParseErrorKind::InvalidValue)
}

/// Parse a 24-bit color
fn parse_color(value: &str) -> Result<u32, ParseErrorKind> {
    let color: u32 = parse_int(value)?;
    if color > 0xFF_FFFF {
        return Err(ParseErrorKind::InvalidValue);
    }
    Ok(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
# Reference board settings
[serial]
baudrate = 115_200
parity = "none"   # no parity
stop_bits = 1

[display]
background = 0x000000
text_color = 0xFFFFFF
backlight = 240

[layout]
start_x = 5
start_y = 5
line_space = 5

[button]
debounce_ms = 10
"#;

    #[test]
    fn test_sample_matches_defaults() {
        assert_eq!(parse_config(SAMPLE), Ok(ConsoleConfig::default()));
    }

    #[test]
    fn test_empty_input_gives_defaults() {
        assert_eq!(parse_config(""), Ok(ConsoleConfig::default()));
    }

    #[test]
    fn test_overrides() {
        let config = parse_config(
            "[serial]\nbaudrate = 9600\nparity = \"even\"\n[display]\ntext_color = 0x00FF00\n",
        )
        .unwrap();
        assert_eq!(config.serial.baudrate, 9600);
        assert_eq!(config.serial.parity, Parity::Even);
        assert_eq!(config.display.text_color, 0x00FF00);
        assert_eq!(config.display.backlight, 0xF0);
    }

    #[test]
    fn test_unknown_key_reports_line() {
        let err = parse_config("[layout]\nstart_x = 5\nmargin = 3\n").unwrap_err();
        assert_eq!(
            err,
            ParseError {
                line: 3,
                kind: ParseErrorKind::UnknownKey
            }
        );
    }

    #[test]
    fn test_key_outside_section() {
        let err = parse_config("backlight = 1").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnknownKey);
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            parse_config("[display]\nbacklight = 256").unwrap_err().kind,
            ParseErrorKind::InvalidValue
        );
        assert_eq!(
            parse_config("[display]\nbackground = 0x1000000").unwrap_err().kind,
            ParseErrorKind::InvalidValue
        );
        assert_eq!(
            parse_config("[serial]\nparity = none").unwrap_err().kind,
            ParseErrorKind::InvalidValue
        );
        assert_eq!(
            parse_config("[serial]\nbaudrate = 0").unwrap_err().kind,
            ParseErrorKind::InvalidValue
        );
    }

    #[test]
    fn test_malformed_lines() {
        assert_eq!(
            parse_config("[panel]").unwrap_err().kind,
            ParseErrorKind::InvalidSection
        );
        assert_eq!(
            parse_config("[layout]\nstart_x").unwrap_err().kind,
            ParseErrorKind::Malformed
        );
    }
}
