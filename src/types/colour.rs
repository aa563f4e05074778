//! Colour type and hex parsing.
//!
//! Two parsers are provided:
//! - [`parse_hex_color`] never fails. It scans the leading hex digits as an
//!   integer and treats anything unreadable as `0`, i.e. opaque black.
//! - [`Colour::from_hex`] validates the input and reports malformed codes.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::Serialize;

use crate::error::{KitError, Result};

/// An RGBA colour value with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// A colour with channels normalised to `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Channels as a `(r, g, b, a)` tuple.
    pub fn to_tuple(self) -> (f32, f32, f32, f32) {
        (self.r, self.g, self.b, self.a)
    }
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const CLEAR: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Build an opaque colour from a packed `0xRRGGBB` value.
    ///
    /// Bits above the low 24 are ignored.
    pub const fn from_packed(value: u64) -> Self {
        let r = ((value & 0xFF_0000) >> 16) as u8;
        let g = ((value & 0x00_FF00) >> 8) as u8;
        let b = (value & 0x00_00FF) as u8;
        Self::rgb(r, g, b)
    }

    /// Parse a hex colour string strictly.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RGBA` (4 digits, expanded to 8)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    ///
    /// The leading `#` is optional and surrounding whitespace is ignored.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid_hex(s));
        }

        let digits: Vec<u8> = hex
            .bytes()
            .map(|b| (b as char).to_digit(16).unwrap_or(0) as u8)
            .collect();
        let pair = |i: usize| digits[i] << 4 | digits[i + 1];
        let double = |i: usize| digits[i] << 4 | digits[i];

        match digits.len() {
            3 => Ok(Self::rgb(double(0), double(1), double(2))),
            4 => Ok(Self::new(double(0), double(1), double(2), double(3))),
            6 => Ok(Self::rgb(pair(0), pair(2), pair(4))),
            8 => Ok(Self::new(pair(0), pair(2), pair(4), pair(6))),
            _ => Err(invalid_hex(s)),
        }
    }

    /// Channels normalised to `0.0..=1.0`.
    pub fn normalized(self) -> Rgba {
        let rgb: Srgb<f32> = Srgb::new(self.r, self.g, self.b).into_format();
        Rgba {
            r: rgb.red,
            g: rgb.green,
            b: rgb.blue,
            a: f32::from(self.a) / 255.0,
        }
    }

    /// The colour as a `palette` sRGB value, dropping alpha.
    pub fn to_srgb(self) -> Srgb<f32> {
        Srgb::new(self.r, self.g, self.b).into_format()
    }

    /// Convert to RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl FromStr for Colour {
    type Err = KitError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Parse a hex colour code leniently.
///
/// Whitespace around the input and every `#` in it are removed, then the
/// leading run of hex digits (after an optional `0x`) is read as an integer.
/// Input with no leading hex digit reads as `0`, so malformed codes produce
/// opaque black instead of an error. Values too large for 64 bits saturate.
///
/// Use [`Colour::from_hex`] when the input must be validated.
pub fn parse_hex_color(text: &str) -> Colour {
    let sanitized = text.trim().replace('#', "");
    Colour::from_packed(scan_hex(&sanitized))
}

/// Read the leading hex digits of `s`, saturating on overflow.
fn scan_hex(s: &str) -> u64 {
    let s = s.trim_start();
    let body = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .filter(|rest| rest.starts_with(|c: char| c.is_ascii_hexdigit()))
        .unwrap_or(s);

    let mut value: u64 = 0;
    for digit in body.chars().map_while(|c| c.to_digit(16)) {
        value = match value.checked_mul(16).and_then(|v| v.checked_add(u64::from(digit))) {
            Some(v) => v,
            None => return u64::MAX,
        };
    }
    value
}

fn invalid_hex(s: &str) -> KitError {
    KitError::Parse {
        message: format!("Invalid hex colour: {}", s),
        help: Some("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_primary_colours() {
        assert_eq!(parse_hex_color("#FFFFFF").normalized().to_tuple(), (1.0, 1.0, 1.0, 1.0));
        assert_eq!(parse_hex_color("000000").normalized().to_tuple(), (0.0, 0.0, 0.0, 1.0));
        assert_eq!(parse_hex_color("#FF0000").normalized().to_tuple(), (1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_lenient_malformed_is_black() {
        assert_eq!(parse_hex_color("zzzzzz"), Colour::BLACK);
        assert_eq!(parse_hex_color("zzzzzz").normalized().to_tuple(), (0.0, 0.0, 0.0, 1.0));
        assert_eq!(parse_hex_color(""), Colour::BLACK);
        assert_eq!(parse_hex_color("#"), Colour::BLACK);
    }

    #[test]
    fn test_lenient_trims_and_strips_hashes() {
        assert_eq!(parse_hex_color("  #1a1a2e\n"), Colour::rgb(0x1a, 0x1a, 0x2e));
        assert_eq!(parse_hex_color("##00FF00"), Colour::rgb(0, 255, 0));
        assert_eq!(parse_hex_color("0x0000FF"), Colour::rgb(0, 0, 255));
    }

    #[test]
    fn test_lenient_stops_at_first_non_hex() {
        // Only "12" is read
        assert_eq!(parse_hex_color("12zzzz"), Colour::rgb(0, 0, 0x12));
        // Short codes are read as plain integers, not expanded
        assert_eq!(parse_hex_color("#FFF"), Colour::rgb(0, 0x0F, 0xFF));
    }

    #[test]
    fn test_lenient_ignores_high_bits() {
        assert_eq!(parse_hex_color("FF112233"), Colour::rgb(0x11, 0x22, 0x33));
        // Overflow saturates
        assert_eq!(parse_hex_color("FFFFFFFFFFFFFFFFFF"), Colour::WHITE);
    }

    #[test]
    fn test_reparse_display_is_stable() {
        for input in ["#FFFFFF", "000000", "#ff8800", "zzzzzz", "#1A2B3C"] {
            let first = parse_hex_color(input);
            let again = parse_hex_color(&first.to_string());
            assert_eq!(first, again, "input {input}");
            assert_eq!(Colour::from_hex(&first.to_string()).unwrap(), first);
        }
    }

    #[test]
    fn test_from_hex_6digit() {
        let c = Colour::from_hex("#FF0000").unwrap();
        assert_eq!(c, Colour::rgb(255, 0, 0));

        let c = Colour::from_hex("1a1a2e").unwrap();
        assert_eq!(c, Colour::rgb(0x1a, 0x1a, 0x2e));
    }

    #[test]
    fn test_from_hex_short_forms() {
        assert_eq!(Colour::from_hex("#ABC").unwrap(), Colour::rgb(0xAA, 0xBB, 0xCC));
        assert_eq!(Colour::from_hex("#F008").unwrap(), Colour::new(255, 0, 0, 0x88));
        assert_eq!(Colour::from_hex("#FF000080").unwrap(), Colour::new(255, 0, 0, 128));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Colour::from_hex("zzzzzz").is_err());
        assert!(Colour::from_hex("#12345").is_err());
        assert!(Colour::from_hex("").is_err());
        assert!(Colour::from_hex("#ÄÄÄ").is_err());
        assert!("#GG0000".parse::<Colour>().is_err());
    }

    #[test]
    fn test_normalized_alpha() {
        let c = Colour::new(0, 0, 0, 0);
        assert_eq!(c.normalized().a, 0.0);
        assert!(!c.is_opaque());
        assert_eq!(Colour::CLEAR, c);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Colour::rgb(255, 0, 0)), "#FF0000");
        assert_eq!(format!("{}", Colour::new(255, 0, 0, 128)), "#FF000080");
    }

    #[test]
    fn test_display_snapshot() {
        let lines: Vec<String> = ["#abc", "#12345678", "0f0f0f"]
            .iter()
            .map(|code| format!("{code} -> {}", Colour::from_hex(code).unwrap()))
            .collect();
        insta::assert_snapshot!(lines.join("\n"), @r"
        #abc -> #AABBCC
        #12345678 -> #12345678
        0f0f0f -> #0F0F0F
        ");
    }

    #[test]
    fn test_to_srgb() {
        let srgb = Colour::WHITE.to_srgb();
        assert_eq!((srgb.red, srgb.green, srgb.blue), (1.0, 1.0, 1.0));
    }
}
