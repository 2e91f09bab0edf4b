//! Hexadecimal color codec.
//!
//! Parses, validates, and normalizes `#RRGGBB` strings. A [`HexColor`] can
//! only be built through normalization or from an [`Rgb`], so every value
//! of the type is in canonical form: `#` followed by six uppercase digits.

use std::fmt;
use std::str::FromStr;

use crate::color::{round_half_away, Rgb};
use crate::error::{Error, Result};

/// A canonical `#RRGGBB` color string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct HexColor(String);

impl HexColor {
    /// Normalize `input`, returning `None` when it is not a color.
    ///
    /// Accepts `RGB`, `#RGB`, `RRGGBB` and `#RRGGBB` in any case, with
    /// surrounding whitespace. Shorthand digits are doubled.
    #[must_use]
    pub fn normalize(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return None,
        };

        if expanded.len() != 6 {
            return None;
        }

        Some(Self(format!("#{}", expanded.to_ascii_uppercase())))
    }

    /// Parse `input`, reporting malformed colors as [`Error::InvalidColor`].
    pub fn parse(input: &str) -> Result<Self> {
        Self::normalize(input).ok_or_else(|| Error::InvalidColor(input.to_string()))
    }

    /// Encode an RGB triple.
    #[must_use]
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self(format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b))
    }

    /// Decode into an RGB triple.
    #[must_use]
    pub fn to_rgb(&self) -> Rgb {
        let digits = &self.0[1..];
        Rgb::new(
            channel(&digits[0..2]),
            channel(&digits[2..4]),
            channel(&digits[4..6]),
        )
    }

    /// The canonical string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the canonical string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

// Digits are validated on construction.
fn channel(pair: &str) -> u8 {
    u8::from_str_radix(pair, 16).unwrap_or_default()
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for HexColor {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for HexColor {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl FromStr for HexColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for HexColor {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for HexColor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(hex: HexColor) -> Self {
        hex.0
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl From<&HexColor> for Rgb {
    fn from(hex: &HexColor) -> Self {
        hex.to_rgb()
    }
}

/// Normalize a color string to canonical `#RRGGBB`, or `None` if malformed.
#[must_use]
pub fn normalize_hex(input: &str) -> Option<HexColor> {
    HexColor::normalize(input)
}

/// Decode a color string to RGB, or `None` if malformed.
///
/// Never decodes partially: either all three channels or nothing.
#[must_use]
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    HexColor::normalize(hex).map(|h| h.to_rgb())
}

/// Encode arbitrary numeric channels as canonical hex.
///
/// Each channel is clamped to `[0, 255]` then rounded half away from zero.
/// Never fails; NaN encodes as 0.
#[must_use]
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> HexColor {
    HexColor::from_rgb(Rgb::new(clamp_channel(r), clamp_channel(g), clamp_channel(b)))
}

fn clamp_channel(v: f64) -> u8 {
    round_half_away(v.clamp(0.0, 255.0)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_six_digits() {
        assert_eq!(normalize_hex("#3b82f6").unwrap(), "#3B82F6");
        assert_eq!(normalize_hex("3B82F6").unwrap(), "#3B82F6");
    }

    #[test]
    fn test_normalize_shorthand() {
        assert_eq!(normalize_hex("#abc").unwrap(), "#AABBCC");
        assert_eq!(normalize_hex("abc").unwrap(), "#AABBCC");
        assert_eq!(normalize_hex("#abc"), normalize_hex("#aabbcc"));
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(normalize_hex("  #ff0000\n").unwrap(), "#FF0000");
        assert_eq!(normalize_hex("\tfff ").unwrap(), "#FFFFFF");
    }

    #[test]
    fn test_normalize_rejects_malformed() {
        assert!(normalize_hex("").is_none());
        assert!(normalize_hex("#").is_none());
        assert!(normalize_hex("#12345").is_none());
        assert!(normalize_hex("#1234567").is_none());
        assert!(normalize_hex("#gggggg").is_none());
        assert!(normalize_hex("##abc").is_none());
        assert!(normalize_hex("#ab c").is_none());
        assert!(normalize_hex("not-a-color").is_none());
        assert!(normalize_hex("#ÄBC").is_none());
    }

    #[test]
    fn test_normalize_canonical_is_noop() {
        let canonical = normalize_hex("#A1B2C3").unwrap();
        assert_eq!(normalize_hex(canonical.as_str()).unwrap(), canonical);
    }

    #[test]
    fn test_parse_error() {
        let err = HexColor::parse("#xyz").unwrap_err();
        assert_eq!(err, Error::InvalidColor("#xyz".to_string()));
        assert!("#12".parse::<HexColor>().is_err());
        assert!(HexColor::try_from("fff").is_ok());
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#FF8000"), Some(Rgb::new(255, 128, 0)));
        assert_eq!(hex_to_rgb("#abc"), Some(Rgb::new(0xAA, 0xBB, 0xCC)));
        assert_eq!(hex_to_rgb("#12"), None);
    }

    #[test]
    fn test_rgb_to_hex_pads_and_uppercases() {
        assert_eq!(rgb_to_hex(0.0, 10.0, 255.0), "#000AFF");
        assert_eq!(HexColor::from_rgb(Rgb::new(1, 2, 3)), "#010203");
    }

    #[test]
    fn test_rgb_to_hex_clamps_and_rounds() {
        assert_eq!(rgb_to_hex(-20.0, 300.0, 127.5), "#00FF80");
        assert_eq!(rgb_to_hex(0.49, 0.5, 254.6), "#0001FF");
        assert_eq!(rgb_to_hex(f64::NAN, f64::INFINITY, f64::NEG_INFINITY), "#00FF00");
    }

    #[test]
    fn test_display_and_into_string() {
        let hex = HexColor::from_rgb(Rgb::RED);
        assert_eq!(hex.to_string(), "#FF0000");
        assert_eq!(String::from(hex.clone()), "#FF0000");
        assert_eq!(hex.into_string(), "#FF0000");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn prop_normalize_idempotent(s in "\\s{0,2}#?[0-9a-fA-F]{3,6}\\s{0,2}") {
            if let Some(once) = normalize_hex(&s) {
                let twice = normalize_hex(once.as_str());
                prop_assert_eq!(twice, Some(once));
            }
        }

        #[test]
        fn prop_normalize_never_panics(s in ".*") {
            if let Some(hex) = normalize_hex(&s) {
                prop_assert_eq!(hex.as_str().len(), 7);
                prop_assert!(hex.as_str().starts_with('#'));
            }
        }

        #[test]
        fn prop_rgb_hex_round_trip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let hex = rgb_to_hex(f64::from(r), f64::from(g), f64::from(b));
            prop_assert_eq!(hex_to_rgb(hex.as_str()), Some(Rgb::new(r, g, b)));
        }
    }
}
