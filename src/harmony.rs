//! Harmonious five-role palettes derived from a single base color.
//!
//! All derivations happen in HSL space:
//!
//! | Role       | Hue            | Saturation           | Lightness          |
//! |------------|----------------|----------------------|--------------------|
//! | primary    | base           | base                 | base               |
//! | accent     | base + 180     | base                 | base               |
//! | background | base           | `max(10, s × 0.2)`   | 95                 |
//! | text       | base           | `min(15, s × 0.3)`   | 15                 |
//! | other      | base + 30      | `clamp(s, 40, 80)`   | `clamp(l + 10, 35, 65)` |
//!
//! Malformed input yields a fixed fallback palette with the same roles in
//! the same order.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::color::{Hsl, Rgb};
use crate::error::{Error, Result};
use crate::hex::HexColor;

/// Number of entries in a derived palette.
pub const PALETTE_SIZE: usize = 5;

/// Semantic role of a color within a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ColorRole {
    /// Main brand color.
    Primary,
    /// Highlight color.
    Accent,
    /// Page or surface background.
    Background,
    /// Body text.
    Text,
    /// Anything else.
    #[default]
    Other,
}

impl ColorRole {
    /// Every role, in derived-palette order.
    pub const ALL: [Self; PALETTE_SIZE] = [
        Self::Primary,
        Self::Accent,
        Self::Background,
        Self::Text,
        Self::Other,
    ];

    /// Lowercase tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Accent => "accent",
            Self::Background => "background",
            Self::Text => "text",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::ConfigInvalid {
                key: "role".to_string(),
                message: format!("unknown color role {s:?}"),
            })
    }
}

/// One color of a derived palette.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaletteEntry {
    /// Canonical color.
    pub hex: HexColor,
    /// Display label.
    pub label: String,
    /// Semantic role.
    pub role: ColorRole,
}

impl PaletteEntry {
    /// Create an entry.
    #[must_use]
    pub fn new(hex: HexColor, label: impl Into<String>, role: ColorRole) -> Self {
        Self {
            hex,
            label: label.into(),
            role,
        }
    }
}

/// Five entries in role order: primary, accent, background, text, other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedPalette {
    entries: [PaletteEntry; PALETTE_SIZE],
    fallback: bool,
}

impl DerivedPalette {
    fn from_colors(colors: [HexColor; PALETTE_SIZE], fallback: bool) -> Self {
        let [primary, accent, background, text, other] = colors;
        Self {
            entries: [
                PaletteEntry::new(primary, "Primary", ColorRole::Primary),
                PaletteEntry::new(accent, "Accent", ColorRole::Accent),
                PaletteEntry::new(background, "Background", ColorRole::Background),
                PaletteEntry::new(text, "Text", ColorRole::Text),
                PaletteEntry::new(other, "Secondary", ColorRole::Other),
            ],
            fallback,
        }
    }

    /// Entries in role order.
    #[must_use]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Entry for `role`.
    #[must_use]
    pub fn get(&self, role: ColorRole) -> &PaletteEntry {
        let index = ColorRole::ALL
            .iter()
            .position(|&r| r == role)
            .unwrap_or(PALETTE_SIZE - 1);
        &self.entries[index]
    }

    /// Color for `role`.
    #[must_use]
    pub fn color(&self, role: ColorRole) -> &HexColor {
        &self.get(role).hex
    }

    /// True when this is the fixed palette returned for malformed input.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Iterate entries in role order.
    pub fn iter(&self) -> std::slice::Iter<'_, PaletteEntry> {
        self.entries.iter()
    }

    /// Consume into a vector of entries.
    #[must_use]
    pub fn into_vec(self) -> Vec<PaletteEntry> {
        self.entries.into()
    }
}

impl<'a> IntoIterator for &'a DerivedPalette {
    type Item = &'a PaletteEntry;
    type IntoIter = std::slice::Iter<'a, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The fixed palette returned for malformed input.
#[must_use]
pub fn fallback_palette() -> DerivedPalette {
    DerivedPalette::from_colors(
        [
            Rgb::new(0x3B, 0x82, 0xF6).to_hex(),
            Rgb::new(0xF5, 0x9E, 0x0B).to_hex(),
            Rgb::new(0xF8, 0xFA, 0xFC).to_hex(),
            Rgb::new(0x1E, 0x29, 0x3B).to_hex(),
            Rgb::new(0x8B, 0x5C, 0xF6).to_hex(),
        ],
        true,
    )
}

/// Parameters of the role derivations.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct HarmonyRules {
    /// Hue rotation of the accent (complementary) color.
    pub complement_offset: f64,
    /// Hue rotation of the secondary (analogous) color.
    pub analogous_offset: f64,
    /// Fixed lightness of the background.
    pub background_lightness: f64,
    /// Lower bound of the background saturation.
    pub background_saturation_floor: f64,
    /// Background saturation as a fraction of the base saturation.
    pub background_saturation_factor: f64,
    /// Fixed lightness of the text color.
    pub text_lightness: f64,
    /// Upper bound of the text saturation.
    pub text_saturation_cap: f64,
    /// Text saturation as a fraction of the base saturation.
    pub text_saturation_factor: f64,
    /// Clamp range of the secondary saturation.
    pub secondary_saturation: (f64, f64),
    /// Lightness added to the base for the secondary color.
    pub secondary_lightness_shift: f64,
    /// Clamp range of the secondary lightness.
    pub secondary_lightness: (f64, f64),
}

impl Default for HarmonyRules {
    fn default() -> Self {
        Self {
            complement_offset: 180.0,
            analogous_offset: 30.0,
            background_lightness: 95.0,
            background_saturation_floor: 10.0,
            background_saturation_factor: 0.2,
            text_lightness: 15.0,
            text_saturation_cap: 15.0,
            text_saturation_factor: 0.3,
            secondary_saturation: (40.0, 80.0),
            secondary_lightness_shift: 10.0,
            secondary_lightness: (35.0, 65.0),
        }
    }
}

impl HarmonyRules {
    /// Check that every value is usable.
    pub fn validate(&self) -> Result<()> {
        let percents = [
            ("harmony.background_lightness", self.background_lightness),
            ("harmony.background_saturation_floor", self.background_saturation_floor),
            ("harmony.text_lightness", self.text_lightness),
            ("harmony.text_saturation_cap", self.text_saturation_cap),
        ];
        for (key, value) in percents {
            if !(0.0..=100.0).contains(&value) {
                return Err(invalid(key, format!("{value} is outside [0, 100]")));
            }
        }

        let factors = [
            ("harmony.background_saturation_factor", self.background_saturation_factor),
            ("harmony.text_saturation_factor", self.text_saturation_factor),
        ];
        for (key, value) in factors {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(key, format!("{value} must be a non-negative number")));
            }
        }

        let offsets = [
            ("harmony.complement_offset", self.complement_offset),
            ("harmony.analogous_offset", self.analogous_offset),
            ("harmony.secondary_lightness_shift", self.secondary_lightness_shift),
        ];
        for (key, value) in offsets {
            if !value.is_finite() {
                return Err(invalid(key, format!("{value} must be finite")));
            }
        }

        let ranges = [
            ("harmony.secondary_saturation", self.secondary_saturation),
            ("harmony.secondary_lightness", self.secondary_lightness),
        ];
        for (key, (min, max)) in ranges {
            if !(0.0..=100.0).contains(&min) || !(0.0..=100.0).contains(&max) || min > max {
                return Err(invalid(
                    key,
                    format!("[{min}, {max}] must be an ordered range within [0, 100]"),
                ));
            }
        }

        Ok(())
    }
}

fn invalid(key: &str, message: String) -> Error {
    Error::ConfigInvalid {
        key: key.to_string(),
        message,
    }
}

/// Derives role palettes from a base color.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaletteDeriver {
    rules: HarmonyRules,
}

impl PaletteDeriver {
    /// Create a deriver with custom rules.
    pub fn new(rules: HarmonyRules) -> Result<Self> {
        rules.validate()?;
        Ok(Self { rules })
    }

    /// The rules in use.
    #[must_use]
    pub const fn rules(&self) -> &HarmonyRules {
        &self.rules
    }

    /// Derive from a canonical base color. The primary entry is the base itself.
    #[must_use]
    pub fn derive(&self, base: &HexColor) -> DerivedPalette {
        let rules = &self.rules;
        let hsl = base.to_rgb().to_hsl();

        let accent = hsl.rotate(rules.complement_offset);

        let background = Hsl::new(
            hsl.h,
            rules
                .background_saturation_floor
                .max(hsl.s * rules.background_saturation_factor),
            rules.background_lightness,
        );

        let text = Hsl::new(
            hsl.h,
            rules
                .text_saturation_cap
                .min(hsl.s * rules.text_saturation_factor),
            rules.text_lightness,
        );

        let (s_min, s_max) = rules.secondary_saturation;
        let (l_min, l_max) = rules.secondary_lightness;
        let secondary = hsl
            .rotate(rules.analogous_offset)
            .with_saturation(hsl.s.clamp(s_min, s_max))
            .with_lightness((hsl.l + rules.secondary_lightness_shift).clamp(l_min, l_max));

        DerivedPalette::from_colors(
            [
                base.clone(),
                accent.to_hex(),
                background.to_hex(),
                text.to_hex(),
                secondary.to_hex(),
            ],
            false,
        )
    }

    /// Derive from a color string; malformed input yields [`fallback_palette`].
    #[must_use]
    pub fn derive_from_str(&self, input: &str) -> DerivedPalette {
        match HexColor::normalize(input) {
            Some(base) => self.derive(&base),
            None => {
                debug!(input, "invalid base color, using fallback palette");
                fallback_palette()
            }
        }
    }
}

/// Five-role palette for a color string with the default rules.
#[must_use]
pub fn generate_palette_from_base(hex: &str) -> DerivedPalette {
    PaletteDeriver::default().derive_from_str(hex)
}
