//! Luminance-based light/dark classification for contrast decisions.

use std::fmt;

use tracing::debug;

use crate::color::Rgb;
use crate::hex::HexColor;

/// Light/dark classification of a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Brightness {
    /// Perceived luminance strictly above one half.
    Light,
    /// Everything else, including malformed input.
    Dark,
}

impl Brightness {
    /// Classify a perceived luminance in `[0, 1]`.
    ///
    /// Exactly `0.5` is dark.
    #[must_use]
    pub fn from_luminance(luminance: f64) -> Self {
        if luminance > 0.5 {
            Self::Light
        } else {
            Self::Dark
        }
    }

    /// Lowercase name, as exposed to the UI layer.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Returns true for [`Brightness::Light`].
    #[must_use]
    pub const fn is_light(self) -> bool {
        matches!(self, Self::Light)
    }

    /// Text color that reads on a background of this brightness.
    #[must_use]
    pub fn contrasting_text(self) -> HexColor {
        match self {
            Self::Light => HexColor::from_rgb(Rgb::BLACK),
            Self::Dark => HexColor::from_rgb(Rgb::WHITE),
        }
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weighted (Rec. 601) luminance of an RGB color, in `[0, 1]`.
#[must_use]
pub fn perceived_luminance(rgb: Rgb) -> f64 {
    (0.299 * f64::from(rgb.r) + 0.587 * f64::from(rgb.g) + 0.114 * f64::from(rgb.b)) / 255.0
}

/// Classify a canonical color.
#[must_use]
pub fn classify(hex: &HexColor) -> Brightness {
    Brightness::from_luminance(perceived_luminance(hex.to_rgb()))
}

/// Classify a color string; malformed input is [`Brightness::Dark`].
#[must_use]
pub fn color_brightness(hex: &str) -> Brightness {
    match HexColor::normalize(hex) {
        Some(hex) => classify(&hex),
        None => {
            debug!(input = hex, "invalid color, defaulting brightness to dark");
            Brightness::Dark
        }
    }
}
