//! Shade ramps: a color's variants differing only in lightness.
//!
//! Hue and saturation of the base color are held fixed while lightness
//! steps through a schedule from light to dark. The default schedule uses
//! 10-point steps through the midtones and 5-point steps at the dark end.

use tracing::debug;

use crate::error::{Error, Result};
use crate::hex::HexColor;

/// Number of shades in the default ramp.
pub const SHADE_COUNT: usize = 12;

/// Default lightness schedule, lightest first.
pub const DEFAULT_LIGHTNESS_SCHEDULE: [f64; SHADE_COUNT] =
    [95.0, 85.0, 75.0, 65.0, 55.0, 45.0, 35.0, 25.0, 20.0, 15.0, 10.0, 5.0];

/// Ordered shades of one color, index 0 lightest.
pub type ShadeRamp = Vec<HexColor>;

/// A validated lightness schedule.
///
/// Non-empty, every value in `[0, 100]`, and non-increasing so the ramp
/// always runs light to dark.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadeSchedule {
    lightness: Vec<f64>,
}

impl ShadeSchedule {
    /// Validate a custom schedule.
    pub fn new(lightness: Vec<f64>) -> Result<Self> {
        if lightness.is_empty() {
            return Err(invalid("schedule must not be empty"));
        }

        if let Some(bad) = lightness.iter().find(|l| !(0.0..=100.0).contains(*l)) {
            return Err(invalid(format!("lightness {bad} is outside [0, 100]")));
        }

        if let Some(pair) = lightness.windows(2).find(|w| w[1] > w[0]) {
            return Err(invalid(format!(
                "lightness must not increase ({} followed by {})",
                pair[0], pair[1]
            )));
        }

        Ok(Self { lightness })
    }

    /// Lightness values in ramp order.
    #[must_use]
    pub fn lightness(&self) -> &[f64] {
        &self.lightness
    }

    /// Number of shades produced.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lightness.len()
    }

    /// Always false for a validated schedule.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lightness.is_empty()
    }
}

impl Default for ShadeSchedule {
    fn default() -> Self {
        Self {
            lightness: DEFAULT_LIGHTNESS_SCHEDULE.to_vec(),
        }
    }
}

fn invalid(message: impl Into<String>) -> Error {
    Error::ConfigInvalid {
        key: "shades.lightness".to_string(),
        message: message.into(),
    }
}

/// Generates shade ramps against a lightness schedule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShadeGenerator {
    schedule: ShadeSchedule,
}

impl ShadeGenerator {
    /// Create a generator for a custom schedule.
    #[must_use]
    pub fn new(schedule: ShadeSchedule) -> Self {
        Self { schedule }
    }

    /// The schedule in use.
    #[must_use]
    pub fn schedule(&self) -> &ShadeSchedule {
        &self.schedule
    }

    /// Ramp for a canonical base color.
    #[must_use]
    pub fn ramp(&self, base: &HexColor) -> ShadeRamp {
        let hsl = base.to_rgb().to_hsl();
        self.schedule
            .lightness()
            .iter()
            .map(|&l| hsl.with_lightness(l).to_hex())
            .collect()
    }

    /// Ramp for a color string; malformed input yields an empty ramp.
    #[must_use]
    pub fn generate(&self, input: &str) -> ShadeRamp {
        match HexColor::normalize(input) {
            Some(base) => self.ramp(&base),
            None => {
                debug!(input, "invalid color, no shades generated");
                Vec::new()
            }
        }
    }
}

/// Default 12-step ramp for a color string, empty if malformed.
#[must_use]
pub fn generate_shades(hex: &str) -> ShadeRamp {
    ShadeGenerator::default().generate(hex)
}
