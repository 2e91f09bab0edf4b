//! Color types and color space conversions.
//!
//! Provides 8-bit RGB and floating-point HSL representations with the
//! conversions between them. All arithmetic runs in `f64` and every
//! quantization step rounds half away from zero, so results match the
//! reference rounding bit for bit.
//!
//! # References
//!
//! - Joblove, G. H., & Greenberg, D. (1978). "Color Spaces for Computer Graphics."
//!   *SIGGRAPH '78*, 20-25.

use crate::hex::HexColor;

/// RGB color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl Rgb {
    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Red.
    pub const RED: Self = Self::new(255, 0, 0);
    /// Green.
    pub const GREEN: Self = Self::new(0, 255, 0);
    /// Blue.
    pub const BLUE: Self = Self::new(0, 0, 255);

    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Encode as a canonical `#RRGGBB` string.
    #[must_use]
    pub fn to_hex(self) -> HexColor {
        HexColor::from_rgb(self)
    }

    /// Convert to HSL with whole-number components.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }

    /// Largest per-channel distance to another color.
    #[must_use]
    pub fn max_channel_diff(self, other: Self) -> u8 {
        self.r
            .abs_diff(other.r)
            .max(self.g.abs_diff(other.g))
            .max(self.b.abs_diff(other.b))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(arr: [u8; 3]) -> Self {
        Self::from_array(arr)
    }
}

/// HSL color.
///
/// Hue is in degrees and wraps at 360. Saturation and lightness are
/// percentages in `[0, 100]`. Triples produced by [`rgb_to_hsl`] hold whole
/// numbers; derived triples may carry fractional saturation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    /// Hue (0.0-360.0 degrees).
    pub h: f64,
    /// Saturation (0.0-100.0 percent).
    pub s: f64,
    /// Lightness (0.0-100.0 percent).
    pub l: f64,
}

impl Hsl {
    /// Create a new HSL color.
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Rotate the hue by `degrees`, wrapping into `[0, 360)`.
    #[must_use]
    pub fn rotate(self, degrees: f64) -> Self {
        Self {
            h: (self.h + degrees).rem_euclid(360.0),
            ..self
        }
    }

    /// Replace the saturation.
    #[must_use]
    pub const fn with_saturation(self, s: f64) -> Self {
        Self { s, ..self }
    }

    /// Replace the lightness.
    #[must_use]
    pub const fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    /// Convert to RGB.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self)
    }

    /// Convert to a canonical hex string.
    #[must_use]
    pub fn to_hex(self) -> HexColor {
        hsl_to_rgb(self).to_hex()
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl_to_rgb(hsl)
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        rgb_to_hsl(rgb)
    }
}

/// Round half away from zero.
///
/// Same result as `Math.round` for every non-negative input, which is the
/// only domain the converters feed it.
#[inline]
#[must_use]
pub fn round_half_away(x: f64) -> f64 {
    x.round()
}

/// Scale a unit-interval channel to `0..=255`.
#[inline]
fn unit_to_channel(v: f64) -> u8 {
    // `as` saturates and maps NaN to 0.
    round_half_away(v * 255.0).clamp(0.0, 255.0) as u8
}

/// Convert RGB to HSL.
///
/// Hue is rounded to a whole degree and wrapped into `[0, 360)`; saturation
/// and lightness are rounded to whole percents. Grays have hue and
/// saturation 0.
#[must_use]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        // Fraction of a full turn; red wins ties, then green.
        let h = if max == r {
            ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
        } else if max == g {
            ((b - r) / d + 2.0) / 6.0
        } else {
            ((r - g) / d + 4.0) / 6.0
        };

        (h, s)
    };

    Hsl::new(
        round_half_away(h * 360.0).rem_euclid(360.0),
        round_half_away(s * 100.0),
        round_half_away(l * 100.0),
    )
}

/// Convert HSL to RGB.
///
/// Hue wraps modulo 360; saturation and lightness are clamped to
/// `[0, 100]`. Each channel is rounded half away from zero.
#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h.rem_euclid(360.0) / 360.0;
    let s = hsl.s.clamp(0.0, 100.0) / 100.0;
    let l = hsl.l.clamp(0.0, 100.0) / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 {
            l * (1.0 + s)
        } else {
            l + s - l * s
        };
        let p = 2.0 * l - q;

        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    Rgb::new(unit_to_channel(r), unit_to_channel(g), unit_to_channel(b))
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn assert_hsl(hsl: Hsl, h: f64, s: f64, l: f64) {
        assert_relative_eq!(hsl.h, h);
        assert_relative_eq!(hsl.s, s);
        assert_relative_eq!(hsl.l, l);
    }

    #[test]
    fn test_rgb_constants() {
        assert_eq!(Rgb::BLACK, Rgb::new(0, 0, 0));
        assert_eq!(Rgb::WHITE, Rgb::new(255, 255, 255));
        assert_eq!(Rgb::RED.r, 255);
        assert_eq!(Rgb::GREEN.g, 255);
        assert_eq!(Rgb::BLUE.b, 255);
    }

    #[test]
    fn test_rgb_to_array_from_array() {
        let color = Rgb::new(10, 20, 30);
        let arr = color.to_array();
        assert_eq!(arr, [10, 20, 30]);
        assert_eq!(Rgb::from_array(arr), color);
        assert_eq!(Rgb::from(arr), color);
    }

    #[test]
    fn test_rgb_to_hsl_primaries() {
        assert_hsl(rgb_to_hsl(Rgb::RED), 0.0, 100.0, 50.0);
        assert_hsl(rgb_to_hsl(Rgb::GREEN), 120.0, 100.0, 50.0);
        assert_hsl(rgb_to_hsl(Rgb::BLUE), 240.0, 100.0, 50.0);
        assert_hsl(rgb_to_hsl(Rgb::new(255, 0, 255)), 300.0, 100.0, 50.0);
    }

    #[test]
    fn test_rgb_to_hsl_achromatic() {
        assert_hsl(rgb_to_hsl(Rgb::BLACK), 0.0, 0.0, 0.0);
        assert_hsl(rgb_to_hsl(Rgb::WHITE), 0.0, 0.0, 100.0);
        assert_hsl(rgb_to_hsl(Rgb::new(128, 128, 128)), 0.0, 0.0, 50.0);
    }

    #[test]
    fn test_rgb_to_hsl_reference_colors() {
        // #3B82F6
        assert_hsl(rgb_to_hsl(Rgb::new(0x3B, 0x82, 0xF6)), 217.0, 91.0, 60.0);
        // #AABBCC
        assert_hsl(rgb_to_hsl(Rgb::new(0xAA, 0xBB, 0xCC)), 210.0, 25.0, 73.0);
        // #123456 (l < 0.5 saturation branch)
        assert_hsl(rgb_to_hsl(Rgb::new(0x12, 0x34, 0x56)), 210.0, 65.0, 20.0);
    }

    #[test]
    fn test_rgb_to_hsl_hue_wraps_below_360() {
        // 359.76 rounds to 360 and wraps to 0
        assert_hsl(rgb_to_hsl(Rgb::new(255, 0, 1)), 0.0, 100.0, 50.0);
        assert_hsl(rgb_to_hsl(Rgb::new(255, 0, 3)), 359.0, 100.0, 50.0);
    }

    #[test]
    fn test_hsl_to_rgb_primaries() {
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 100.0, 50.0)), Rgb::RED);
        assert_eq!(hsl_to_rgb(Hsl::new(120.0, 100.0, 50.0)), Rgb::GREEN);
        assert_eq!(hsl_to_rgb(Hsl::new(240.0, 100.0, 50.0)), Rgb::BLUE);
        assert_eq!(hsl_to_rgb(Hsl::new(180.0, 100.0, 50.0)), Rgb::new(0, 255, 255));
    }

    #[test]
    fn test_hsl_to_rgb_gray_rounds_half_away() {
        // 0.5 * 255 = 127.5 rounds up
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 0.0, 50.0)), Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_hsl_to_rgb_low_lightness() {
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 100.0, 25.0)), Rgb::new(128, 0, 0));
    }

    #[test]
    fn test_hsl_to_rgb_high_hue() {
        // h=300 pushes the red offset past a full turn
        assert_eq!(hsl_to_rgb(Hsl::new(300.0, 100.0, 50.0)), Rgb::new(255, 0, 255));
    }

    #[test]
    fn test_hsl_to_rgb_hue_wraps() {
        assert_eq!(
            hsl_to_rgb(Hsl::new(360.0, 100.0, 50.0)),
            hsl_to_rgb(Hsl::new(0.0, 100.0, 50.0))
        );
        assert_eq!(
            hsl_to_rgb(Hsl::new(-120.0, 100.0, 50.0)),
            hsl_to_rgb(Hsl::new(240.0, 100.0, 50.0))
        );
    }

    #[test]
    fn test_hsl_to_rgb_clamps_out_of_range() {
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 0.0, 150.0)), Rgb::WHITE);
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 0.0, -10.0)), Rgb::BLACK);
    }

    #[test]
    fn test_hsl_rotate() {
        let hsl = Hsl::new(200.0, 50.0, 50.0).rotate(180.0);
        assert_relative_eq!(hsl.h, 20.0);
        let back = hsl.rotate(-40.0);
        assert_relative_eq!(back.h, 340.0);
    }

    #[test]
    fn test_from_traits() {
        let rgb: Rgb = Hsl::new(0.0, 100.0, 50.0).into();
        assert_eq!(rgb, Rgb::RED);
        let hsl: Hsl = Rgb::BLUE.into();
        assert_relative_eq!(hsl.h, 240.0);
    }

    #[test]
    fn test_round_half_away() {
        assert_relative_eq!(round_half_away(0.5), 1.0);
        assert_relative_eq!(round_half_away(2.5), 3.0);
        assert_relative_eq!(round_half_away(-2.5), -3.0);
        assert_relative_eq!(round_half_away(2.4), 2.0);
    }

    #[test]
    fn test_max_channel_diff() {
        assert_eq!(Rgb::new(10, 20, 30).max_channel_diff(Rgb::new(12, 19, 30)), 2);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn prop_rgb_to_hsl_in_range(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let hsl = rgb_to_hsl(Rgb::new(r, g, b));
            prop_assert!((0.0..360.0).contains(&hsl.h));
            prop_assert!((0.0..=100.0).contains(&hsl.s));
            prop_assert!((0.0..=100.0).contains(&hsl.l));
            prop_assert_eq!(hsl.h.fract(), 0.0);
            prop_assert_eq!(hsl.s.fract(), 0.0);
            prop_assert_eq!(hsl.l.fract(), 0.0);
        }

        /// Grays survive the round trip within one step.
        #[test]
        fn prop_gray_round_trip_within_one(v in any::<u8>()) {
            let gray = Rgb::new(v, v, v);
            prop_assert!(gray.max_channel_diff(rgb_to_hsl(gray).to_rgb()) <= 1);
        }

        /// Whole-degree/whole-percent quantization bounds the drift at 5.
        #[test]
        fn prop_round_trip_drift_bounded(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let rgb = Rgb::new(r, g, b);
            prop_assert!(rgb.max_channel_diff(rgb_to_hsl(rgb).to_rgb()) <= 5);
        }
    }
}
