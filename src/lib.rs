//! # Swatchbook
//!
//! Color-derivation engine for palette managers.
//!
//! Turns a single base color into a harmonious five-role palette and a
//! twelve-step shade ramp, on top of a hex codec and RGB/HSL conversions
//! whose rounding is reproduced exactly, so the same input yields the same
//! colors everywhere.
//!
//! ## Features
//!
//! - **Pure**: every operation is a total function of its input; no I/O, no shared state
//! - **Forgiving**: malformed input maps to `None`, an empty ramp, `dark`, or a fixed fallback palette
//! - **Configurable**: shade schedule and harmony rules load from YAML
//! - **Browser-ready**: optional WebAssembly bindings with the JavaScript API names
//!
//! ## Quick Start
//!
//! ```rust
//! use swatchbook::prelude::*;
//!
//! assert_eq!(normalize_hex("#abc").unwrap(), "#AABBCC");
//!
//! let palette = generate_palette_from_base("#FF0000");
//! assert_eq!(palette.color(ColorRole::Accent), "#00FFFF");
//!
//! let ramp = generate_shades("#3B82F6");
//! assert_eq!(ramp.len(), 12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization of colors, roles, palettes
//! - `config`: YAML configuration (default)
//! - `wasm`: WebAssembly bindings
//! - `full`: All features except `wasm`

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in color code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::float_cmp)]

// ============================================================================
// Core Modules
// ============================================================================

/// Hexadecimal color codec.
pub mod hex;

/// Color types and color space conversions.
pub mod color;

/// Light/dark classification.
pub mod brightness;

/// Shade ramp generation.
pub mod shades;

/// Five-role palette derivation.
pub mod harmony;

// ============================================================================
// Collection Modules
// ============================================================================

/// Palette collection values and reordering.
pub mod collection;

/// Notification fan-out.
pub mod notify;

// ============================================================================
// Optional Modules
// ============================================================================

/// YAML configuration of the derivation engines.
#[cfg(feature = "config")]
#[cfg_attr(docsrs, doc(cfg(feature = "config")))]
pub mod config;

/// WebAssembly bindings for browser usage.
#[cfg(feature = "wasm")]
#[cfg_attr(docsrs, doc(cfg(feature = "wasm")))]
pub mod wasm;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for swatchbook operations.
pub mod error;

pub use brightness::{color_brightness, Brightness};
pub use color::{hsl_to_rgb, rgb_to_hsl, Hsl, Rgb};
pub use error::{Error, Result};
pub use harmony::{generate_palette_from_base, ColorRole, DerivedPalette, PaletteEntry};
pub use hex::{hex_to_rgb, normalize_hex, rgb_to_hex, HexColor};
pub use shades::{generate_shades, ShadeRamp};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use swatchbook::prelude::*;
/// ```
pub mod prelude {
    pub use crate::brightness::{color_brightness, Brightness};
    pub use crate::collection::{ColorEntry, Palette};
    pub use crate::color::{Hsl, Rgb};
    pub use crate::error::{Error, Result};
    pub use crate::harmony::{
        generate_palette_from_base, ColorRole, DerivedPalette, HarmonyRules, PaletteDeriver,
        PaletteEntry,
    };
    pub use crate::hex::{hex_to_rgb, normalize_hex, rgb_to_hex, HexColor};
    pub use crate::notify::{Notification, NotificationBus, NotificationSink};
    pub use crate::shades::{generate_shades, ShadeGenerator, ShadeSchedule};

    #[cfg(feature = "config")]
    pub use crate::config::Config;
}
