//! Palette collection values.
//!
//! Palettes and their color entries are plain values. Reordering never
//! mutates in place; every edit returns a new sequence.

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::harmony::{ColorRole, DerivedPalette};
use crate::hex::HexColor;
use crate::notify::{Notification, NotificationBus};

/// A color stored in a palette.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorEntry {
    /// Unique identifier.
    pub id: Uuid,
    /// Canonical color.
    pub hex: HexColor,
    /// Display label.
    pub label: String,
    /// Semantic role.
    pub role: ColorRole,
}

impl ColorEntry {
    /// Create an entry with a fresh identifier.
    #[must_use]
    pub fn new(hex: HexColor, label: impl Into<String>, role: ColorRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            hex,
            label: label.into(),
            role,
        }
    }

    /// Create an entry from user input.
    pub fn parse(input: &str, label: impl Into<String>, role: ColorRole) -> Result<Self> {
        Ok(Self::new(HexColor::parse(input)?, label, role))
    }
}

/// A named, ordered collection of colors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    /// Unique identifier.
    pub id: Uuid,
    /// Palette name.
    pub name: String,
    /// Colors in display order.
    pub colors: Vec<ColorEntry>,
}

impl Palette {
    /// Create an empty palette with a fresh identifier.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            colors: Vec::new(),
        }
    }

    /// Create a palette holding a derived palette's entries in role order.
    #[must_use]
    pub fn from_derived(name: impl Into<String>, derived: &DerivedPalette) -> Self {
        Self {
            colors: derived
                .iter()
                .map(|e| ColorEntry::new(e.hex.clone(), e.label.clone(), e.role))
                .collect(),
            ..Self::new(name)
        }
    }

    /// Append a color.
    #[must_use]
    pub fn with_color(mut self, entry: ColorEntry) -> Self {
        self.colors.push(entry);
        self
    }

    /// Append a color from user input, reporting the outcome on `bus`.
    ///
    /// Malformed input leaves the palette unchanged.
    #[must_use]
    pub fn add_color(
        self,
        input: &str,
        label: &str,
        role: ColorRole,
        bus: &NotificationBus,
    ) -> Self {
        match ColorEntry::parse(input, label, role) {
            Ok(entry) => {
                bus.publish(&Notification::success(format!(
                    "Added {} to {}",
                    entry.hex, self.name
                )));
                self.with_color(entry)
            }
            Err(e) => {
                bus.publish(&Notification::error(e.to_string()));
                self
            }
        }
    }

    /// Copy with a new identifier and name; entries get new identifiers too.
    #[must_use]
    pub fn duplicate(&self, name: impl Into<String>) -> Self {
        Self {
            colors: self
                .colors
                .iter()
                .map(|c| ColorEntry::new(c.hex.clone(), c.label.clone(), c.role))
                .collect(),
            ..Self::new(name)
        }
    }

    /// Copy with the colors at `i` and `j` exchanged.
    pub fn with_colors_swapped(&self, i: usize, j: usize) -> Result<Self> {
        Ok(Self {
            colors: swap_at(&self.colors, i, j)?,
            ..self.clone()
        })
    }

    /// Copy with the color at `index` moved one place toward the front.
    pub fn with_color_moved_left(&self, index: usize) -> Result<Self> {
        Ok(Self {
            colors: move_left(&self.colors, index)?,
            ..self.clone()
        })
    }

    /// Copy with the color at `index` moved one place toward the back.
    pub fn with_color_moved_right(&self, index: usize) -> Result<Self> {
        Ok(Self {
            colors: move_right(&self.colors, index)?,
            ..self.clone()
        })
    }
}

fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::IndexOutOfBounds { index, len })
    }
}

/// New sequence with the items at `i` and `j` exchanged.
pub fn swap_at<T: Clone>(items: &[T], i: usize, j: usize) -> Result<Vec<T>> {
    check_index(i, items.len())?;
    check_index(j, items.len())?;

    let mut out = items.to_vec();
    out.swap(i, j);
    Ok(out)
}

/// New sequence with the item at `index` swapped with its left neighbor.
///
/// The first item stays in place.
pub fn move_left<T: Clone>(items: &[T], index: usize) -> Result<Vec<T>> {
    check_index(index, items.len())?;
    swap_at(items, index, index.saturating_sub(1))
}

/// New sequence with the item at `index` swapped with its right neighbor.
///
/// The last item stays in place.
pub fn move_right<T: Clone>(items: &[T], index: usize) -> Result<Vec<T>> {
    check_index(index, items.len())?;
    swap_at(items, index, (index + 1).min(items.len() - 1))
}
