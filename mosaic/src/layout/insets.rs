//! Container geometry: content insets and the usable content width.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// Insets around the scrollable content.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeInsets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl EdgeInsets {
    pub const ZERO: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    /// Create insets with explicit values for each side.
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self { top, right, bottom, left }
    }

    /// Uniform insets on all sides.
    pub const fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Symmetric insets (horizontal, vertical).
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Total horizontal inset.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical inset.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    fn is_valid(&self) -> bool {
        [self.top, self.right, self.bottom, self.left]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// The host surface the layout is computed for.
///
/// Passed into every computation and size query; the engine never keeps a
/// reference to it, so the content width is always read fresh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Container {
    /// Width of the scrollable surface, insets included.
    pub width: f32,
    pub insets: EdgeInsets,
}

impl Container {
    pub const fn new(width: f32, insets: EdgeInsets) -> Self {
        Self { width, insets }
    }

    /// Width available to columns: container width minus horizontal insets.
    pub fn content_width(&self) -> f32 {
        self.width - self.insets.horizontal()
    }

    /// Reject geometry the column math cannot place items into.
    pub fn validate(&self) -> Result<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(LayoutError::InvalidContainer(format!(
                "width must be positive, got {}",
                self.width
            )));
        }
        if !self.insets.is_valid() {
            return Err(LayoutError::InvalidContainer(format!(
                "insets must be non-negative, got {:?}",
                self.insets
            )));
        }
        if self.content_width() <= 0.0 {
            return Err(LayoutError::InvalidContainer(format!(
                "horizontal insets {} leave no content width in {}",
                self.insets.horizontal(),
                self.width
            )));
        }
        Ok(())
    }
}
