//! Gallery configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! changes. Command-line flags are applied on top.

use std::path::Path;

use mosaic::{ColumnStrategy, EdgeInsets, Size, DEFAULT_CELL_PADDING, DEFAULT_COLUMN_COUNT};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Insets around the gallery content (top, right, bottom, left).
pub const DEFAULT_CONTENT_INSETS: EdgeInsets = EdgeInsets::new(23.0, 10.0, 10.0, 10.0);

/// Viewport used when none is configured.
pub const DEFAULT_VIEWPORT: Size = Size::new(390.0, 844.0);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Number of columns.
    pub column_count: usize,
    /// Inset applied to every side of each cell.
    pub cell_padding: f32,
    /// How items are assigned to columns.
    pub strategy: ColumnStrategy,
    /// Insets between the surface edges and the content.
    pub content_insets: EdgeInsets,
    /// Size of the visible surface.
    pub viewport: Size,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            column_count: DEFAULT_COLUMN_COUNT,
            cell_padding: DEFAULT_CELL_PADDING,
            strategy: ColumnStrategy::default(),
            content_insets: DEFAULT_CONTENT_INSETS,
            viewport: DEFAULT_VIEWPORT,
        }
    }
}

impl GalleryConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), ?config, "loaded gallery config");
        Ok(config)
    }
}
