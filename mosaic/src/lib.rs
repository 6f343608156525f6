//! Mosaic: masonry layout for photo galleries
//!
//! Mosaic places items of varying height into a fixed number of equal-width
//! columns and caches the resulting frames, so a scroll surface can ask which
//! cells intersect its viewport without re-running the layout every frame.
//!
//! # Usage
//!
//! ```ignore
//! use mosaic::{Container, EdgeInsets, MasonryLayout};
//!
//! let mut layout = MasonryLayout::new();
//! layout.compute_layout(photos.len(), &|i: usize| photos[i].height, &container)?;
//!
//! for attrs in layout.query_visible(viewport)? {
//!     draw_cell(attrs.index, attrs.frame);
//! }
//! ```

// Core primitives
pub mod primitives;
pub mod error;

// Layout engine
pub mod layout;

// Re-export core types
pub use primitives::{Point, Rect, Size};
pub use error::LayoutError;

// Layout exports
pub use layout::{
    ColumnStrategy, Container, EdgeInsets, HeightProvider, LayoutAttributes, MasonryLayout,
    VisibleAttributes, DEFAULT_CELL_PADDING, DEFAULT_COLUMN_COUNT,
};
