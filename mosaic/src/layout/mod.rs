//! Layout System for Mosaic
//!
//! Computes masonry ("Pinterest") frames for a single collection of
//! variable-height items and answers viewport queries against the result.
//!
//! # Architecture
//!
//! ```text
//! item count + container -> compute_layout() queries heights -> AttributeCache
//!                                      query_visible(rect) / attributes_for_index(i)
//! ```
//!
//! The pass runs once and is reused until an input changes.

pub mod cache;
pub mod column;
pub mod insets;
pub mod masonry;

// Re-export core types
pub use cache::{AttributeCache, LayoutAttributes, LayoutInputs};
pub use column::ColumnStrategy;
pub use insets::{Container, EdgeInsets};
pub use masonry::{
    HeightProvider, MasonryLayout, VisibleAttributes, DEFAULT_CELL_PADDING, DEFAULT_COLUMN_COUNT,
};
