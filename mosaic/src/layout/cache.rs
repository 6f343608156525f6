//! Attribute cache for the masonry layout.
//!
//! The cache stores the attributes of the last computation pass together with
//! a fingerprint of the inputs that produced them. A pass with the same
//! fingerprint is skipped; a different fingerprint forces a rebuild. Item
//! heights are not part of the fingerprint (the engine never sees them outside
//! a pass), so the owner must call `clear` when they change.

use serde::Serialize;

use super::column::ColumnStrategy;
use crate::primitives::Rect;

/// Layout result for a single item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutAttributes {
    /// Position of the item in the collection (0-based).
    pub index: usize,
    /// Column the item was placed in.
    pub column: usize,
    /// Cell frame in content coordinates, already inset by the cell padding.
    pub frame: Rect,
}

/// The observable inputs of a computation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutInputs {
    pub item_count: usize,
    pub column_count: usize,
    pub strategy: ColumnStrategy,
    /// Bit pattern of the content width.
    pub content_width_bits: u32,
    /// Bit pattern of the cell padding.
    pub padding_bits: u32,
}

impl LayoutInputs {
    #[inline]
    pub fn new(
        item_count: usize,
        column_count: usize,
        cell_padding: f32,
        strategy: ColumnStrategy,
        content_width: f32,
    ) -> Self {
        Self {
            item_count,
            column_count,
            strategy,
            content_width_bits: content_width.to_bits(),
            padding_bits: cell_padding.to_bits(),
        }
    }
}

/// A cached pass: ordered attributes plus the derived extents.
#[derive(Debug, Default)]
pub struct AttributeCache {
    entries: Vec<LayoutAttributes>,
    column_heights: Vec<f32>,
    content_height: f32,

    /// Inputs of the pass that filled `entries`; `None` when invalid.
    inputs: Option<LayoutInputs>,

    /// Completed passes since construction.
    generation: u64,

    /// Stats for debugging
    #[cfg(debug_assertions)]
    hits: u64,
    #[cfg(debug_assertions)]
    misses: u64,
}

impl AttributeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the cached pass was produced from `inputs`.
    ///
    /// Counts a hit or a miss in debug builds.
    #[inline]
    pub fn is_valid_for(&mut self, inputs: &LayoutInputs) -> bool {
        let valid = self.inputs.as_ref() == Some(inputs);
        #[cfg(debug_assertions)]
        {
            if valid {
                self.hits += 1;
            } else {
                self.misses += 1;
            }
        }
        valid
    }

    /// Replace the cache contents with a freshly computed pass.
    pub fn store(
        &mut self,
        inputs: LayoutInputs,
        entries: Vec<LayoutAttributes>,
        column_heights: Vec<f32>,
        content_height: f32,
    ) {
        self.entries = entries;
        self.column_heights = column_heights;
        self.content_height = content_height;
        self.inputs = Some(inputs);
        self.generation += 1;
    }

    /// Drop the cached pass. The next lookup misses.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.column_heights.clear();
        self.content_height = 0.0;
        self.inputs = None;
    }

    /// Whether a completed pass is cached.
    pub fn is_prepared(&self) -> bool {
        self.inputs.is_some()
    }

    pub fn entries(&self) -> &[LayoutAttributes] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&LayoutAttributes> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    pub fn column_heights(&self) -> &[f32] {
        &self.column_heights
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Get cache stats (debug builds only).
    #[cfg(debug_assertions)]
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }

    /// Reset stats (debug builds only).
    #[cfg(debug_assertions)]
    pub fn reset_stats(&mut self) {
        self.hits = 0;
        self.misses = 0;
    }
}

// =========================================================================
// Tests
// =========================================================================
