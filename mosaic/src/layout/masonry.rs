//! Masonry layout - variable-height cells packed into fixed-width columns.
//!
//! The engine is a pure calculator with a memoized result. It asks a
//! [`HeightProvider`] for each item's natural height, places the padded slots
//! into columns, and keeps the resulting frames in index order so the
//! scroll surface can cull by viewport or look up a single item.
//!
//! # Example
//!
//! ```
//! use mosaic::{Container, EdgeInsets, MasonryLayout, Rect};
//!
//! let heights = [100.0f32, 50.0, 80.0];
//! let container = Container::new(300.0, EdgeInsets::ZERO);
//!
//! let mut layout = MasonryLayout::new();
//! layout.compute_layout(heights.len(), &|i: usize| heights[i], &container)?;
//!
//! assert_eq!(layout.attributes_for_index(2)?.frame, Rect::new(6.0, 118.0, 138.0, 80.0));
//! assert_eq!(layout.content_size(&container).height, 204.0);
//! # Ok::<(), mosaic::LayoutError>(())
//! ```

use std::iter::FusedIterator;

use super::cache::{AttributeCache, LayoutAttributes, LayoutInputs};
use super::column::{ColumnStrategy, ColumnTracks};
use super::insets::Container;
use crate::error::{LayoutError, Result};
use crate::primitives::{Rect, Size};

/// Columns used when none are configured.
pub const DEFAULT_COLUMN_COUNT: usize = 2;

/// Inset applied to every side of each cell when none is configured.
pub const DEFAULT_CELL_PADDING: f32 = 6.0;

/// Source of each item's natural (unpadded) content height.
///
/// Called once per item per computation pass, in increasing index order.
/// Implemented for any `Fn(usize) -> f32`.
pub trait HeightProvider {
    fn height_for_item(&self, index: usize) -> f32;
}

impl<F> HeightProvider for F
where
    F: Fn(usize) -> f32,
{
    #[inline]
    fn height_for_item(&self, index: usize) -> f32 {
        self(index)
    }
}

/// Masonry layout engine.
///
/// Configuration changes go through setters that validate the new value and
/// drop the cached pass. Changes to the item count or container width are
/// detected on the next [`compute_layout`](Self::compute_layout). Changes to
/// item heights are invisible to the engine; call
/// [`invalidate`](Self::invalidate) after them.
#[derive(Debug)]
pub struct MasonryLayout {
    column_count: usize,
    cell_padding: f32,
    strategy: ColumnStrategy,
    cache: AttributeCache,
}

impl MasonryLayout {
    /// Create an engine with the default two columns and 6pt padding.
    pub fn new() -> Self {
        Self {
            column_count: DEFAULT_COLUMN_COUNT,
            cell_padding: DEFAULT_CELL_PADDING,
            strategy: ColumnStrategy::default(),
            cache: AttributeCache::new(),
        }
    }

    /// Create an engine with an explicit column count and cell padding.
    pub fn with_config(column_count: usize, cell_padding: f32) -> Result<Self> {
        validate_column_count(column_count)?;
        validate_cell_padding(cell_padding)?;
        Ok(Self {
            column_count,
            cell_padding,
            ..Self::new()
        })
    }

    /// Set the column selection strategy (builder form).
    pub fn strategy(mut self, strategy: ColumnStrategy) -> Self {
        self.set_strategy(strategy);
        self
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn cell_padding(&self) -> f32 {
        self.cell_padding
    }

    pub fn column_strategy(&self) -> ColumnStrategy {
        self.strategy
    }

    /// Change the number of columns. Invalidates the cache when it changes.
    pub fn set_column_count(&mut self, column_count: usize) -> Result<()> {
        validate_column_count(column_count)?;
        if column_count != self.column_count {
            self.column_count = column_count;
            self.invalidate();
        }
        Ok(())
    }

    /// Change the cell padding. Invalidates the cache when it changes.
    pub fn set_cell_padding(&mut self, cell_padding: f32) -> Result<()> {
        validate_cell_padding(cell_padding)?;
        if cell_padding.to_bits() != self.cell_padding.to_bits() {
            self.cell_padding = cell_padding;
            self.invalidate();
        }
        Ok(())
    }

    /// Change the column strategy. Invalidates the cache when it changes.
    pub fn set_strategy(&mut self, strategy: ColumnStrategy) {
        if strategy != self.strategy {
            self.strategy = strategy;
            self.invalidate();
        }
    }

    /// Drop the cached pass; the next `compute_layout` recomputes everything.
    pub fn invalidate(&mut self) {
        if self.cache.is_prepared() {
            tracing::debug!(items = self.cache.len(), "invalidating masonry layout");
        }
        self.cache.clear();
    }

    /// Place every item, unless the cached pass already matches the inputs.
    ///
    /// On error nothing is committed and the cache is left invalidated.
    pub fn compute_layout<H>(
        &mut self,
        item_count: usize,
        heights: &H,
        container: &Container,
    ) -> Result<()>
    where
        H: HeightProvider + ?Sized,
    {
        if let Err(err) = container.validate() {
            tracing::warn!(error = %err, "rejecting container geometry");
            self.cache.clear();
            return Err(err);
        }

        let content_width = container.content_width();
        let column_width = content_width / self.column_count as f32;
        if 2.0 * self.cell_padding > column_width {
            tracing::warn!(
                padding = self.cell_padding,
                column_width,
                "cell padding does not fit the column"
            );
            self.cache.clear();
            return Err(LayoutError::InvalidConfiguration(format!(
                "cell padding {} leaves no room in a {column_width}pt column",
                self.cell_padding
            )));
        }

        let inputs = LayoutInputs::new(
            item_count,
            self.column_count,
            self.cell_padding,
            self.strategy,
            content_width,
        );

        if self.cache.is_valid_for(&inputs) {
            return Ok(());
        }
        if self.cache.is_prepared() {
            tracing::debug!(?inputs, "layout inputs changed, recomputing");
            self.cache.clear();
        }

        let padding = self.cell_padding;
        let mut tracks = ColumnTracks::new(self.column_count, content_width, self.strategy);
        let mut entries = Vec::with_capacity(item_count);
        let mut content_height = 0.0f32;

        for index in 0..item_count {
            let photo_height = heights.height_for_item(index);
            if !photo_height.is_finite() || photo_height < 0.0 {
                tracing::warn!(index, height = photo_height, "rejecting item height");
                return Err(LayoutError::InvalidHeight {
                    index,
                    height: photo_height,
                });
            }

            let slot_height = photo_height + 2.0 * padding;
            let column = tracks.next_column();
            let slot = tracks.slot(column, slot_height);
            let frame = slot.inset_by(padding, padding);
            tracing::trace!(index, column, ?frame, "placed item");

            entries.push(LayoutAttributes { index, column, frame });
            content_height = content_height.max(slot.bottom());
            tracks.advance(column, slot_height);
        }

        tracing::debug!(
            items = item_count,
            columns = self.column_count,
            content_width,
            content_height,
            "computed masonry layout"
        );
        self.cache.store(inputs, entries, tracks.into_heights(), content_height);
        Ok(())
    }

    /// Attributes whose frame overlaps `rect`, in index order.
    ///
    /// Fails with [`LayoutError::StaleCacheQuery`] before the first pass or
    /// after an invalidation.
    pub fn query_visible(&self, rect: Rect) -> Result<VisibleAttributes<'_>> {
        self.ensure_prepared()?;
        Ok(VisibleAttributes {
            entries: self.cache.entries().iter(),
            rect,
        })
    }

    /// Cached attributes for one item. Never triggers a computation.
    pub fn attributes_for_index(&self, index: usize) -> Result<&LayoutAttributes> {
        self.ensure_prepared()?;
        self.cache.get(index).ok_or(LayoutError::IndexOutOfRange {
            index,
            len: self.cache.len(),
        })
    }

    /// Scrollable extent: fresh content width, height of the last pass.
    pub fn content_size(&self, container: &Container) -> Size {
        Size::new(container.content_width(), self.cache.content_height())
    }

    /// All cached attributes in index order (empty when not prepared).
    pub fn attributes(&self) -> &[LayoutAttributes] {
        self.cache.entries()
    }

    /// Running height of every column at the end of the last pass.
    pub fn column_heights(&self) -> &[f32] {
        self.cache.column_heights()
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Whether a completed pass is cached.
    pub fn is_prepared(&self) -> bool {
        self.cache.is_prepared()
    }

    /// Number of completed computation passes.
    pub fn generation(&self) -> u64 {
        self.cache.generation()
    }

    /// Cache (hits, misses) across `compute_layout` calls (debug builds only).
    #[cfg(debug_assertions)]
    pub fn cache_stats(&self) -> (u64, u64) {
        self.cache.stats()
    }

    fn ensure_prepared(&self) -> Result<()> {
        if self.cache.is_prepared() {
            Ok(())
        } else {
            Err(LayoutError::StaleCacheQuery)
        }
    }
}

impl Default for MasonryLayout {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_column_count(column_count: usize) -> Result<()> {
    if column_count == 0 {
        return Err(LayoutError::InvalidConfiguration(
            "column count must be at least 1".into(),
        ));
    }
    Ok(())
}

fn validate_cell_padding(cell_padding: f32) -> Result<()> {
    if !cell_padding.is_finite() || cell_padding < 0.0 {
        return Err(LayoutError::InvalidConfiguration(format!(
            "cell padding must be a non-negative number, got {cell_padding}"
        )));
    }
    Ok(())
}

// =========================================================================
// Viewport query
// =========================================================================

/// Lazy iterator over the attributes intersecting a viewport rectangle.
///
/// Clone it to restart the walk from the first item.
#[derive(Debug, Clone)]
pub struct VisibleAttributes<'a> {
    entries: std::slice::Iter<'a, LayoutAttributes>,
    rect: Rect,
}

impl<'a> Iterator for VisibleAttributes<'a> {
    type Item = &'a LayoutAttributes;

    fn next(&mut self) -> Option<Self::Item> {
        let rect = self.rect;
        self.entries.find(|attrs| attrs.frame.intersects(&rect))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.entries.len()))
    }
}

impl FusedIterator for VisibleAttributes<'_> {}

// =========================================================================
// Tests
// =========================================================================
