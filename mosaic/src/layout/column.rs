//! Column tracks for the masonry layout.
//!
//! Each track has a fixed x-offset and a running y-offset. The strategy
//! decides which track receives the next item.

use serde::{Deserialize, Serialize};

use crate::primitives::Rect;

/// How the next item's column is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnStrategy {
    /// Strict cyclic order: item `i` goes to column `i mod column_count`,
    /// whatever the accumulated column heights are.
    #[default]
    RoundRobin,
    /// Place each item in the currently shortest column (lowest index on ties).
    ShortestFirst,
}

/// Running state of every column during one computation pass.
#[derive(Debug, Clone)]
pub(crate) struct ColumnTracks {
    strategy: ColumnStrategy,
    width: f32,
    x_offsets: Vec<f32>,
    y_offsets: Vec<f32>,
    next: usize,
}

impl ColumnTracks {
    pub(crate) fn new(column_count: usize, content_width: f32, strategy: ColumnStrategy) -> Self {
        let width = content_width / column_count as f32;
        Self {
            strategy,
            width,
            x_offsets: (0..column_count).map(|c| c as f32 * width).collect(),
            y_offsets: vec![0.0; column_count],
            next: 0,
        }
    }

    /// Pick the column for the next item and advance the cursor.
    pub(crate) fn next_column(&mut self) -> usize {
        match self.strategy {
            ColumnStrategy::RoundRobin => {
                let column = self.next;
                self.next = if column + 1 < self.y_offsets.len() { column + 1 } else { 0 };
                column
            }
            ColumnStrategy::ShortestFirst => shortest_column(&self.y_offsets),
        }
    }

    /// The raw slot rectangle at the top of the free space in `column`.
    pub(crate) fn slot(&self, column: usize, slot_height: f32) -> Rect {
        Rect::new(self.x_offsets[column], self.y_offsets[column], self.width, slot_height)
    }

    pub(crate) fn advance(&mut self, column: usize, slot_height: f32) {
        self.y_offsets[column] += slot_height;
    }

    pub(crate) fn into_heights(self) -> Vec<f32> {
        self.y_offsets
    }
}

fn shortest_column(offsets: &[f32]) -> usize {
    let mut index = 0;
    let mut best = offsets.first().copied().unwrap_or(0.0);
    for (i, offset) in offsets.iter().enumerate().skip(1) {
        if *offset < best {
            best = *offset;
            index = i;
        }
    }
    index
}
