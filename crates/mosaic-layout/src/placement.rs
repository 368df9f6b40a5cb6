//! Absolute item rectangles for renderers.
//!
//! A column sits at `index * (column_width + gap)`; items stack top to bottom
//! in assignment order with `gap` between them.

use mosaic_core::{ItemId, Point, Rect, Size};
use serde::{Deserialize, Serialize};

use crate::engine::LayoutResult;

/// Where a placed item is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemPlacement {
    /// Item identity
    pub id: ItemId,
    /// Column the item belongs to
    pub column: usize,
    /// Bounds relative to the container's top-left corner
    pub bounds: Rect,
}

impl LayoutResult {
    /// Horizontal offset of a column.
    #[must_use]
    pub fn column_offset(&self, index: usize) -> f32 {
        index as f32 * (self.column_width + self.gap)
    }

    /// Stacked height of each column, in column order.
    #[must_use]
    pub fn column_heights(&self) -> Vec<f32> {
        self.columns
            .iter()
            .map(|column| column.content_height(self.gap))
            .collect()
    }

    /// Height of the tallest column.
    #[must_use]
    pub fn content_height(&self) -> f32 {
        self.column_heights().into_iter().fold(0.0, f32::max)
    }

    /// Rectangles for every placed item, column by column.
    ///
    /// Bounds inherit the sign of `column_width`, so a container narrower
    /// than its gaps yields rectangles with negative width and height.
    #[must_use]
    pub fn placements(&self) -> Vec<ItemPlacement> {
        let mut placements = Vec::with_capacity(self.placed_count());

        for column in &self.columns {
            let x = self.column_offset(column.index);
            let mut y = 0.0;
            for placed in &column.items {
                let size = Size::new(self.column_width, placed.render_height);
                placements.push(ItemPlacement {
                    id: placed.id(),
                    column: column.index,
                    bounds: Rect::from_origin_size(Point::new(x, y), size),
                });
                y += placed.render_height + self.gap;
            }
        }

        placements
    }

    /// Rectangle of a single item, if it was placed.
    #[must_use]
    pub fn placement_of(&self, id: ItemId) -> Option<ItemPlacement> {
        self.placements().into_iter().find(|p| p.id == id)
    }
}
