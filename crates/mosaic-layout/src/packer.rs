//! Greedy shortest-column packing.
//!
//! Items are visited in input order. Each placeable item is scaled to the
//! shared column width and appended to the column whose running height is
//! currently smallest, the lowest index winning ties. Running heights include
//! one trailing gap per item and are not part of the output.

use mosaic_core::{ItemId, LayoutItem};
use serde::{Deserialize, Serialize};

/// An item assigned to a column, with its height at the column width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    /// The source item
    pub item: LayoutItem,
    /// Height when rendered at the column width
    pub render_height: f32,
}

impl PlacedItem {
    /// Identity of the source item.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.item.id
    }
}

/// One column of a masonry layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column position (0-indexed, left to right)
    pub index: usize,
    /// Items in assignment order
    pub items: Vec<PlacedItem>,
}

impl Column {
    /// Create an empty column.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            items: Vec::new(),
        }
    }

    /// Number of items in this column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the column is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Stacked height of the column: item heights plus the gaps between them.
    #[must_use]
    pub fn content_height(&self, gap: f32) -> f32 {
        let items: f32 = self.items.iter().map(|placed| placed.render_height).sum();
        let gaps = gap * self.items.len().saturating_sub(1) as f32;
        items + gaps
    }

    /// Iterate over item IDs in assignment order.
    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter().map(PlacedItem::id)
    }
}

/// Pack items into `column_count` columns of equal width.
///
/// Items without a positive width and height are skipped. With
/// `column_count == 0` no columns are produced and nothing is placed.
#[must_use]
pub fn pack(
    items: &[LayoutItem],
    column_count: usize,
    column_width: f32,
    gap: f32,
) -> Vec<Column> {
    let mut columns: Vec<Column> = (0..column_count).map(Column::new).collect();
    if columns.is_empty() {
        return columns;
    }

    let mut running = vec![0.0f32; column_count];

    for item in items {
        let Some(size) = item.size() else {
            tracing::trace!(
                id = %item.id,
                width = ?item.width,
                height = ?item.height,
                "dropping item without positive dimensions"
            );
            continue;
        };

        let render_height = size.height_at_width(column_width);
        let target = shortest_column(&running);

        columns[target].items.push(PlacedItem {
            item: *item,
            render_height,
        });
        running[target] += render_height + gap;
    }

    columns
}

/// Index of the smallest running height; the first one wins ties.
///
/// Returns 0 for an empty slice.
#[must_use]
pub(crate) fn shortest_column(running: &[f32]) -> usize {
    let mut index = 0;
    let mut best = running.first().copied().unwrap_or(0.0);
    for (i, &height) in running.iter().enumerate().skip(1) {
        if height < best {
            best = height;
            index = i;
        }
    }
    index
}
