//! Layout orchestration: breakpoints, column width and packing.

use mosaic_core::LayoutItem;
use serde::{Deserialize, Serialize};

use crate::breakpoint::{resolve_column_count, resolve_gap, BreakpointError, LayoutConfig};
use crate::packer::{pack, Column};

/// A computed masonry layout.
///
/// Built fresh on every call; equal inputs produce equal results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Columns, left to right
    pub columns: Vec<Column>,
    /// Width shared by every column
    pub column_width: f32,
    /// Number of columns
    pub column_count: usize,
    /// Gap between columns and between stacked items
    pub gap: f32,
}

impl LayoutResult {
    /// The "no layout" result for a zero-width container or no items.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if nothing was laid out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placed_count() == 0
    }

    /// Number of placed items across all columns.
    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }
}

/// Lay out items with the default breakpoint tables.
///
/// Returns [`LayoutResult::empty`] when `container_width` is not positive or
/// there are no items.
#[must_use]
pub fn layout(items: &[LayoutItem], container_width: f32) -> LayoutResult {
    compute(
        items,
        container_width,
        resolve_column_count,
        |width| resolve_gap(width) as f32,
    )
}

/// Masonry layout engine with configurable breakpoints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MasonryLayout {
    config: LayoutConfig,
}

impl MasonryLayout {
    /// Create an engine from validated breakpoint tables.
    pub fn new(config: LayoutConfig) -> Result<Self, BreakpointError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Breakpoint tables in use.
    #[must_use]
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Column count for a container width.
    #[must_use]
    pub fn column_count(&self, container_width: f32) -> usize {
        self.config.column_count(container_width)
    }

    /// Gap for a container width.
    #[must_use]
    pub fn gap(&self, container_width: f32) -> u32 {
        self.config.gap(container_width)
    }

    /// Column width for a container width, before any items are considered.
    #[must_use]
    pub fn column_width(&self, container_width: f32) -> f32 {
        column_width(
            container_width,
            self.column_count(container_width),
            self.gap(container_width) as f32,
        )
    }

    /// Lay out items for a container width.
    #[must_use]
    pub fn layout(&self, items: &[LayoutItem], container_width: f32) -> LayoutResult {
        compute(
            items,
            container_width,
            |width| self.column_count(width),
            |width| self.gap(width) as f32,
        )
    }
}

/// Width of each column once `column_count - 1` gaps are taken out.
///
/// Not clamped: a container narrower than its gaps gives a negative width.
#[must_use]
pub fn column_width(container_width: f32, column_count: usize, gap: f32) -> f32 {
    if column_count == 0 {
        return 0.0;
    }
    let gaps = column_count.saturating_sub(1) as f32 * gap;
    (container_width - gaps) / column_count as f32
}

fn compute(
    items: &[LayoutItem],
    container_width: f32,
    column_count: impl Fn(f32) -> usize,
    gap: impl Fn(f32) -> f32,
) -> LayoutResult {
    if container_width.is_nan() || container_width <= 0.0 || items.is_empty() {
        tracing::debug!(
            container_width,
            items = items.len(),
            "no layout for empty input"
        );
        return LayoutResult::empty();
    }

    let gap = gap(container_width);
    let column_count = column_count(container_width);
    let column_width = column_width(container_width, column_count, gap);
    let columns = pack(items, column_count, column_width, gap);

    let result = LayoutResult {
        columns,
        column_width,
        column_count,
        gap,
    };

    tracing::debug!(
        container_width,
        column_count,
        column_width,
        gap,
        items = items.len(),
        placed = result.placed_count(),
        dropped = items.len() - result.placed_count(),
        "computed masonry layout"
    );

    result
}
