#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_const_for_fn)]
//! Responsive masonry layout engine.
//!
//! Assigns rectangular items to a fixed number of equal-width columns so that
//! column heights stay balanced, scaling each item to the column width while
//! keeping its aspect ratio.
//!
//! # Pipeline
//!
//! - **Breakpoints**: container width resolves to a column count and a gap
//!   ([`resolve_column_count`], [`resolve_gap`], or a custom [`LayoutConfig`])
//! - **Packing**: [`pack`] greedily appends each item to the shortest column
//! - **Orchestration**: [`layout`] / [`MasonryLayout::layout`] compose the two
//!   into a [`LayoutResult`]
//! - **Placement**: [`LayoutResult::placements`] turns columns into item
//!   rectangles for a renderer
//!
//! Invalid input never fails: items without positive dimensions are dropped,
//! and a non-positive container width yields an empty layout.

mod breakpoint;
mod engine;
mod packer;
mod placement;

pub use breakpoint::{
    resolve_column_count, resolve_gap, BreakpointError, BreakpointStep, Breakpoints,
    LayoutConfig, DEFAULT_BASE_COLUMNS, DEFAULT_BASE_GAP,
};
pub use engine::{column_width, layout, LayoutResult, MasonryLayout};
pub use packer::{pack, Column, PlacedItem};
pub use placement::ItemPlacement;
