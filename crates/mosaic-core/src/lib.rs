#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Core types for the Mosaic masonry layout engine.
//!
//! This crate provides the values the layout engine consumes and produces:
//! - Items to lay out: [`LayoutItem`] identified by [`ItemId`]
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]

mod geometry;
mod item;

pub use geometry::{Point, Rect, Size};
pub use item::{ItemId, LayoutItem};
