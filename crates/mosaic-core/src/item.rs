//! Items handed to the layout engine.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geometry::Size;

/// Unique identifier for a layout item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl ItemId {
    /// Create a new item ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A rectangular item with nominal dimensions.
///
/// Either dimension may be missing or non-positive. Such items are never
/// placed by the layout engine; they are silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayoutItem {
    /// Item identity
    pub id: ItemId,
    /// Nominal width in pixels
    #[serde(default)]
    pub width: Option<i32>,
    /// Nominal height in pixels
    #[serde(default)]
    pub height: Option<i32>,
}

impl LayoutItem {
    /// Create an item with known dimensions.
    #[must_use]
    pub const fn new(id: u64, width: i32, height: i32) -> Self {
        Self {
            id: ItemId(id),
            width: Some(width),
            height: Some(height),
        }
    }

    /// Create an item whose dimensions are unknown.
    #[must_use]
    pub const fn without_size(id: u64) -> Self {
        Self {
            id: ItemId(id),
            width: None,
            height: None,
        }
    }

    /// Set the width.
    #[must_use]
    pub const fn with_width(mut self, width: Option<i32>) -> Self {
        self.width = width;
        self
    }

    /// Set the height.
    #[must_use]
    pub const fn with_height(mut self, height: Option<i32>) -> Self {
        self.height = height;
        self
    }

    /// Nominal size, if both dimensions are present and positive.
    #[must_use]
    pub fn size(&self) -> Option<Size> {
        match (self.width, self.height) {
            (Some(w), Some(h)) if w > 0 && h > 0 => Some(Size::new(w as f32, h as f32)),
            _ => None,
        }
    }

    /// Whether the engine will place this item.
    #[must_use]
    pub fn is_placeable(&self) -> bool {
        self.size().is_some()
    }
}
