//! Integration tests for mosaic-layout.
//!
//! These tests drive the public API the way a host does: JSON item lists in,
//! container widths from resize observations, layouts and rectangles out.

use mosaic_core::{ItemId, LayoutItem};
use mosaic_layout::{
    layout, resolve_column_count, resolve_gap, Breakpoints, LayoutConfig, LayoutResult,
    MasonryLayout,
};
use proptest::prelude::*;

// =============================================================================
// Helpers
// =============================================================================

const SEARCH_RESULTS: &str = r#"[
    {"id": 101, "width": 1920, "height": 1080},
    {"id": 102, "width": 800, "height": 1200},
    {"id": 103, "width": null, "height": 600},
    {"id": 104, "width": 1024, "height": 1024},
    {"id": 105, "width": 640, "height": 0},
    {"id": 106, "width": 1200, "height": 1800},
    {"id": 107},
    {"id": 108, "width": 3000, "height": 2000}
]"#;

fn search_results() -> Vec<LayoutItem> {
    serde_json::from_str(SEARCH_RESULTS).unwrap()
}

fn all_ids(result: &LayoutResult) -> Vec<ItemId> {
    result.columns.iter().flat_map(|c| c.ids()).collect()
}

// =============================================================================
// End-to-end
// =============================================================================

#[test]
fn test_json_items_drop_invalid_dimensions() {
    let items = search_results();
    let result = layout(&items, 1280.0);

    assert_eq!(result.column_count, 4);
    assert_eq!(result.placed_count(), 5);

    let placed = all_ids(&result);
    for dropped in [103, 105, 107] {
        assert!(!placed.contains(&ItemId(dropped)));
    }
}

#[test]
fn test_every_valid_item_placed_once() {
    let items = search_results();
    let result = layout(&items, 900.0);
    let mut placed: Vec<u64> = all_ids(&result).into_iter().map(ItemId::value).collect();
    placed.sort_unstable();
    assert_eq!(placed, vec![101, 102, 104, 106, 108]);
}

#[test]
fn test_result_serializes_for_renderer() {
    let result = layout(&search_results(), 1280.0);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["column_count"], 4);
    assert_eq!(json["columns"].as_array().unwrap().len(), 4);
    assert_eq!(json["columns"][0]["index"], 0);
    assert_eq!(json["columns"][0]["items"][0]["item"]["id"], 101);

    let back: LayoutResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
}

#[test]
fn test_placements_share_column_width() {
    let result = layout(&search_results(), 1600.0);
    assert_eq!(result.column_count, 5);
    for placement in result.placements() {
        assert_eq!(placement.bounds.width, result.column_width);
        assert_eq!(placement.bounds.x, result.column_offset(placement.column));
    }
}

#[test]
fn test_container_edge_is_filled() {
    for width in [320.0, 700.0, 1100.0, 1500.0] {
        let result = layout(&search_results(), width);
        let last = result.column_count - 1;
        let right = result.column_offset(last) + result.column_width;
        assert!((right - width).abs() < 1e-3, "width {width}: right edge {right}");
    }
}

// =============================================================================
// Resize sequences
// =============================================================================

#[test]
fn test_resize_sequence_recomputes_from_scratch() {
    let items = search_results();
    // Initial mount reports 0, then the real width, then a few resizes.
    let widths = [0.0, 1280.0, 800.0, 1500.0, 1280.0];
    let results: Vec<LayoutResult> = widths.iter().map(|&w| layout(&items, w)).collect();

    assert_eq!(results[0], LayoutResult::empty());
    assert_eq!(results[1], results[4]);
    assert_eq!(results[2].column_count, 3);
    assert_eq!(results[3].column_count, 5);
}

#[test]
fn test_column_count_never_drops_while_growing() {
    let mut previous = 0;
    for width in (1..=2000).map(|w| w as f32) {
        let count = resolve_column_count(width);
        assert!(count >= previous, "column count dropped at {width}");
        previous = count;
    }
}

#[test]
fn test_breakpoint_boundaries() {
    let cases = [
        (639.0, 2, 8),
        (640.0, 3, 12),
        (1023.0, 3, 12),
        (1024.0, 4, 16),
        (1439.0, 4, 16),
        (1440.0, 5, 16),
    ];
    for (width, columns, gap) in cases {
        assert_eq!(resolve_column_count(width), columns, "columns at {width}");
        assert_eq!(resolve_gap(width), gap, "gap at {width}");
    }
}

// =============================================================================
// Custom breakpoints
// =============================================================================

#[test]
fn test_custom_engine_phone_layout() {
    let config = LayoutConfig {
        columns: Breakpoints::new(1).with_step(480.0, 2),
        gaps: Breakpoints::new(4),
    };
    let engine = MasonryLayout::new(config).unwrap();

    let narrow = engine.layout(&search_results(), 375.0);
    assert_eq!(narrow.column_count, 1);
    assert_eq!(narrow.column_width, 375.0);
    let order: Vec<u64> = narrow.columns[0].ids().map(ItemId::value).collect();
    assert_eq!(order, vec![101, 102, 104, 106, 108]);

    let wide = engine.layout(&search_results(), 2000.0);
    assert_eq!(wide.column_count, 2);
    assert_eq!(wide.column_width, (2000.0 - 4.0) / 2.0);
}

// =============================================================================
// Properties
// =============================================================================

fn arb_items() -> impl Strategy<Value = Vec<LayoutItem>> {
    prop::collection::vec(
        (
            0u64..10_000,
            prop::option::of(-5i32..4000),
            prop::option::of(-5i32..4000),
        ),
        0..80,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .map(|(id, width, height)| LayoutItem {
                id: ItemId(id),
                width,
                height,
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_layout_is_deterministic(items in arb_items(), width in -100.0f32..3000.0) {
        prop_assert_eq!(layout(&items, width), layout(&items, width));
    }

    #[test]
    fn prop_layout_conserves_items(items in arb_items(), width in 1.0f32..3000.0) {
        let result = layout(&items, width);
        let dropped = items.iter().filter(|i| !i.is_placeable()).count();
        if items.is_empty() {
            prop_assert_eq!(result.placed_count(), 0);
        } else {
            prop_assert_eq!(result.placed_count() + dropped, items.len());
        }
    }

    #[test]
    fn prop_layout_drops_invalid(items in arb_items(), width in 1.0f32..3000.0) {
        let result = layout(&items, width);
        for column in &result.columns {
            for placed in &column.items {
                prop_assert!(placed.item.is_placeable());
            }
        }
    }

    #[test]
    fn prop_layout_aspect_ratio(items in arb_items(), width in 1.0f32..3000.0) {
        let result = layout(&items, width);
        for column in &result.columns {
            for placed in &column.items {
                let size = placed.item.size().unwrap();
                let expected = result.column_width * size.height / size.width;
                prop_assert!((placed.render_height - expected).abs() <= expected.abs() * 1e-5);
            }
        }
    }
}
