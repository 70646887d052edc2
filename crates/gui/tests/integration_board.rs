//! Integration tests for the board core.
//!
//! End-to-end through the harness: pointer input -> state machines ->
//! registry, links and viewport.

use board_gui_lib::fixtures::*;
use board_gui_lib::harness::TestHarness;
use board_gui_lib::state::registry::{BASE_PANEL_Z_INDEX, FILE_PANEL_SIZE};
use board_gui_lib::state::viewport::{MAX_ZOOM, MIN_ZOOM};
use board_gui_lib::state::{MenuAction, PanelKind};
use glam::Vec2;

#[test]
fn test_z_index_unique_and_increasing() {
    let mut h = TestHarness::new();
    let mut seen = Vec::new();
    for i in 0..12 {
        let kind = match i % 3 {
            0 => PanelKind::Chat,
            1 => PanelKind::FileUpload,
            _ => PanelKind::Insight,
        };
        let id = h.create_panel(kind, i as f32 * 10.0, 0.0);
        let z = h.z_of(&id).unwrap();
        assert!(seen.iter().all(|&prev| z > prev), "zIndex {z} not above {seen:?}");
        seen.push(z);
    }
    assert_eq!(seen[0], BASE_PANEL_Z_INDEX + 2);

    let first = h.board.registry.panels()[0].id.clone();
    h.bring_to_front(&first);
    let mut all: Vec<u64> = h.board.registry.panels().iter().map(|p| p.z_index).collect();
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), 12);
    assert_eq!(h.topmost_id(), Some(&first));
}

#[test]
fn test_cascade_leaves_no_orphans() {
    let (mut h, src, insights) = board_with_insights();
    let chat = h.chat_about_files(&src).unwrap();
    let other_src = h.create_upload(900.0, 100.0);

    let removed = h.close(&src);
    assert_eq!(removed.len(), 1 + insights.len());
    assert!(h
        .board
        .registry
        .panels()
        .iter()
        .all(|p| p.source_panel_id.as_deref() != Some(src.as_str())));
    assert!(h.panel(&chat).is_some());
    assert!(h.panel(&other_src).is_some());
    assert!(h.links().is_empty());
}

#[test]
fn test_insights_twice_is_noop() {
    let (mut h, src, first) = board_with_insights();
    let second = h.get_insights(&src);
    assert!(second.is_empty());
    assert_eq!(h.insight_count(&src), 3);
    for id in &first {
        assert!(h.panel(id).is_some());
    }
}

#[test]
fn test_insights_after_partial_removal_replace_all() {
    let (mut h, src, first) = board_with_insights();
    h.close(&first[0]);
    let fresh = h.get_insights(&src);
    assert_eq!(fresh.len(), 3);
    assert_eq!(h.insight_count(&src), 3);
    for id in &first {
        assert!(h.panel(id).is_none(), "survivor {id} should have been replaced");
    }
}

#[test]
fn test_drag_delta_scaled_by_zoom() {
    let mut h = TestHarness::new();
    let id = h.create_chat(100.0, 100.0);
    h.drag_panel(&id, Vec2::new(50.0, 30.0));
    assert_eq!(h.position_of(&id), Some(Vec2::new(150.0, 130.0)));

    let mut h = TestHarness::new();
    let id = h.create_chat(100.0, 100.0);
    h.board.viewport.set_zoom(2.0);
    h.drag_panel(&id, Vec2::new(50.0, 30.0));
    assert_eq!(h.position_of(&id), Some(Vec2::new(125.0, 115.0)));
}

#[test]
fn test_drag_raises_panel() {
    let mut h = TestHarness::new();
    let a = h.create_chat(100.0, 100.0);
    let b = h.create_chat(700.0, 100.0);
    assert_eq!(h.topmost_id(), Some(&b));
    h.drag_panel(&a, Vec2::new(5.0, 5.0));
    assert_eq!(h.topmost_id(), Some(&a));
}

#[test]
fn test_right_click_maps_to_canvas() {
    let mut h = TestHarness::new();
    h.board
        .viewport
        .set_container(Vec2::new(0.0, 80.0), Vec2::new(1280.0, 720.0));
    h.board.viewport.set_scroll(Vec2::new(200.0, 100.0));
    h.right_click(300.0, 200.0);
    assert_eq!(h.board.menu.canvas_pos(), Some(Vec2::new(500.0, 220.0)));

    let id = h.choose_menu(MenuAction::AddFile).unwrap();
    assert_eq!(h.position_of(&id), Some(Vec2::new(500.0, 220.0)));
    assert_eq!(h.panel(&id).unwrap().kind(), PanelKind::FileUpload);
}

#[test]
fn test_chat_about_files_placed_below_source() {
    let (mut h, src) = board_with_upload(Vec2::new(40.0, 60.0));
    let chat = h.chat_about_files(&src).unwrap();
    assert_eq!(
        h.position_of(&chat),
        Some(Vec2::new(40.0, 60.0 + FILE_PANEL_SIZE.y + 30.0))
    );
}

#[test]
fn test_zoom_stays_in_range() {
    let mut h = TestHarness::new();
    for _ in 0..50 {
        h.board.zoom_in();
        assert!(h.zoom() <= MAX_ZOOM);
    }
    assert_eq!(h.zoom(), MAX_ZOOM);
    for _ in 0..50 {
        h.wheel(120.0, true);
        assert!(h.zoom() >= MIN_ZOOM);
    }
    assert_eq!(h.zoom(), MIN_ZOOM);
}

#[test]
fn test_links_track_dragged_insight() {
    let (mut h, src, insights) = board_with_insights();
    let before = h.links();
    assert_eq!(before.len(), 3);
    assert!(before.iter().all(|l| l.source_id == src));

    // The last insight is on top and its header is not covered
    let last = insights[2].clone();
    h.drag_panel(&last, Vec2::new(200.0, 0.0));
    let moved = h.links().into_iter().find(|l| l.insight_id == last).unwrap();
    let panel = h.panel(&last).unwrap();
    assert_eq!(moved.to, panel.top_center());
}

#[test]
fn test_file_cap_through_board() {
    let mut h = TestHarness::new();
    let up = h.create_upload(0.0, 0.0);
    assert_eq!(h.add_files(&up, numbered_files(14)), 10);
    assert_eq!(h.add_files(&up, vec![unsupported_file("x.exe")]), 0);
    h.remove_file(&up, "file_0.csv");
    assert_eq!(h.board.files_of(&up).len(), 9);
}
