use std::sync::Arc;

use egui::Pos2;
use slide_editor::geometry::Bounds;
use slide_editor::interaction::{ResizeState, compute_resize_preview};
use slide_editor::{Editor, InteractionMode, ObjectId, ResizeHandle};

const MIN: f32 = 20.0;

fn state(handle: ResizeHandle) -> ResizeState {
    ResizeState {
        object_id: ObjectId::new(),
        handle,
        start_mouse: Pos2::new(100.0, 100.0),
        original: Bounds::new(20.0, 20.0, 300.0, 80.0),
    }
}

fn assert_bounds(actual: Bounds, expected: Bounds) {
    assert!(
        (actual.x - expected.x).abs() < 0.001
            && (actual.y - expected.y).abs() < 0.001
            && (actual.width - expected.width).abs() < 0.001
            && (actual.height - expected.height).abs() < 0.001,
        "{actual:?} != {expected:?}"
    );
}

// Default text box, selected, not being edited
fn editor_with_text() -> (Editor, ObjectId) {
    let editor = Editor::new().add_text_object().stop_editing_text();
    let object_id = editor.presentation.slides[0].objects[0].id;
    (editor, object_id)
}

#[test]
fn test_bottom_right_grows_width_and_height() {
    let bounds = compute_resize_preview(&state(ResizeHandle::BottomRight), Pos2::new(150.0, 130.0), MIN, MIN);
    assert_bounds(bounds, Bounds::new(20.0, 20.0, 350.0, 110.0));
}

#[test]
fn test_top_left_moves_origin_and_shrinks() {
    let bounds = compute_resize_preview(&state(ResizeHandle::TopLeft), Pos2::new(110.0, 120.0), MIN, MIN);
    assert_bounds(bounds, Bounds::new(30.0, 40.0, 290.0, 60.0));
}

#[test]
fn test_edge_handles_only_touch_their_axis() {
    let right = compute_resize_preview(&state(ResizeHandle::Right), Pos2::new(140.0, 170.0), MIN, MIN);
    assert_bounds(right, Bounds::new(20.0, 20.0, 340.0, 80.0));

    let top = compute_resize_preview(&state(ResizeHandle::Top), Pos2::new(180.0, 90.0), MIN, MIN);
    assert_bounds(top, Bounds::new(20.0, 10.0, 300.0, 90.0));
}

#[test]
fn test_minimum_size_keeps_opposite_edge_fixed() {
    // Dragging the left edge past the right edge
    let left = compute_resize_preview(&state(ResizeHandle::Left), Pos2::new(500.0, 100.0), MIN, MIN);
    assert_bounds(left, Bounds::new(300.0, 20.0, 20.0, 80.0));

    let top_right = compute_resize_preview(&state(ResizeHandle::TopRight), Pos2::new(-400.0, 300.0), MIN, MIN);
    assert_bounds(top_right, Bounds::new(20.0, 80.0, 20.0, 20.0));
}

#[test]
fn test_resize_round_trip_through_the_editor() {
    let (editor, object_id) = editor_with_text();

    let resizing = editor.start_resize(object_id, ResizeHandle::BottomRight, Pos2::new(100.0, 100.0));
    assert_eq!(resizing.interaction_mode(), InteractionMode::Resizing);

    let finished = resizing.finish_resize(Pos2::new(150.0, 130.0), MIN, MIN);
    assert!(finished.resizing.is_none());
    assert_bounds(
        finished.presentation.slides[0].objects[0].bounds(),
        Bounds::new(20.0, 20.0, 350.0, 110.0),
    );
}

#[test]
fn test_apply_resize_commits_given_bounds() {
    let (editor, object_id) = editor_with_text();
    let target = Bounds::new(5.0, 6.0, 70.0, 80.0);

    let applied = editor
        .start_resize(object_id, ResizeHandle::Left, Pos2::ZERO)
        .apply_resize(target);
    assert_bounds(applied.presentation.slides[0].objects[0].bounds(), target);
    assert!(!applied.is_resizing());
}

#[test]
fn test_cancel_resize_leaves_the_object_alone() {
    let (editor, object_id) = editor_with_text();
    let cancelled = editor
        .start_resize(object_id, ResizeHandle::Bottom, Pos2::new(100.0, 100.0))
        .cancel_resize();

    assert!(!cancelled.is_resizing());
    assert!(Arc::ptr_eq(&cancelled.presentation, &editor.presentation));
}

#[test]
fn test_resize_requires_the_object_to_be_selected() {
    let (editor, object_id) = editor_with_text();
    let unselected = editor.clear_object_selection();

    let after = unselected.start_resize(object_id, ResizeHandle::Right, Pos2::ZERO);
    assert!(after.is_unchanged_from(&unselected));
}

#[test]
fn test_apply_without_resize_is_a_no_op() {
    let (editor, _) = editor_with_text();
    let after = editor.apply_resize(Bounds::new(0.0, 0.0, 10.0, 10.0));
    assert!(after.is_unchanged_from(&editor));
}
