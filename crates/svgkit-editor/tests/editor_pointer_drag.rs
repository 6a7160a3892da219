//! Integration tests for drag-to-translate on the container surface.

use svgkit_core::Point;
use svgkit_editor::{SceneEditor, SurfaceSize};

fn editor_with_scene() -> SceneEditor {
    let mut editor = SceneEditor::new(SurfaceSize::new(1920.0, 1080.0));
    editor.load_image("data:image/svg+xml;base64,dGVzdA==");
    editor
}

#[test]
fn test_drag_accumulates_incrementally() {
    let mut editor = editor_with_scene();

    editor.container_pointer_down(Point::new(100.0, 100.0));
    editor.container_pointer_move(Point::new(105.0, 102.0));
    assert_eq!(editor.view().translation.x, 5);
    assert_eq!(editor.view().translation.y, 2);

    // The drag start resets each move: the next delta is relative to
    // the last position, not the original press point.
    editor.container_pointer_move(Point::new(110.0, 110.0));
    assert_eq!(editor.view().translation.x, 10);
    assert_eq!(editor.view().translation.y, 10);

    editor.container_pointer_up();
    assert!(!editor.drag().is_dragging());
}

#[test]
fn test_move_without_drag_is_ignored() {
    let mut editor = editor_with_scene();
    editor.container_pointer_move(Point::new(50.0, 50.0));
    assert_eq!(editor.view().translation.x, 0);
    assert_eq!(editor.view().translation.y, 0);
}

#[test]
fn test_pointer_leave_ends_drag() {
    let mut editor = editor_with_scene();
    editor.container_pointer_down(Point::new(0.0, 0.0));
    editor.container_pointer_leave();

    editor.container_pointer_move(Point::new(30.0, 30.0));
    assert_eq!(editor.view().translation.x, 0);
    assert_eq!(editor.view().translation.y, 0);
}

#[test]
fn test_drag_never_touches_scene_objects() {
    let mut editor = editor_with_scene();
    let bg_before = editor.scene().unwrap().background().unwrap().clone();

    editor.container_pointer_down(Point::new(10.0, 10.0));
    editor.container_pointer_move(Point::new(60.0, 85.0));
    editor.container_pointer_up();

    assert_eq!(editor.view().translation.x, 50);
    assert_eq!(editor.view().translation.y, 75);
    assert_eq!(*editor.scene().unwrap().background().unwrap(), bg_before);
}

#[test]
fn test_drag_works_before_any_load() {
    // The container transform is purely visual and exists without a scene.
    let mut editor = SceneEditor::new(SurfaceSize::new(800.0, 600.0));
    editor.container_pointer_down(Point::new(0.0, 0.0));
    editor.container_pointer_move(Point::new(7.0, -3.0));
    assert_eq!(editor.view().translation.x, 7);
    assert_eq!(editor.view().translation.y, -3);
}

#[test]
fn test_new_drag_starts_from_current_position() {
    let mut editor = editor_with_scene();

    editor.container_pointer_down(Point::new(100.0, 100.0));
    editor.container_pointer_move(Point::new(110.0, 100.0));
    editor.container_pointer_up();

    // A fresh press far away must not produce a jump.
    editor.container_pointer_down(Point::new(500.0, 500.0));
    editor.container_pointer_move(Point::new(501.0, 500.0));
    assert_eq!(editor.view().translation.x, 11);
    assert_eq!(editor.view().translation.y, 0);
}
