//! Integration tests for the undo/redo object history.

use proptest::prelude::*;
use svgkit_core::Point;
use svgkit_editor::{SceneEditor, SurfaceSize};

fn editor_with_scene() -> SceneEditor {
    let mut editor = SceneEditor::new(SurfaceSize::new(1920.0, 1080.0));
    editor.load_image("data:image/svg+xml;base64,dGVzdA==");
    editor
}

#[test]
fn test_undo_on_empty_stack_is_noop() {
    let mut editor = editor_with_scene();
    assert!(!editor.undo());
    assert_eq!(editor.scene().unwrap().len(), 1);
    assert_eq!(editor.history().redo_len(), 0);
}

#[test]
fn test_redo_on_empty_stack_is_noop() {
    let mut editor = editor_with_scene();
    assert!(!editor.redo());
    assert_eq!(editor.scene().unwrap().len(), 1);
    assert_eq!(editor.history().undo_len(), 0);
}

#[test]
fn test_add_then_undo_removes_from_scene() {
    let mut editor = editor_with_scene();
    let id = editor.add_object().unwrap();
    assert_eq!(editor.scene().unwrap().len(), 2);
    assert_eq!(editor.history().undo_len(), 1);

    assert!(editor.undo());
    assert_eq!(editor.scene().unwrap().len(), 1);
    assert!(!editor.scene().unwrap().contains(id));
    assert_eq!(editor.history().redo_len(), 1);
    assert_eq!(editor.history().redo_objects()[0].id, id);
}

#[test]
fn test_redo_restores_identical_object() {
    let mut editor = editor_with_scene();
    editor.canvas_pointer_down(Point::new(1.0, 2.0));
    editor.canvas_pointer_move(Point::new(3.0, 4.0));
    editor.canvas_pointer_up();
    let snapshot = editor.scene().unwrap().objects().last().unwrap().clone();

    assert!(editor.undo());
    assert!(editor.redo());

    // Redo restores the very object that was removed, not a copy.
    let restored = editor.scene().unwrap().object(snapshot.id).unwrap();
    assert_eq!(*restored, snapshot);
    assert_eq!(editor.history().undo_len(), 1);
}

#[test]
fn test_undo_is_lifo() {
    let mut editor = editor_with_scene();
    let first = editor.add_object().unwrap();
    let second = editor.add_object().unwrap();

    // Most recent addition is reversed first.
    assert!(editor.undo());
    assert!(!editor.scene().unwrap().contains(second));
    assert!(editor.scene().unwrap().contains(first));

    assert!(editor.undo());
    assert!(!editor.scene().unwrap().contains(first));
}

#[test]
fn test_redo_is_lifo() {
    let mut editor = editor_with_scene();
    let first = editor.add_object().unwrap();
    let second = editor.add_object().unwrap();
    editor.undo();
    editor.undo();

    // Most recent undo is reversed first.
    assert!(editor.redo());
    assert!(editor.scene().unwrap().contains(first));
    assert!(!editor.scene().unwrap().contains(second));

    assert!(editor.redo());
    assert!(editor.scene().unwrap().contains(second));
}

#[test]
fn test_seventeenth_addition_evicts_oldest() {
    let mut editor = editor_with_scene();
    let mut ids = Vec::new();
    for _ in 0..17 {
        ids.push(editor.add_object().unwrap());
    }
    assert_eq!(editor.history().undo_len(), 16);
    // The first addition was evicted; the second is now the oldest entry.
    assert_eq!(editor.history().undo_ids()[0], ids[1]);
    assert_eq!(*editor.history().undo_ids().last().unwrap(), ids[16]);
}

#[test]
fn test_any_removal_feeds_redo_stack() {
    let mut editor = editor_with_scene();
    let id = editor.add_object().unwrap();

    // Programmatic removal, not an undo: the removal event still lands
    // on the redo stack.
    assert!(editor.remove_object(id));
    assert_eq!(editor.history().redo_len(), 1);
    assert_eq!(editor.history().redo_objects()[0].id, id);

    // The undo stack entry is now stale; popping it is a no-op.
    assert!(!editor.undo());
    assert_eq!(editor.history().redo_len(), 1);

    // Redo still restores the removed object.
    assert!(editor.redo());
    assert!(editor.scene().unwrap().contains(id));
}

#[test]
fn test_new_load_resets_stacks() {
    let mut editor = editor_with_scene();
    editor.add_object().unwrap();
    editor.undo();
    assert_eq!(editor.history().redo_len(), 1);

    editor.load_image("data:image/svg+xml;base64,bmV3");
    assert_eq!(editor.history().undo_len(), 0);
    assert_eq!(editor.history().redo_len(), 0);
    assert_eq!(editor.scene().unwrap().len(), 1);
}

proptest! {
    // N additions followed by N undos returns the scene to its
    // pre-addition state, with the N removed objects on the redo stack
    // in reverse-chronological order.
    #[test]
    fn prop_n_adds_then_n_undos_restores_scene(n in 1usize..=16) {
        let mut editor = editor_with_scene();
        let before = editor.scene().unwrap().len();

        let mut ids = Vec::new();
        for _ in 0..n {
            ids.push(editor.add_object().unwrap());
        }
        for _ in 0..n {
            prop_assert!(editor.undo());
        }

        prop_assert_eq!(editor.scene().unwrap().len(), before);
        prop_assert_eq!(editor.history().redo_len(), n);

        let redo_ids: Vec<u64> = editor.history().redo_objects().iter().map(|o| o.id).collect();
        let expected: Vec<u64> = ids.iter().rev().copied().collect();
        prop_assert_eq!(redo_ids, expected);
    }

    // The undo stack never exceeds its depth bound.
    #[test]
    fn prop_undo_depth_is_bounded(n in 1usize..60) {
        let mut editor = editor_with_scene();
        for _ in 0..n {
            editor.add_object().unwrap();
        }
        prop_assert_eq!(editor.history().undo_len(), n.min(16));
    }
}
