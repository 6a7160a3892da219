//! Integration tests for editor settings persistence.

use svgkit_editor::{EditorSettings, SceneEditor, SurfaceSize};

#[test]
fn test_default_settings() {
    let settings = EditorSettings::default();
    assert_eq!(settings.undo_depth, 16);
    assert!((settings.brush_width - 5.0).abs() < 1e-9);
    assert_eq!(settings.brush_color, "black");
    assert!((settings.scale_min - 0.1).abs() < 1e-9);
    assert!((settings.scale_max - 2.0).abs() < 1e-9);
    assert_eq!(settings.arrow_step, 1);
}

#[test]
fn test_settings_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let mut settings = EditorSettings::default();
    settings.undo_depth = 32;
    settings.brush_color = "red".to_string();
    settings.save_to_file(&path).unwrap();

    let loaded = EditorSettings::load_from_file(&path).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn test_partial_settings_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"undo_depth": 8}"#).unwrap();

    let loaded = EditorSettings::load_from_file(&path).unwrap();
    assert_eq!(loaded.undo_depth, 8);
    assert_eq!(loaded.brush_color, "black");
    assert!((loaded.scale_step - 0.1).abs() < 1e-9);
}

#[test]
fn test_missing_settings_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    assert!(EditorSettings::load_from_file(&path).is_err());
}

#[test]
fn test_custom_undo_depth_bounds_the_editor() {
    let mut settings = EditorSettings::default();
    settings.undo_depth = 2;

    let mut editor = SceneEditor::with_settings(SurfaceSize::new(800.0, 600.0), settings);
    editor.load_image("data:image/svg+xml;base64,dGVzdA==");
    for _ in 0..5 {
        editor.add_object().unwrap();
    }
    assert_eq!(editor.history().undo_len(), 2);
}
