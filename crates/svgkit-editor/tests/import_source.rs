//! Integration tests for the image load collaborator.

use svgkit_editor::{FileImageSource, ImageSource};

const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

#[test]
fn test_svg_file_becomes_svg_data_uri() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("drawing.svg");
    std::fs::write(&path, "<svg xmlns=\"http://www.w3.org/2000/svg\"></svg>").unwrap();

    let uri = FileImageSource::new().load(&path).unwrap();
    assert!(uri.starts_with("data:image/svg+xml;base64,"));
}

#[test]
fn test_svg_detected_by_content_without_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("drawing.img");
    std::fs::write(
        &path,
        "<?xml version=\"1.0\"?>\n<svg xmlns=\"http://www.w3.org/2000/svg\"/>",
    )
    .unwrap();

    let uri = FileImageSource::new().load(&path).unwrap();
    assert!(uri.starts_with("data:image/svg+xml;base64,"));
}

#[test]
fn test_png_sniffed_from_magic_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pic.png");
    std::fs::write(&path, PNG_MAGIC).unwrap();

    let uri = FileImageSource::new().load(&path).unwrap();
    assert!(uri.starts_with("data:image/png;base64,"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.svg");
    assert!(FileImageSource::new().load(&path).is_err());
}

#[test]
fn test_data_uri_round_trips_contents() {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("drawing.svg");
    let body = "<svg xmlns=\"http://www.w3.org/2000/svg\"></svg>";
    std::fs::write(&path, body).unwrap();

    let uri = FileImageSource::new().load(&path).unwrap();
    let encoded = uri.strip_prefix("data:image/svg+xml;base64,").unwrap();
    assert_eq!(STANDARD.decode(encoded).unwrap(), body.as_bytes());
}
