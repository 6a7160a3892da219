//! Image load collaborator.
//!
//! Turns a user-selected file into an opaque data-URI string the
//! editor uses to initialize a scene's background image. Only one
//! result is active at a time: a new load replaces the prior scene
//! entirely, which also resets the history stacks.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::path::Path;
use svgkit_core::{EditorError, Result};

/// Collaborator that produces a data-URI string for an image file.
pub trait ImageSource {
    /// Loads the file and returns its contents as a data URI.
    fn load(&self, path: &Path) -> Result<String>;
}

/// File-based image source: reads bytes, sniffs the format, and
/// base64-encodes the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileImageSource;

impl FileImageSource {
    pub fn new() -> Self {
        Self
    }
}

impl ImageSource for FileImageSource {
    fn load(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path).map_err(|e| EditorError::ImageLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let mime = sniff_mime(path, &bytes);
        tracing::debug!(path = %path.display(), mime, len = bytes.len(), "loaded image file");
        Ok(format!("data:{};base64,{}", mime, BASE64.encode(&bytes)))
    }
}

/// Determines the MIME type of an image file from its content, falling
/// back to the extension for SVG (which the raster sniffer cannot see).
fn sniff_mime(path: &Path, bytes: &[u8]) -> &'static str {
    if looks_like_svg(path, bytes) {
        return "image/svg+xml";
    }
    match image::guess_format(bytes) {
        Ok(image::ImageFormat::Png) => "image/png",
        Ok(image::ImageFormat::Jpeg) => "image/jpeg",
        Ok(image::ImageFormat::Gif) => "image/gif",
        Ok(image::ImageFormat::WebP) => "image/webp",
        Ok(image::ImageFormat::Bmp) => "image/bmp",
        Ok(_) | Err(_) => "application/octet-stream",
    }
}

fn looks_like_svg(path: &Path, bytes: &[u8]) -> bool {
    if path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
    {
        return true;
    }
    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(256)]);
    let head = head.trim_start();
    head.starts_with("<svg") || (head.starts_with("<?xml") && head.contains("<svg"))
}
