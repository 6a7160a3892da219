//! Error handling for SVGKit
//!
//! Provides the error taxonomy for the editing core:
//! - Image load errors (file collaborator)
//! - Export errors (download collaborator)
//! - Settings errors (configuration persistence)
//! - Transform dispatch errors (internal routing mismatches)
//!
//! All error types use `thiserror` for ergonomic error handling.
//! A transform requested with no active object is deliberately *not*
//! an error: it is a silent no-op at the editor level.

use thiserror::Error;

/// Editor error type
#[derive(Error, Debug, Clone)]
pub enum EditorError {
    /// Loading an image file failed
    #[error("Failed to load image {path}: {reason}")]
    ImageLoad {
        /// The path of the image that failed to load.
        path: String,
        /// The reason the load failed.
        reason: String,
    },

    /// Delivering an exported scene failed
    #[error("Failed to export scene as {filename}: {reason}")]
    Export {
        /// The target filename of the export.
        filename: String,
        /// The reason the export failed.
        reason: String,
    },

    /// Reading or writing editor settings failed
    #[error("Settings error at {path}: {reason}")]
    Settings {
        /// The settings file path.
        path: String,
        /// The reason the operation failed.
        reason: String,
    },

    /// Internal transform dispatch received a kind/value mismatch
    #[error("Invalid transform dispatch: {kind} with {value}")]
    TransformDispatch {
        /// The transform kind that was requested.
        kind: String,
        /// A description of the mismatched value.
        value: String,
    },
}

/// Convenience result alias for editor operations.
pub type Result<T> = std::result::Result<T, EditorError>;
