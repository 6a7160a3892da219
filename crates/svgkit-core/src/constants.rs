//! Editor-wide constants.

/// Maximum number of entries kept on the undo stack. The oldest entry
/// is evicted before a new one is appended once this depth is reached.
pub const MAX_UNDO_DEPTH: usize = 16;

/// Freehand brush stroke width, in scene units.
pub const BRUSH_WIDTH: f64 = 5.0;

/// Freehand brush stroke color.
pub const BRUSH_COLOR: &str = "black";

/// Minimum view scale factor offered by the UI (hint only, not enforced).
pub const SCALE_MIN: f64 = 0.1;

/// Maximum view scale factor offered by the UI (hint only, not enforced).
pub const SCALE_MAX: f64 = 2.0;

/// View scale increment for the `+` / `-` keys and the scale field.
pub const SCALE_STEP: f64 = 0.1;

/// Upper bound of the rotation field, in degrees (hint only).
pub const ROTATION_MAX: f64 = 360.0;

/// Container translation step per arrow keypress, in pixels.
pub const ARROW_STEP: i32 = 1;

/// Object-scale units per view scale factor: a scale field value of 1.5
/// is applied to the active object as 150.
pub const OBJECT_SCALE_PER_FACTOR: f64 = 100.0;

/// Object scale value of an untouched object (100 = unscaled).
pub const OBJECT_SCALE_DEFAULT: f64 = 100.0;

/// Fixed filename handed to the download collaborator on export.
pub const EXPORT_FILENAME: &str = "canvas.svg";

/// MIME type handed to the download collaborator on export.
pub const EXPORT_MIME: &str = "image/svg+xml;charset=utf-8";

/// Default drawing surface width before the first viewport resize, in pixels.
pub const DEFAULT_SURFACE_WIDTH: f64 = 1200.0;

/// Default drawing surface height before the first viewport resize, in pixels.
pub const DEFAULT_SURFACE_HEIGHT: f64 = 800.0;
