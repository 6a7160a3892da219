//! Editor configuration and JSON persistence.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use svgkit_core::constants::{
    ARROW_STEP, BRUSH_COLOR, BRUSH_WIDTH, MAX_UNDO_DEPTH, SCALE_MAX, SCALE_MIN, SCALE_STEP,
};

/// Editor-wide configuration.
///
/// All fields default to the built-in constants; a missing or partial
/// settings file falls back field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Maximum undo stack depth (oldest entries evicted first).
    pub undo_depth: usize,
    /// Freehand brush width, in scene units.
    pub brush_width: f64,
    /// Freehand brush color.
    pub brush_color: String,
    /// Scale field lower hint.
    pub scale_min: f64,
    /// Scale field upper hint.
    pub scale_max: f64,
    /// Scale step for the `+` / `-` keys.
    pub scale_step: f64,
    /// Container translation step per arrow keypress.
    pub arrow_step: i32,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            undo_depth: MAX_UNDO_DEPTH,
            brush_width: BRUSH_WIDTH,
            brush_color: BRUSH_COLOR.to_string(),
            scale_min: SCALE_MIN,
            scale_max: SCALE_MAX,
            scale_step: SCALE_STEP,
            arrow_step: ARROW_STEP,
        }
    }
}

impl EditorSettings {
    /// Loads settings from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let settings = serde_json::from_str(&contents)
            .with_context(|| format!("parsing settings from {}", path.display()))?;
        Ok(settings)
    }

    /// Saves settings to a JSON file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let contents = serde_json::to_string_pretty(self).context("serializing settings")?;
        std::fs::write(path, contents)
            .with_context(|| format!("writing settings to {}", path.display()))?;
        Ok(())
    }
}
