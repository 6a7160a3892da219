//! Freehand drawing mode state and brush parameters.

use crate::settings::EditorSettings;
use svgkit_core::constants::{BRUSH_COLOR, BRUSH_WIDTH};

/// Drawing modes for the canvas surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    Idle,
    Drawing,
}

/// Brush parameters used while drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct BrushSettings {
    pub width: f64,
    pub color: String,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            width: BRUSH_WIDTH,
            color: BRUSH_COLOR.to_string(),
        }
    }
}

/// Toggles freehand-drawing capability on the active scene.
///
/// Pointer-down unconditionally forces `Drawing` and pointer-up
/// unconditionally forces `Idle`, regardless of what the toggle last
/// set. Entering `Drawing` fixes the brush to the configured width and
/// color.
#[derive(Debug, Clone)]
pub struct DrawingModeController {
    mode: DrawMode,
    brush: BrushSettings,
    configured_brush: BrushSettings,
}

impl DrawingModeController {
    /// Creates a controller in `Idle` with the default brush.
    pub fn new() -> Self {
        Self::with_settings(&EditorSettings::default())
    }

    /// Creates a controller whose brush comes from editor settings.
    pub fn with_settings(settings: &EditorSettings) -> Self {
        let brush = BrushSettings {
            width: settings.brush_width,
            color: settings.brush_color.clone(),
        };
        Self {
            mode: DrawMode::Idle,
            brush: brush.clone(),
            configured_brush: brush,
        }
    }

    /// Gets the current drawing mode.
    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    /// Returns true while freehand capture is enabled.
    pub fn is_drawing(&self) -> bool {
        self.mode == DrawMode::Drawing
    }

    /// Gets the brush parameters.
    pub fn brush(&self) -> &BrushSettings {
        &self.brush
    }

    /// Flips between `Idle` and `Drawing` (Start/Stop Drawing button).
    pub fn toggle(&mut self) -> DrawMode {
        let next = match self.mode {
            DrawMode::Idle => DrawMode::Drawing,
            DrawMode::Drawing => DrawMode::Idle,
        };
        self.set_mode(next);
        next
    }

    /// Pointer went down over the scene: forces `Drawing`.
    pub fn pointer_down(&mut self) {
        self.set_mode(DrawMode::Drawing);
    }

    /// Pointer released: forces `Idle`.
    pub fn pointer_up(&mut self) {
        self.set_mode(DrawMode::Idle);
    }

    fn set_mode(&mut self, mode: DrawMode) {
        if mode == DrawMode::Drawing {
            self.brush = self.configured_brush.clone();
        }
        self.mode = mode;
    }
}

impl Default for DrawingModeController {
    fn default() -> Self {
        Self::new()
    }
}
