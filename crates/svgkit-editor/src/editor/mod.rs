//! Scene editor orchestration.
//!
//! The [`SceneEditor`] owns the scene, the container-level view
//! transform, the history stacks, and the drawing and drag controllers,
//! and routes all input to them. Scene mutations go through a single
//! "mutate, then notify" dispatch so the history hooks always observe a
//! completed mutation.
//!
//! This module is split into submodules:
//! - `input`: keyboard and pointer event routing
//! - `fields`: numeric-field changes and the per-object transform dispatch

mod fields;
mod input;

pub use fields::{TransformKind, TransformValue};
pub use input::KeyInput;

use crate::download::DownloadSink;
use crate::drawing::{DrawMode, DrawingModeController};
use crate::export::render_scene_svg;
use crate::history::SceneHistory;
use crate::pointer::PointerDragController;
use crate::scene::Scene;
use crate::settings::EditorSettings;
use crate::transform::ViewTransform;
use svgkit_core::constants::{
    DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH, EXPORT_FILENAME, EXPORT_MIME,
};
use svgkit_core::{Point, Result};

/// Dimensions of a display surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self::new(DEFAULT_SURFACE_WIDTH, DEFAULT_SURFACE_HEIGHT)
    }
}

/// The canvas editing orchestrator.
///
/// Exclusively owns the scene for the duration of an editing session.
/// There is no scene until the first image load; operations that need
/// one are no-ops before that.
#[derive(Debug, Clone)]
pub struct SceneEditor {
    scene: Option<Scene>,
    view: ViewTransform,
    history: SceneHistory,
    drawing: DrawingModeController,
    drag: PointerDragController,
    settings: EditorSettings,
    surface: SurfaceSize,
    viewport: SurfaceSize,
}

impl SceneEditor {
    /// Creates an editor with default settings and the given full
    /// viewport dimensions.
    pub fn new(viewport: SurfaceSize) -> Self {
        Self::with_settings(viewport, EditorSettings::default())
    }

    /// Creates an editor with explicit settings.
    pub fn with_settings(viewport: SurfaceSize, settings: EditorSettings) -> Self {
        Self {
            scene: None,
            view: ViewTransform::default(),
            history: SceneHistory::with_depth(settings.undo_depth),
            drawing: DrawingModeController::with_settings(&settings),
            drag: PointerDragController::new(),
            settings,
            surface: SurfaceSize::default(),
            viewport,
        }
    }

    /// Initializes the scene from a loaded image data URI.
    ///
    /// A new load replaces the prior scene entirely: fresh object
    /// collection, fresh history stacks, and a reset view transform.
    pub fn load_image(&mut self, data_uri: impl Into<String>) {
        self.scene = Some(Scene::with_background(data_uri));
        self.history = SceneHistory::with_depth(self.settings.undo_depth);
        self.view = ViewTransform::default();
        self.drag.end();
        tracing::info!("scene initialized from loaded image");
    }

    /// Adds a generic drawable object through the mutation dispatch.
    /// Returns `None` when no scene is loaded.
    pub fn add_object(&mut self) -> Option<u64> {
        let scene = self.scene.as_mut()?;
        let id = scene.add_other();
        self.history.record_add(id);
        Some(id)
    }

    /// Starts a freehand stroke at the given position: the new path
    /// object becomes active and its addition is recorded as the single
    /// history entry for the whole stroke.
    pub fn add_stroke_at(&mut self, origin: Point) -> Option<u64> {
        let scene = self.scene.as_mut()?;
        let id = scene.add_path(origin);
        scene.set_active(Some(id));
        self.history.record_add(id);
        Some(id)
    }

    /// Removes an object through the mutation dispatch: the removal is
    /// performed first, then notified. Every removal feeds the redo
    /// stack, whatever its cause.
    pub fn remove_object(&mut self, id: u64) -> bool {
        let Some(scene) = self.scene.as_mut() else {
            return false;
        };
        match scene.remove_object_return(id) {
            Some(obj) => {
                self.history.record_remove(obj);
                true
            }
            None => false,
        }
    }

    /// Undoes the most recent unreversed addition. No-op when the undo
    /// stack is empty or no scene is loaded.
    pub fn undo(&mut self) -> bool {
        match self.scene.as_mut() {
            Some(scene) => self.history.undo(scene),
            None => false,
        }
    }

    /// Redoes the most recent undo. No-op when the redo stack is empty
    /// or no scene is loaded.
    pub fn redo(&mut self) -> bool {
        match self.scene.as_mut() {
            Some(scene) => self.history.redo(scene),
            None => false,
        }
    }

    /// Flips the drawing mode (Start/Stop Drawing button).
    pub fn toggle_drawing(&mut self) -> DrawMode {
        self.drawing.toggle()
    }

    /// Sets the active selection on the scene, if one is loaded.
    pub fn set_active(&mut self, id: Option<u64>) {
        if let Some(scene) = self.scene.as_mut() {
            scene.set_active(id);
        }
    }

    /// Serializes the scene to SVG text and hands it to the download
    /// collaborator under the fixed export filename and MIME type.
    /// No-op when no scene is loaded.
    pub fn export_scene(&self, sink: &mut dyn DownloadSink) -> Result<()> {
        let Some(scene) = self.scene.as_ref() else {
            tracing::debug!("export requested with no scene loaded");
            return Ok(());
        };
        let svg = render_scene_svg(scene, &self.view, self.drawing.brush(), self.surface);
        sink.deliver(EXPORT_FILENAME, EXPORT_MIME, &svg)
    }

    /// Updates the full viewport dimensions reported by the host.
    pub fn set_viewport(&mut self, viewport: SurfaceSize) {
        self.viewport = viewport;
    }

    /// Resizes the display surface to the full viewport dimensions,
    /// not proportioned to the image size.
    pub fn resize_surface_to_viewport(&mut self) {
        self.surface = self.viewport;
    }

    /// Tears the editor down: releases the scene and resets the input
    /// controllers so no late events can act on stale state.
    pub fn close(&mut self) {
        self.scene = None;
        self.history.clear();
        self.drag.end();
        self.drawing.pointer_up();
    }

    /// Gets the scene, if one is loaded.
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    /// Gets the container-level view transform.
    pub fn view(&self) -> ViewTransform {
        self.view
    }

    /// Gets the history stacks.
    pub fn history(&self) -> &SceneHistory {
        &self.history
    }

    /// Gets the drawing mode controller.
    pub fn drawing(&self) -> &DrawingModeController {
        &self.drawing
    }

    /// Gets the drag controller.
    pub fn drag(&self) -> &PointerDragController {
        &self.drag
    }

    /// Gets the current display surface size.
    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    /// Gets the editor settings.
    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }
}
