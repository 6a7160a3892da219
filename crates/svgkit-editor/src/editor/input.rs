//! Keyboard and pointer event routing.
//!
//! Keyboard arrows and the `+` / `-` keys act on the container-level
//! view transform only. Pointer events arrive from two distinct
//! surfaces: the container (drag-to-translate, purely visual) and the
//! canvas (freehand drawing on the active path). Events are processed
//! strictly in arrival order on one logical thread; a pointer-move
//! always observes the drag state left by the preceding pointer-down.

use super::SceneEditor;
use svgkit_core::Point;

/// Keyboard input recognized by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// The `+` key.
    ZoomIn,
    /// The `-` key.
    ZoomOut,
}

impl SceneEditor {
    /// Routes a keypress to the container-level transform. Arrow keys
    /// are relative ±1 unit translation steps; `+` / `-` step the scale
    /// factor. No scene object is touched.
    pub fn handle_key(&mut self, key: KeyInput) {
        let step = self.settings.arrow_step;
        match key {
            KeyInput::ArrowUp => self.view = self.view.translated_by(0, -step),
            KeyInput::ArrowDown => self.view = self.view.translated_by(0, step),
            KeyInput::ArrowLeft => self.view = self.view.translated_by(-step, 0),
            KeyInput::ArrowRight => self.view = self.view.translated_by(step, 0),
            KeyInput::ZoomIn => {
                self.view = self
                    .view
                    .with_scale(self.view.scale_factor + self.settings.scale_step);
            }
            KeyInput::ZoomOut => {
                self.view = self
                    .view
                    .with_scale(self.view.scale_factor - self.settings.scale_step);
            }
        }
    }

    /// Container drag started.
    pub fn container_pointer_down(&mut self, pos: Point) {
        self.drag.begin(pos);
    }

    /// Container pointer moved: while dragging, the incremental delta
    /// is added to the container translation.
    pub fn container_pointer_move(&mut self, pos: Point) {
        if let Some(delta) = self.drag.update(pos) {
            self.view = self.view.translated_by(delta.x, delta.y);
        }
    }

    /// Container drag ended.
    pub fn container_pointer_up(&mut self) {
        self.drag.end();
    }

    /// Pointer left the container surface; treated like a drag end.
    pub fn container_pointer_leave(&mut self) {
        self.drag.end();
    }

    /// Canvas pointer went down: drawing mode is forced on regardless
    /// of the toggle, and a new stroke begins at the pointer position.
    pub fn canvas_pointer_down(&mut self, pos: Point) {
        self.drawing.pointer_down();
        self.add_stroke_at(pos);
    }

    /// Canvas pointer moved: while drawing and the active object is a
    /// path, the point is captured and the path's command sequence is
    /// regenerated. No history entry is taken per move.
    pub fn canvas_pointer_move(&mut self, pos: Point) {
        if !self.drawing.is_drawing() {
            return;
        }
        let Some(scene) = self.scene.as_mut() else {
            return;
        };
        if let Some(obj) = scene.active_object_mut() {
            if obj.is_path() {
                obj.push_point(pos);
            }
        }
    }

    /// Canvas pointer released: drawing mode is forced off.
    pub fn canvas_pointer_up(&mut self) {
        self.drawing.pointer_up();
    }
}
