//! # SVGKit Editor
//!
//! The interactive canvas editing core. A loaded image becomes a
//! [`Scene`] of drawable objects; the [`SceneEditor`] routes keyboard,
//! pointer, and numeric-field input to the view transform, the freehand
//! drawing controller, and the undo/redo history, then exports the
//! composed scene as SVG text.
//!
//! ## Core Components
//!
//! - **Scene**: the live collection of drawable objects plus the active
//!   selection
//! - **ViewTransform**: the container-level scale/rotate/translate state
//! - **SceneHistory**: bounded undo stack and unbounded redo stack
//! - **DrawingModeController**: freehand drawing state and brush
//! - **PointerDragController**: incremental drag-to-translate tracking
//! - **SceneEditor**: the orchestrator that owns all of the above
//!
//! ## Collaborators
//!
//! File loading ([`ImageSource`]) and export delivery ([`DownloadSink`])
//! are trait seams; the editing core never touches the filesystem
//! directly. The [`supervisor`] module provides the coarse-grained
//! fault boundary around the whole editor.

pub mod download;
pub mod drawing;
pub mod editor;
pub mod export;
pub mod history;
pub mod import;
pub mod pointer;
pub mod scene;
pub mod settings;
pub mod supervisor;
pub mod transform;

pub use download::{DownloadSink, FileDownloadSink};
pub use drawing::{BrushSettings, DrawMode, DrawingModeController};
pub use editor::{KeyInput, SceneEditor, SurfaceSize, TransformKind, TransformValue};
pub use export::render_scene_svg;
pub use history::SceneHistory;
pub use import::{FileImageSource, ImageSource};
pub use pointer::PointerDragController;
pub use scene::{ObjectKind, Scene, SceneObject};
pub use settings::EditorSettings;
pub use supervisor::{run_guarded, FALLBACK_NOTICE};
pub use transform::ViewTransform;
