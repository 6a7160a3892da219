//! Undo/redo history over scene objects.
//!
//! The undo stack records the ids of the most recently added live
//! objects, bounded to a fixed depth with oldest-first eviction. The
//! redo stack owns the objects that have left the scene and is
//! unbounded.
//!
//! The stacks are fed by observer hooks the editor invokes synchronously
//! after every scene mutation ("mutate, then notify"). `record_remove`
//! fires for *any* removal, including removals that undo itself
//! performs; the redo stack can therefore accumulate entries that were
//! not produced by an explicit undo. That is accepted behavior and must
//! not be filtered.

use crate::scene::{Scene, SceneObject};
use svgkit_core::constants::MAX_UNDO_DEPTH;

/// Bounded undo stack and unbounded redo stack of scene objects.
#[derive(Debug, Clone)]
pub struct SceneHistory {
    undo_stack: Vec<u64>,
    redo_stack: Vec<SceneObject>,
    depth: usize,
}

impl Default for SceneHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneHistory {
    /// Creates a history with the default undo depth.
    pub fn new() -> Self {
        Self::with_depth(MAX_UNDO_DEPTH)
    }

    /// Creates a history bounded to the given undo depth.
    pub fn with_depth(depth: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            depth,
        }
    }

    /// Observer hook: an object was added to the scene. Evicts the
    /// oldest entry before appending once the depth bound is reached.
    pub fn record_add(&mut self, id: u64) {
        if self.undo_stack.len() >= self.depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(id);
    }

    /// Observer hook: an object left the scene. Invoked on every
    /// removal regardless of cause; the removed object is moved onto
    /// the redo stack.
    pub fn record_remove(&mut self, obj: SceneObject) {
        self.redo_stack.push(obj);
    }

    /// Reverses the most recent unreversed addition: pops the top undo
    /// entry, removes that object from the scene, and notifies the
    /// removal (which feeds the redo stack). No-op when the undo stack
    /// is empty. The pop completes before the removal notification
    /// runs, so nested notification cannot interleave with it.
    pub fn undo(&mut self, scene: &mut Scene) -> bool {
        let Some(id) = self.undo_stack.pop() else {
            return false;
        };
        // The id may be stale if the object was already removed by
        // other means; its removal was recorded at that time.
        match scene.remove_object_return(id) {
            Some(obj) => {
                self.record_remove(obj);
                true
            }
            None => false,
        }
    }

    /// Reverses the most recent undo: pops the top redo entry, restores
    /// the very same object into the scene, and notifies the addition
    /// (which re-appends it to the undo stack). No-op when the redo
    /// stack is empty.
    pub fn redo(&mut self, scene: &mut Scene) -> bool {
        let Some(obj) = self.redo_stack.pop() else {
            return false;
        };
        let id = scene.restore_object(obj);
        self.record_add(id);
        true
    }

    /// Returns the number of undo entries.
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Returns the number of redo entries.
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// The recorded additions, oldest first.
    pub fn undo_ids(&self) -> &[u64] {
        &self.undo_stack
    }

    /// The recorded removals, oldest first.
    pub fn redo_objects(&self) -> &[SceneObject] {
        &self.redo_stack
    }

    /// Drops all history (a new scene implies fresh stacks).
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
