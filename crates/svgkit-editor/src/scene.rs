//! Scene graph: drawable objects and the active selection.
//!
//! A [`Scene`] is created when an image is loaded and replaced wholesale
//! by the next load. Object identity is the per-scene monotonic `u64`
//! id; ids are never reused, so two additions are never the same object
//! even when geometrically identical.

use serde::{Deserialize, Serialize};
use svgkit_core::constants::OBJECT_SCALE_DEFAULT;
use svgkit_core::Point;

/// The kind of a drawable scene object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    Image,
    Path,
    Other,
}

/// A drawable object on the scene that can be selected and manipulated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub id: u64,
    pub kind: ObjectKind,
    /// Absolute position in scene coordinates.
    pub position: Point,
    /// Scale in object-scale units (100 = unscaled).
    pub scale: f64,
    /// Rotation in degrees.
    pub rotation: f64,
    /// Ordered captured points (paths only).
    pub points: Vec<Point>,
    /// Point-command sequence regenerated from `points` on every
    /// appended point: all component values joined by single spaces.
    pub path_data: String,
    /// Data URI of the backing image (image objects only).
    pub source: Option<String>,
}

impl SceneObject {
    fn new(id: u64, kind: ObjectKind) -> Self {
        Self {
            id,
            kind,
            position: Point::default(),
            scale: OBJECT_SCALE_DEFAULT,
            rotation: 0.0,
            points: Vec::new(),
            path_data: String::new(),
            source: None,
        }
    }

    /// Creates an image object backed by a data URI.
    pub fn image(id: u64, data_uri: impl Into<String>) -> Self {
        let mut obj = Self::new(id, ObjectKind::Image);
        obj.source = Some(data_uri.into());
        obj
    }

    /// Creates an empty freehand path object starting at `origin`.
    pub fn path(id: u64, origin: Point) -> Self {
        let mut obj = Self::new(id, ObjectKind::Path);
        obj.position = origin;
        obj.push_point(origin);
        obj
    }

    /// Creates a generic drawable object.
    pub fn other(id: u64) -> Self {
        Self::new(id, ObjectKind::Other)
    }

    /// Appends a captured point and regenerates the point-command
    /// sequence from scratch. No smoothing or simplification is applied.
    pub fn push_point(&mut self, point: Point) {
        self.points.push(point);
        let mut data = String::new();
        for p in &self.points {
            if !data.is_empty() {
                data.push(' ');
            }
            data.push_str(&format!("{} {}", p.x, p.y));
        }
        self.path_data = data;
    }

    /// Returns true if this is a freehand path object.
    pub fn is_path(&self) -> bool {
        self.kind == ObjectKind::Path
    }
}

/// The live collection of scene objects plus the active selection.
///
/// Invariant: the active id, when set, always names a member object.
/// Removing the active object clears the selection.
#[derive(Debug, Clone)]
pub struct Scene {
    objects: Vec<SceneObject>,
    active: Option<u64>,
    next_id: u64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            active: None,
            next_id: 1,
        }
    }

    /// Creates a scene initialized with a background image object.
    /// The background is not selected and does not enter any history.
    pub fn with_background(data_uri: impl Into<String>) -> Self {
        let mut scene = Self::new();
        scene.add_image(data_uri);
        scene
    }

    /// Generates a new unique object id.
    pub fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Adds an image object and returns its id.
    pub fn add_image(&mut self, data_uri: impl Into<String>) -> u64 {
        let id = self.generate_id();
        self.objects.push(SceneObject::image(id, data_uri));
        id
    }

    /// Adds an empty freehand path object and returns its id.
    pub fn add_path(&mut self, origin: Point) -> u64 {
        let id = self.generate_id();
        self.objects.push(SceneObject::path(id, origin));
        id
    }

    /// Adds a generic object and returns its id.
    pub fn add_other(&mut self) -> u64 {
        let id = self.generate_id();
        self.objects.push(SceneObject::other(id));
        id
    }

    /// Removes an object and returns it (used for undo/redo).
    /// Clears the selection when the removed object was active.
    pub fn remove_object_return(&mut self, id: u64) -> Option<SceneObject> {
        let index = self.objects.iter().position(|o| o.id == id)?;
        let obj = self.objects.remove(index);
        if self.active == Some(id) {
            self.active = None;
        }
        Some(obj)
    }

    /// Restores a previously removed object with its identity intact
    /// (used for undo/redo). Returns the object's id.
    pub fn restore_object(&mut self, obj: SceneObject) -> u64 {
        let id = obj.id;
        // Keep id generation ahead of restored ids so identity is never reused.
        if id >= self.next_id {
            self.next_id = id + 1;
        }
        self.objects.push(obj);
        id
    }

    /// Gets a reference to an object by id.
    pub fn object(&self, id: u64) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Gets a mutable reference to an object by id.
    pub fn object_mut(&mut self, id: u64) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    /// Returns true if an object with the given id is in the scene.
    pub fn contains(&self, id: u64) -> bool {
        self.objects.iter().any(|o| o.id == id)
    }

    /// Sets the active selection. Selecting an id that is not a member
    /// of the scene is ignored; `None` clears the selection.
    pub fn set_active(&mut self, id: Option<u64>) {
        match id {
            Some(id) if self.contains(id) => self.active = Some(id),
            Some(_) => {}
            None => self.active = None,
        }
    }

    /// Gets the active object id, if any.
    pub fn active_id(&self) -> Option<u64> {
        self.active
    }

    /// Gets a reference to the active object, if any.
    pub fn active_object(&self) -> Option<&SceneObject> {
        self.active.and_then(|id| self.object(id))
    }

    /// Gets a mutable reference to the active object, if any.
    pub fn active_object_mut(&mut self) -> Option<&mut SceneObject> {
        let id = self.active?;
        self.object_mut(id)
    }

    /// Gets all objects in the scene, in addition order.
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Returns the number of objects in the scene.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns true when the scene has no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Gets the background image object, if one was loaded.
    pub fn background(&self) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.kind == ObjectKind::Image)
    }
}
