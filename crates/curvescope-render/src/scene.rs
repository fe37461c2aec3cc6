//! Renderable scene objects.
//!
//! A render call produces one top-level [`SceneObject`], tagged with the
//! mode's fixed name. Container modes attach one child per extracted
//! primitive group.

use crate::handle::{GeometryHandle, MaterialHandle};

/// How a scene object's geometry is interpreted at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// Pure container; no geometry of its own.
    Group,
    /// Indexed triangle mesh.
    Mesh,
    /// Connected polyline (N vertices, N-1 segments).
    LineStrip,
    /// Independent segments (every 2 indices form a segment).
    LineSegments,
}

/// A node in the produced scene tree.
#[derive(Debug, Clone)]
pub struct SceneObject {
    /// Human-readable name; the top-level object carries the mode's fixed name.
    pub name: String,
    /// Draw interpretation.
    pub kind: ObjectKind,
    /// Geometry drawn by this node, if any.
    pub geometry: Option<GeometryHandle>,
    /// Material used by this node, if any.
    pub material: Option<MaterialHandle>,
    /// Child objects.
    pub children: Vec<SceneObject>,
}

impl SceneObject {
    /// Creates an empty group container.
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ObjectKind::Group,
            geometry: None,
            material: None,
            children: Vec::new(),
        }
    }

    /// Creates a leaf object with geometry and material.
    pub fn with_geometry(
        name: impl Into<String>,
        kind: ObjectKind,
        geometry: GeometryHandle,
        material: MaterialHandle,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            geometry: Some(geometry),
            material: Some(material),
            children: Vec::new(),
        }
    }

    /// Attaches a child object.
    pub fn add_child(&mut self, child: SceneObject) {
        self.children.push(child);
    }

    /// Finds a direct child by name.
    #[must_use]
    pub fn find_child(&self, name: &str) -> Option<&SceneObject> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Finds a direct child by name, mutably.
    pub fn find_child_mut(&mut self, name: &str) -> Option<&mut SceneObject> {
        self.children.iter_mut().find(|c| c.name == name)
    }
}
