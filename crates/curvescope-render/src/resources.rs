//! GPU-resource lifecycle tracking.
//!
//! Every render call creates a fresh [`ResourceTracker`], records each
//! geometry/material/texture it allocates, and hands the tracker to the caller
//! inside the render output. The caller disposes the tracker exactly once per
//! discarded render; the renderer retains no reference.

use crate::handle::{GeometryHandle, MaterialHandle, TextureHandle};

/// Ownership record of the GPU-resident objects created during one render call.
#[derive(Debug, Default)]
pub struct ResourceTracker {
    /// Geometries created during the render call, in creation order.
    pub geometries: Vec<GeometryHandle>,
    /// Materials created during the render call, in creation order.
    pub materials: Vec<MaterialHandle>,
    /// Textures created during the render call, in creation order.
    pub textures: Vec<TextureHandle>,
}

impl ResourceTracker {
    /// Creates an empty tracker. Each call allocates fresh sequences.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a geometry and returns the handle for further use.
    pub fn track_geometry(&mut self, geometry: GeometryHandle) -> GeometryHandle {
        self.geometries.push(geometry.clone());
        geometry
    }

    /// Records a material and returns the handle for further use.
    pub fn track_material(&mut self, material: MaterialHandle) -> MaterialHandle {
        self.materials.push(material.clone());
        material
    }

    /// Records a texture and returns the handle for further use.
    pub fn track_texture(&mut self, texture: TextureHandle) -> TextureHandle {
        self.textures.push(texture.clone());
        texture
    }

    /// Returns the total number of tracked resources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.geometries.len() + self.materials.len() + self.textures.len()
    }

    /// Returns true if no resources are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Releases every tracked resource and empties all three sequences.
    ///
    /// Safe to call on an empty or already-disposed tracker; disposing twice
    /// is a no-op.
    pub fn dispose(&mut self) {
        if self.is_empty() {
            return;
        }
        log::debug!(
            "disposing {} geometries, {} materials, {} textures",
            self.geometries.len(),
            self.materials.len(),
            self.textures.len()
        );
        for geometry in self.geometries.drain(..) {
            geometry.dispose();
        }
        for material in self.materials.drain(..) {
            material.dispose();
        }
        for texture in self.textures.drain(..) {
            texture.dispose();
        }
    }
}
