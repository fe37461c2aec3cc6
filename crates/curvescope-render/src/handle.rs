//! GPU-resource handle types.
//!
//! [`Geometry`], [`Material`], and [`Texture`] model the GPU-resident objects a
//! render call creates. Handles are shared: the scene object that draws a
//! geometry and the [`ResourceTracker`](crate::ResourceTracker) that owns its
//! lifetime reference the same backing store. Disposal through any handle
//! releases the backing buffers irrecoverably; a disposed resource must not be
//! reused.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use glam::{Vec3, Vec4};

use crate::vertex::MeshVertex;

/// A named shader uniform value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    /// Scalar uniform.
    Float(f32),
    /// 3-component vector uniform.
    Vec3(Vec3),
    /// 4-component vector uniform.
    Vec4(Vec4),
}

impl UniformValue {
    /// Returns the scalar value, if this uniform is a `Float`.
    #[must_use]
    pub fn as_float(&self) -> Option<f32> {
        match self {
            UniformValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

/// Vertex buffer storage for one renderable geometry.
#[derive(Debug, Default)]
pub struct Geometry {
    label: String,
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    colors: Vec<Vec4>,
    indices: Vec<u32>,
    disposed: bool,
}

impl Geometry {
    /// Creates an empty geometry with a debug label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Returns the debug label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the vertex positions.
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Returns the vertex normals.
    #[must_use]
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Returns the vertex colors.
    #[must_use]
    pub fn colors(&self) -> &[Vec4] {
        &self.colors
    }

    /// Returns the triangle/line indices.
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Overwrites the vertex buffers.
    ///
    /// Used both for initial upload and for in-place updates; in-place callers
    /// must pass buffers of the same length as the existing ones.
    pub fn write_vertices(&mut self, positions: Vec<Vec3>, normals: Vec<Vec3>, colors: Vec<Vec4>) {
        self.positions = positions;
        self.normals = normals;
        self.colors = colors;
    }

    /// Overwrites the index buffer.
    pub fn write_indices(&mut self, indices: Vec<u32>) {
        self.indices = indices;
    }

    /// Packs the vertex buffers into the interleaved upload format.
    ///
    /// Missing normals default to +Y and missing colors to opaque white, so
    /// the packed buffer always has one record per position.
    #[must_use]
    pub fn interleaved(&self) -> Vec<MeshVertex> {
        self.positions
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                let normal = self.normals.get(i).copied().unwrap_or(Vec3::Y);
                let color = self.colors.get(i).copied().unwrap_or(Vec4::ONE);
                MeshVertex::new(p, normal, color)
            })
            .collect()
    }

    /// Returns true if this geometry has been disposed.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Releases the backing buffers. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        log::debug!("disposing geometry '{}'", self.label);
        self.positions = Vec::new();
        self.normals = Vec::new();
        self.colors = Vec::new();
        self.indices = Vec::new();
        self.disposed = true;
    }
}

/// Shader material: a named uniform set plus an optional color-ramp texture.
#[derive(Debug, Default)]
pub struct Material {
    label: String,
    uniforms: HashMap<String, UniformValue>,
    color_ramp: Option<TextureHandle>,
    disposed: bool,
}

impl Material {
    /// Creates a material with a debug label and no uniforms.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Returns the debug label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Sets a named uniform value.
    pub fn set_uniform(&mut self, name: impl Into<String>, value: UniformValue) {
        self.uniforms.insert(name.into(), value);
    }

    /// Reads a named uniform value.
    #[must_use]
    pub fn uniform(&self, name: &str) -> Option<UniformValue> {
        self.uniforms.get(name).copied()
    }

    /// Binds a color-ramp texture.
    pub fn set_color_ramp(&mut self, texture: TextureHandle) {
        self.color_ramp = Some(texture);
    }

    /// Returns the bound color-ramp texture, if any.
    #[must_use]
    pub fn color_ramp(&self) -> Option<&TextureHandle> {
        self.color_ramp.as_ref()
    }

    /// Returns true if this material has been disposed.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Releases the uniform set and texture binding. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        log::debug!("disposing material '{}'", self.label);
        self.uniforms.clear();
        self.color_ramp = None;
        self.disposed = true;
    }
}

/// RGBA8 texture storage.
#[derive(Debug, Default)]
pub struct Texture {
    label: String,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    disposed: bool,
}

impl Texture {
    /// Creates a texture from RGBA8 pixel data.
    ///
    /// # Panics
    /// Panics if `pixels.len() != width * height * 4`.
    pub fn new(label: impl Into<String>, width: u32, height: u32, pixels: Vec<u8>) -> Self {
        assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * 4,
            "texture pixel data must be width * height * 4 bytes"
        );
        Self {
            label: label.into(),
            width,
            height,
            pixels,
            disposed: false,
        }
    }

    /// Returns the debug label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the texture width in texels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the texture height in texels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the RGBA8 pixel data.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns true if this texture has been disposed.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Releases the pixel data. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        log::debug!("disposing texture '{}'", self.label);
        self.pixels = Vec::new();
        self.disposed = true;
    }
}

macro_rules! shared_handle {
    ($(#[$doc:meta])* $handle:ident, $inner:ty) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $handle(Arc<Mutex<$inner>>);

        impl $handle {
            /// Wraps a resource in a shared handle.
            #[must_use]
            pub fn new(inner: $inner) -> Self {
                Self(Arc::new(Mutex::new(inner)))
            }

            /// Locks the resource for reading or writing.
            pub fn lock(&self) -> MutexGuard<'_, $inner> {
                self.0.lock().expect("resource handle poisoned")
            }

            /// Disposes the underlying resource. Idempotent.
            pub fn dispose(&self) {
                self.lock().dispose();
            }

            /// Returns true if the underlying resource has been disposed.
            #[must_use]
            pub fn is_disposed(&self) -> bool {
                self.lock().is_disposed()
            }

            /// Returns true if two handles reference the same resource.
            #[must_use]
            pub fn same_resource(&self, other: &Self) -> bool {
                Arc::ptr_eq(&self.0, &other.0)
            }
        }
    };
}

shared_handle!(
    /// Shared handle to a [`Geometry`].
    GeometryHandle,
    Geometry
);
shared_handle!(
    /// Shared handle to a [`Material`].
    MaterialHandle,
    Material
);
shared_handle!(
    /// Shared handle to a [`Texture`].
    TextureHandle,
    Texture
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interleaved_packs_one_record_per_position() {
        let mut geom = Geometry::new("test");
        geom.write_vertices(vec![Vec3::ZERO, Vec3::X], vec![Vec3::Y], vec![]);
        let packed = geom.interleaved();
        assert_eq!(packed.len(), 2);
        assert_eq!(packed[0].normal, [0.0, 1.0, 0.0]);
        // Defaults fill the short buffers
        assert_eq!(packed[1].normal, [0.0, 1.0, 0.0]);
        assert_eq!(packed[1].color, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(crate::vertex::as_bytes(&packed).len(), 80);
    }

    #[test]
    fn test_geometry_dispose_clears_buffers() {
        let mut geom = Geometry::new("test");
        geom.write_vertices(
            vec![Vec3::ZERO, Vec3::ONE],
            vec![Vec3::Y, Vec3::Y],
            vec![Vec4::ONE, Vec4::ONE],
        );
        geom.write_indices(vec![0, 1]);
        assert_eq!(geom.vertex_count(), 2);

        geom.dispose();
        assert!(geom.is_disposed());
        assert_eq!(geom.vertex_count(), 0);
        assert!(geom.indices().is_empty());

        // Idempotent
        geom.dispose();
        assert!(geom.is_disposed());
    }

    #[test]
    fn test_material_uniforms() {
        let mut mat = Material::new("test");
        mat.set_uniform("uAmplitude", UniformValue::Float(1.5));
        assert_eq!(mat.uniform("uAmplitude"), Some(UniformValue::Float(1.5)));
        assert_eq!(mat.uniform("uAmplitude").unwrap().as_float(), Some(1.5));
        assert_eq!(mat.uniform("missing"), None);

        mat.dispose();
        assert!(mat.is_disposed());
        assert_eq!(mat.uniform("uAmplitude"), None);
    }

    #[test]
    fn test_handles_share_backing_store() {
        let handle = GeometryHandle::new(Geometry::new("shared"));
        let alias = handle.clone();
        assert!(handle.same_resource(&alias));

        alias.lock().write_vertices(vec![Vec3::X], vec![Vec3::Y], vec![Vec4::ONE]);
        assert_eq!(handle.lock().vertex_count(), 1);

        handle.dispose();
        assert!(alias.is_disposed());
    }

    #[test]
    fn test_texture_size_checked() {
        let tex = Texture::new("ramp", 4, 1, vec![0; 16]);
        assert_eq!(tex.width(), 4);
        assert_eq!(tex.pixels().len(), 16);
    }
}
