//! Packed vertex records for buffer upload.
//!
//! Layouts are `#[repr(C)]` and byte-viewable with bytemuck, matching what a
//! GPU backend would consume verbatim.

use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};

/// Interleaved surface-mesh vertex (position, normal, color). 40 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// Unit normal.
    pub normal: [f32; 3],
    /// RGBA color.
    pub color: [f32; 4],
}

impl MeshVertex {
    /// Builds a vertex from glam types.
    #[must_use]
    pub fn new(position: Vec3, normal: Vec3, color: Vec4) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            color: color.to_array(),
        }
    }
}

/// Line vertex (position only). 12 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    /// World-space position.
    pub position: [f32; 3],
}

impl LineVertex {
    /// Builds a vertex from a glam position.
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        Self {
            position: position.to_array(),
        }
    }
}

/// Views a vertex slice as raw bytes for upload.
#[must_use]
pub fn as_bytes<T: Pod>(vertices: &[T]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}
