//! Scene and GPU-resource handle types for curvescope-rs.
//!
//! The renderers in `curvescope-modes` produce [`SceneObject`] trees whose
//! leaves reference [`Geometry`], [`Material`], and [`Texture`] handles. Every
//! handle created during a render call is recorded in a [`ResourceTracker`],
//! which owns the disposal of the underlying buffers.
//!
//! The handle types are the subsystem-owned side of the scene-graph boundary:
//! an external render loop treats them as opaque and only attaches the scene
//! object and eventually disposes the tracker.

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod color_maps;
pub mod handle;
pub mod resources;
pub mod scene;
pub mod vertex;

pub use color_maps::{color_ramp_texture, sample_color_map};
pub use handle::{Geometry, GeometryHandle, Material, MaterialHandle, Texture, TextureHandle, UniformValue};
pub use resources::ResourceTracker;
pub use scene::{ObjectKind, SceneObject};
pub use vertex::{as_bytes, LineVertex, MeshVertex};
