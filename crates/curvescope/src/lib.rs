//! curvescope-rs: renders a sampled spacetime-curvature grid into scene
//! objects using interchangeable render modes.
//!
//! # Quick Start
//!
//! ```
//! use curvescope::*;
//!
//! fn main() -> Result<()> {
//!     let bounds = GridBounds::from_array([-1.0, -1.0, -1.0, 1.0, 1.0, 1.0]);
//!     let grid = CurvatureGrid::synthetic(16, bounds)?;
//!
//!     let mut registry = ModeRegistry::new();
//!     let renderer = registry.renderer_mut(RenderMode::Mesh);
//!     let mut output = renderer.render(&grid)?;
//!
//!     // ... attach output.object to a scene graph, draw frames ...
//!
//!     // On new data, try an in-place update first
//!     let grid2 = CurvatureGrid::synthetic(16, bounds)?;
//!     if !renderer.update(&grid2, &mut output.object).is_updated() {
//!         let fresh = renderer.render(&grid2)?;
//!         output.resources.dispose();
//!         output = fresh;
//!     }
//!
//!     // The caller owns the resources and releases them when done
//!     output.resources.dispose();
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! A **mode** is one of four strategies for turning a [`CurvatureGrid`] into a
//! renderable [`SceneObject`]:
//!
//! - [`RenderMode::Mesh`] - deviation-displaced surface (`curvature-mesh`)
//! - [`RenderMode::Contour`] - iso-contour line sets (`contour-grid`)
//! - [`RenderMode::FieldLines`] - traced tensor-flow curves (`field-lines`)
//! - [`RenderMode::GravitationalWaves`] - shader-animated wave surface
//!   (`gravitational-waves`)
//!
//! Every render call returns a [`ResourceTracker`] that owns the GPU resources
//! created for it; the caller disposes it exactly once per discarded render.
//! Mesh and wave surfaces support in-place updates while the grid resolution
//! is unchanged; contour and field-line topology is data-dependent, so those
//! modes always request a rebuild.

// Re-export core types
pub use curvescope_core::{
    clamp_wave_amplitude, clamp_wave_frequency, CurvatureGrid, CurvescopeError, GridBounds,
    GridSample, RenderMode, Result, WaveParameterUpdate, WaveParameters, DEFAULT_WAVE_PARAMETERS,
    MAX_WAVE_AMPLITUDE, MAX_WAVE_FREQUENCY, MIN_WAVE_AMPLITUDE, MIN_WAVE_FREQUENCY,
};

// Re-export scene/resource types
pub use curvescope_render::{
    as_bytes, Geometry, GeometryHandle, LineVertex, Material, MaterialHandle, MeshVertex,
    ObjectKind, ResourceTracker, SceneObject, Texture, TextureHandle, UniformValue,
};

// Re-export mode renderers
pub use curvescope_modes::{
    create_mode_renderer, ContourRenderer, FieldLinesRenderer, GravitationalWavesRenderer,
    MeshRenderer, ModeRegistry, ModeRenderer, RenderOutput, UpdateOutcome, U_AMPLITUDE,
    U_FREQUENCY,
};

// Re-export glam types for convenience
pub use glam::{Vec3, Vec4};
