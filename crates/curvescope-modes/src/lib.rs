//! Mode renderers for curvescope-rs.
//!
//! Each render mode is a strategy for turning a [`CurvatureGrid`] into a
//! renderable scene object:
//!
//! - [`MeshRenderer`] - deviation-displaced surface mesh
//! - [`ContourRenderer`] - iso-contour line extraction
//! - [`FieldLinesRenderer`] - tensor-flow field line tracing
//! - [`GravitationalWavesRenderer`] - shader-animated wave surface
//!
//! All four share the [`ModeRenderer`] capability set and are reachable
//! through a [`ModeRegistry`]. A renderer hands every GPU resource it creates
//! to the caller inside [`RenderOutput`]; on later frames the caller may
//! attempt an in-place [`ModeRenderer::update`], falling back to a fresh
//! render plus disposal of the old tracker when the update reports
//! [`UpdateOutcome::RebuildRequired`].

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]

pub mod contour;
pub mod field_lines;
pub mod mesh;
pub mod registry;
pub mod waves;

mod sampling;

pub use contour::ContourRenderer;
pub use field_lines::FieldLinesRenderer;
pub use mesh::MeshRenderer;
pub use registry::{create_mode_renderer, ModeRegistry};
pub use waves::{GravitationalWavesRenderer, U_AMPLITUDE, U_FREQUENCY};

use curvescope_core::{CurvatureGrid, RenderMode, Result};
use curvescope_render::{ResourceTracker, SceneObject};

/// Result of one render call: the scene object plus the tracker that owns
/// every GPU resource created while building it.
///
/// Ownership of the tracker moves to the caller; the renderer retains no
/// reference to it.
#[derive(Debug)]
pub struct RenderOutput {
    /// Top-level renderable object, tagged with the mode's fixed name.
    pub object: SceneObject,
    /// Owner record of the GPU resources backing `object`.
    pub resources: ResourceTracker,
}

/// Outcome of an in-place update attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Existing buffers were rewritten in place; no new resources exist.
    Updated,
    /// Topology changed (or in-place updates are unsupported for this mode);
    /// the caller must re-render and dispose the old tracker.
    RebuildRequired,
}

impl UpdateOutcome {
    /// Returns true for [`UpdateOutcome::Updated`].
    #[must_use]
    pub fn is_updated(self) -> bool {
        self == UpdateOutcome::Updated
    }
}

/// Common capability set of the four mode renderers.
pub trait ModeRenderer: std::fmt::Debug {
    /// The mode this renderer implements.
    fn mode(&self) -> RenderMode;

    /// Builds a fresh scene object and resource tracker from the grid.
    fn render(&mut self, grid: &CurvatureGrid) -> Result<RenderOutput>;

    /// Attempts to mutate a previously rendered object's buffers in place.
    ///
    /// Succeeds only when the object's topology is still valid for the new
    /// grid; on [`UpdateOutcome::RebuildRequired`] nothing was mutated.
    fn update(&mut self, grid: &CurvatureGrid, object: &mut SceneObject) -> UpdateOutcome;
}
