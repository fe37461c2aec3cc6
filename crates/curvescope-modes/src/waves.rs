//! Gravitational wave render mode.
//!
//! Builds a plane mesh whose surface deformation happens in the shader, driven
//! by the `uAmplitude` and `uFrequency` uniforms. The uniforms are sourced
//! from this renderer's [`WaveParameters`], which are per-instance state:
//! out-of-range values are clamped on the way in, and changing them while a
//! wave mesh is held pushes the new values to its material immediately.

use curvescope_core::{CurvatureGrid, RenderMode, Result, WaveParameterUpdate, WaveParameters};
use curvescope_render::{
    sample_color_map, Geometry, GeometryHandle, Material, MaterialHandle, ObjectKind,
    ResourceTracker, SceneObject, UniformValue,
};
use glam::{Vec3, Vec4};

use crate::mesh::grid_indices;
use crate::{ModeRenderer, RenderOutput, UpdateOutcome};

/// Uniform slot for the wave displacement amplitude.
pub const U_AMPLITUDE: &str = "uAmplitude";
/// Uniform slot for the wave oscillation frequency.
pub const U_FREQUENCY: &str = "uFrequency";

/// Name of the deformed child mesh.
const WAVE_MESH_NAME: &str = "wave-mesh";

/// Renders the curvature grid as a shader-animated gravitational wave surface.
#[derive(Debug, Default)]
pub struct GravitationalWavesRenderer {
    params: WaveParameters,
    built_resolution: Option<u32>,
    wave_material: Option<MaterialHandle>,
}

impl GravitationalWavesRenderer {
    /// Creates a renderer with default wave parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current wave parameters.
    #[must_use]
    pub fn wave_parameters(&self) -> WaveParameters {
        self.params
    }

    /// Merges a partial parameter update, clamping amplitude and frequency.
    ///
    /// If a wave mesh is currently held, its shader uniforms reflect the new
    /// clamped values immediately.
    pub fn set_wave_parameters(&mut self, update: WaveParameterUpdate) {
        self.params.apply(update);
        if let Some(material) = &self.wave_material {
            if !material.is_disposed() {
                Self::push_uniforms(material, self.params);
            }
        }
    }

    fn push_uniforms(material: &MaterialHandle, params: WaveParameters) {
        let mut material = material.lock();
        material.set_uniform(U_AMPLITUDE, UniformValue::Float(params.amplitude));
        material.set_uniform(U_FREQUENCY, UniformValue::Float(params.frequency));
    }

    /// Flat plane vertices spanning the grid's horizontal extent, colored by
    /// radial distance; the ripple itself is applied in the shader.
    fn build_vertices(grid: &CurvatureGrid) -> (Vec<Vec3>, Vec<Vec3>, Vec<Vec4>) {
        let r = grid.resolution;
        let cells = (r - 1) as f32;
        let center = grid.bounds.center();
        let half_diag = (grid.bounds.size() * 0.5).length().max(f32::EPSILON);
        let count = (r as usize) * (r as usize);

        let mut positions = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);
        for z in 0..r {
            for x in 0..r {
                let tx = x as f32 / cells;
                let tz = z as f32 / cells;
                let p = Vec3::new(
                    grid.bounds.min.x + tx * grid.bounds.size().x,
                    center.y,
                    grid.bounds.min.z + tz * grid.bounds.size().z,
                );
                let radial = ((p - center).length() / half_diag).clamp(0.0, 1.0);
                positions.push(p);
                colors.push(sample_color_map(1.0 - radial));
            }
        }
        let normals = vec![Vec3::Y; count];
        (positions, normals, colors)
    }
}

impl ModeRenderer for GravitationalWavesRenderer {
    fn mode(&self) -> RenderMode {
        RenderMode::GravitationalWaves
    }

    fn render(&mut self, grid: &CurvatureGrid) -> Result<RenderOutput> {
        grid.validate()?;
        log::debug!(
            "rendering wave surface at resolution {} (amplitude {}, frequency {})",
            grid.resolution,
            self.params.amplitude,
            self.params.frequency
        );

        let mut resources = ResourceTracker::new();

        let (positions, normals, colors) = Self::build_vertices(grid);
        let mut geometry = Geometry::new(WAVE_MESH_NAME);
        geometry.write_vertices(positions, normals, colors);
        geometry.write_indices(grid_indices(grid.resolution));
        let geometry = resources.track_geometry(GeometryHandle::new(geometry));

        let material = MaterialHandle::new(Material::new(WAVE_MESH_NAME));
        Self::push_uniforms(&material, self.params);
        let material = resources.track_material(material);

        let mut root = SceneObject::group(RenderMode::GravitationalWaves.object_name());
        root.add_child(SceneObject::with_geometry(
            WAVE_MESH_NAME,
            ObjectKind::Mesh,
            geometry,
            material.clone(),
        ));

        self.built_resolution = Some(grid.resolution);
        self.wave_material = Some(material);
        Ok(RenderOutput {
            object: root,
            resources,
        })
    }

    fn update(&mut self, grid: &CurvatureGrid, object: &mut SceneObject) -> UpdateOutcome {
        if self.built_resolution != Some(grid.resolution) {
            return UpdateOutcome::RebuildRequired;
        }
        let Some(child) = object.find_child_mut(WAVE_MESH_NAME) else {
            return UpdateOutcome::RebuildRequired;
        };
        let Some(geometry) = &child.geometry else {
            return UpdateOutcome::RebuildRequired;
        };

        let (positions, normals, colors) = Self::build_vertices(grid);
        geometry.lock().write_vertices(positions, normals, colors);
        if let Some(material) = &child.material {
            Self::push_uniforms(material, self.params);
        }
        log::debug!("updated wave surface in place");
        UpdateOutcome::Updated
    }
}
