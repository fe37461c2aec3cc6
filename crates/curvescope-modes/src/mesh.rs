//! Surface mesh render mode.
//!
//! Builds one deviation-displaced, color-mapped surface over the grid's
//! mid-height slice. Vertex count is `resolution^2` and the index buffer is a
//! pure function of resolution, which is what makes in-place updates valid
//! whenever the resolution is unchanged.

use curvescope_core::{CurvatureGrid, RenderMode, Result};
use curvescope_render::{
    sample_color_map, Geometry, GeometryHandle, Material, MaterialHandle, ObjectKind,
    ResourceTracker, SceneObject, UniformValue,
};
use glam::{Vec3, Vec4};

use crate::sampling::{mid_slice_deviation, mid_slice_position};
use crate::{ModeRenderer, RenderOutput, UpdateOutcome};

/// Fraction of the vertical extent the peak deviation lifts the surface by.
const LIFT_SCALE: f32 = 0.25;

/// Renders the curvature grid as a single displaced surface mesh.
#[derive(Debug, Default)]
pub struct MeshRenderer {
    built_resolution: Option<u32>,
}

impl MeshRenderer {
    /// Creates a renderer that has not built anything yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn build_vertices(grid: &CurvatureGrid) -> (Vec<Vec3>, Vec<Vec3>, Vec<Vec4>) {
        let r = grid.resolution;
        let lift_extent = grid.bounds.size().y * LIFT_SCALE;
        let count = (r as usize) * (r as usize);

        let mut heights = vec![0.0_f32; count];
        let mut positions = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);
        for z in 0..r {
            for x in 0..r {
                let t = grid.normalized_deviation(mid_slice_deviation(grid, x, z));
                let lift = t * lift_extent;
                heights[(z * r + x) as usize] = lift;
                positions.push(mid_slice_position(grid, x, z) + Vec3::Y * lift);
                colors.push(sample_color_map(t));
            }
        }

        // Normals from central differences of the height field
        let spacing = grid.spacing();
        let mut normals = Vec::with_capacity(count);
        let height = |x: i64, z: i64| {
            let x = x.clamp(0, i64::from(r) - 1) as u32;
            let z = z.clamp(0, i64::from(r) - 1) as u32;
            heights[(z * r + x) as usize]
        };
        for z in 0..i64::from(r) {
            for x in 0..i64::from(r) {
                let dx = (height(x + 1, z) - height(x - 1, z)) / (2.0 * spacing.x);
                let dz = (height(x, z + 1) - height(x, z - 1)) / (2.0 * spacing.z);
                normals.push(Vec3::new(-dx, 1.0, -dz).normalize());
            }
        }

        (positions, normals, colors)
    }
}

/// Triangle indices for an `r x r` vertex grid; shared with the wave mode,
/// whose plane has the same topology.
pub(crate) fn grid_indices(resolution: u32) -> Vec<u32> {
    let r = resolution;
    let mut indices = Vec::with_capacity(((r - 1) as usize).pow(2) * 6);
    for z in 0..r - 1 {
        for x in 0..r - 1 {
            let i0 = z * r + x;
            let i1 = i0 + 1;
            let i2 = i0 + r;
            let i3 = i2 + 1;
            indices.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
        }
    }
    indices
}

impl ModeRenderer for MeshRenderer {
    fn mode(&self) -> RenderMode {
        RenderMode::Mesh
    }

    fn render(&mut self, grid: &CurvatureGrid) -> Result<RenderOutput> {
        grid.validate()?;
        log::debug!("rendering curvature mesh at resolution {}", grid.resolution);

        let mut resources = ResourceTracker::new();

        let (positions, normals, colors) = Self::build_vertices(grid);
        let mut geometry = Geometry::new("curvature-mesh");
        geometry.write_vertices(positions, normals, colors);
        geometry.write_indices(grid_indices(grid.resolution));
        let geometry = resources.track_geometry(GeometryHandle::new(geometry));

        let mut material = Material::new("curvature-mesh");
        material.set_uniform("uMaxDeviation", UniformValue::Float(grid.max_deviation));
        let material = resources.track_material(MaterialHandle::new(material));

        let object = SceneObject::with_geometry(
            RenderMode::Mesh.object_name(),
            ObjectKind::Mesh,
            geometry,
            material,
        );

        self.built_resolution = Some(grid.resolution);
        Ok(RenderOutput { object, resources })
    }

    fn update(&mut self, grid: &CurvatureGrid, object: &mut SceneObject) -> UpdateOutcome {
        if self.built_resolution != Some(grid.resolution) {
            return UpdateOutcome::RebuildRequired;
        }
        let Some(geometry) = &object.geometry else {
            return UpdateOutcome::RebuildRequired;
        };

        let (positions, normals, colors) = Self::build_vertices(grid);
        geometry.lock().write_vertices(positions, normals, colors);
        log::debug!("updated curvature mesh in place");
        UpdateOutcome::Updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curvescope_core::GridBounds;

    fn grid(resolution: u32) -> CurvatureGrid {
        CurvatureGrid::synthetic(
            resolution,
            GridBounds::from_array([-1.0, -1.0, -1.0, 1.0, 1.0, 1.0]),
        )
        .unwrap()
    }

    #[test]
    fn test_render_produces_named_mesh() {
        let mut renderer = MeshRenderer::new();
        let out = renderer.render(&grid(8)).unwrap();
        assert_eq!(out.object.name, "curvature-mesh");
        assert_eq!(out.object.kind, ObjectKind::Mesh);
        assert!(!out.resources.geometries.is_empty());
        assert!(!out.resources.materials.is_empty());

        let geom = out.object.geometry.as_ref().unwrap().lock();
        assert_eq!(geom.vertex_count(), 64);
        assert_eq!(geom.indices().len(), 7 * 7 * 6);
        assert_eq!(geom.normals().len(), 64);
        assert_eq!(geom.colors().len(), 64);
    }

    #[test]
    fn test_update_same_resolution_mutates_in_place() {
        let mut renderer = MeshRenderer::new();
        let mut out = renderer.render(&grid(8)).unwrap();
        let before = out.object.geometry.clone().unwrap();

        assert_eq!(
            renderer.update(&grid(8), &mut out.object),
            UpdateOutcome::Updated
        );
        let after = out.object.geometry.clone().unwrap();
        assert!(before.same_resource(&after));
        assert_eq!(after.lock().vertex_count(), 64);
    }

    #[test]
    fn test_update_resolution_change_requires_rebuild() {
        let mut renderer = MeshRenderer::new();
        let mut out = renderer.render(&grid(8)).unwrap();
        let vertex_count = out.object.geometry.as_ref().unwrap().lock().vertex_count();

        assert_eq!(
            renderer.update(&grid(12), &mut out.object),
            UpdateOutcome::RebuildRequired
        );
        // Nothing was mutated
        assert_eq!(
            out.object.geometry.as_ref().unwrap().lock().vertex_count(),
            vertex_count
        );
    }

    #[test]
    fn test_update_before_render_requires_rebuild() {
        let mut renderer = MeshRenderer::new();
        let mut orphan = SceneObject::group("curvature-mesh");
        assert_eq!(
            renderer.update(&grid(8), &mut orphan),
            UpdateOutcome::RebuildRequired
        );
    }

    #[test]
    fn test_render_rejects_invalid_grid() {
        let mut renderer = MeshRenderer::new();
        let mut bad = grid(4);
        bad.samples.truncate(10);
        assert!(renderer.render(&bad).is_err());
    }
}
