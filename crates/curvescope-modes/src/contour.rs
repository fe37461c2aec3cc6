//! Iso-contour render mode.
//!
//! Extracts contour line segments from the mid-height slice of the scalar
//! field with marching squares, one child object per contour level. The 2D
//! cell walk mirrors the marching-cubes scheme: an inside/outside corner-sign
//! configuration selects crossed edges, and crossing points are found by
//! linear interpolation along each edge.
//!
//! Contour topology (segment count, vertex count) depends on the field shape,
//! not just the resolution, so in-place updates are never attempted; every
//! update is a full rebuild by contract.

use curvescope_core::{CurvatureGrid, RenderMode, Result};
use curvescope_render::{
    color_ramp_texture, sample_color_map, Geometry, GeometryHandle, Material, MaterialHandle,
    ObjectKind, ResourceTracker, SceneObject, UniformValue,
};
use glam::Vec3;

use crate::sampling::{mid_slice_deviation, mid_slice_position};
use crate::{ModeRenderer, RenderOutput, UpdateOutcome};

/// Cell edges: 0 = c0-c1, 1 = c1-c2, 2 = c2-c3, 3 = c3-c0, with corners
/// c0=(x,z), c1=(x+1,z), c2=(x+1,z+1), c3=(x,z+1).
type Edge = (usize, usize);

/// Crossed-edge pairs per 4-bit corner configuration (bit i set when corner i
/// is above the level). Ambiguous saddles (5, 10) resolve to two segments.
const SEGMENTS: [&[(Edge, Edge)]; 16] = [
    &[],
    &[((3, 0), (0, 1))],
    &[((0, 1), (1, 2))],
    &[((3, 0), (1, 2))],
    &[((1, 2), (2, 3))],
    &[((3, 0), (0, 1)), ((1, 2), (2, 3))],
    &[((0, 1), (2, 3))],
    &[((3, 0), (2, 3))],
    &[((2, 3), (3, 0))],
    &[((2, 3), (0, 1))],
    &[((0, 1), (1, 2)), ((2, 3), (3, 0))],
    &[((2, 3), (1, 2))],
    &[((1, 2), (3, 0))],
    &[((1, 2), (0, 1))],
    &[((0, 1), (3, 0))],
    &[],
];

/// Renders the curvature grid as iso-contour line sets.
#[derive(Debug, Default)]
pub struct ContourRenderer;

impl ContourRenderer {
    /// Creates a contour renderer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Contour levels between 0 and `max_deviation`, count derived from
    /// resolution.
    fn levels(grid: &CurvatureGrid) -> Vec<f32> {
        let n = (grid.resolution / 4).clamp(2, 6);
        (1..=n)
            .map(|i| grid.max_deviation * i as f32 / (n + 1) as f32)
            .collect()
    }

    /// Extracts the segment endpoints for one contour level.
    fn extract_level(grid: &CurvatureGrid, level: f32) -> Vec<Vec3> {
        let r = grid.resolution;
        let mut points = Vec::new();

        for z in 0..r - 1 {
            for x in 0..r - 1 {
                let values = [
                    mid_slice_deviation(grid, x, z),
                    mid_slice_deviation(grid, x + 1, z),
                    mid_slice_deviation(grid, x + 1, z + 1),
                    mid_slice_deviation(grid, x, z + 1),
                ];
                let corners = [
                    mid_slice_position(grid, x, z),
                    mid_slice_position(grid, x + 1, z),
                    mid_slice_position(grid, x + 1, z + 1),
                    mid_slice_position(grid, x, z + 1),
                ];

                let config = usize::from(values[0] > level)
                    | usize::from(values[1] > level) << 1
                    | usize::from(values[2] > level) << 2
                    | usize::from(values[3] > level) << 3;

                for &(ea, eb) in SEGMENTS[config] {
                    points.push(edge_crossing(&corners, &values, ea, level));
                    points.push(edge_crossing(&corners, &values, eb, level));
                }
            }
        }
        points
    }
}

/// Interpolates the crossing point on a cell edge.
fn edge_crossing(corners: &[Vec3; 4], values: &[f32; 4], edge: Edge, level: f32) -> Vec3 {
    let (a, b) = edge;
    let (va, vb) = (values[a], values[b]);
    let denom = vb - va;
    let t = if denom.abs() < f32::EPSILON {
        0.5
    } else {
        ((level - va) / denom).clamp(0.0, 1.0)
    };
    corners[a].lerp(corners[b], t)
}

impl ModeRenderer for ContourRenderer {
    fn mode(&self) -> RenderMode {
        RenderMode::Contour
    }

    fn render(&mut self, grid: &CurvatureGrid) -> Result<RenderOutput> {
        grid.validate()?;

        let mut resources = ResourceTracker::new();
        let ramp = resources.track_texture(color_ramp_texture(64));
        let mut root = SceneObject::group(RenderMode::Contour.object_name());

        let levels = Self::levels(grid);
        log::debug!(
            "extracting {} contour levels at resolution {}",
            levels.len(),
            grid.resolution
        );

        for (i, &level) in levels.iter().enumerate() {
            let positions = Self::extract_level(grid, level);
            let t = grid.normalized_deviation(level);
            let color = sample_color_map(t);
            let indices = (0..positions.len() as u32).collect();
            let normals = vec![Vec3::Y; positions.len()];
            let colors = vec![color; positions.len()];

            let label = format!("contour-level-{i}");
            let mut geometry = Geometry::new(label.clone());
            geometry.write_vertices(positions, normals, colors);
            geometry.write_indices(indices);
            let geometry = resources.track_geometry(GeometryHandle::new(geometry));

            let mut material = Material::new(label.clone());
            material.set_uniform("uLevel", UniformValue::Float(level));
            material.set_color_ramp(ramp.clone());
            let material = resources.track_material(MaterialHandle::new(material));

            root.add_child(SceneObject::with_geometry(
                label,
                ObjectKind::LineSegments,
                geometry,
                material,
            ));
        }

        Ok(RenderOutput {
            object: root,
            resources,
        })
    }

    /// Always a full rebuild: contour topology varies with the field shape,
    /// so safe in-place mutation cannot be guaranteed.
    fn update(&mut self, _grid: &CurvatureGrid, _object: &mut SceneObject) -> UpdateOutcome {
        UpdateOutcome::RebuildRequired
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
    fn test_render_produces_contour_children() {
        let mut renderer = ContourRenderer::new();
        let out = renderer.render(&grid(16)).unwrap();
        assert_eq!(out.object.name, "contour-grid");
        assert!(!out.object.children.is_empty());
        assert!(!out.resources.geometries.is_empty());
        assert_eq!(out.resources.geometries.len(), out.object.children.len());
        assert_eq!(out.resources.materials.len(), out.object.children.len());
        assert_eq!(out.resources.textures.len(), 1);

        // The synthetic field has a central peak; interior levels must cross it
        let total_points: usize = out
            .object
            .children
            .iter()
            .map(|c| c.geometry.as_ref().unwrap().lock().vertex_count())
            .sum();
        assert!(total_points > 0);
        // Segment soup: even number of endpoints per child
        for child in &out.object.children {
            assert_eq!(child.kind, ObjectKind::LineSegments);
            assert_eq!(child.geometry.as_ref().unwrap().lock().vertex_count() % 2, 0);
        }
    }

    #[test]
    fn test_contour_points_stay_in_bounds() {
        let g = grid(12);
        let mut renderer = ContourRenderer::new();
        let out = renderer.render(&g).unwrap();
        let slack = GridBounds::new(g.bounds.min - 1e-5, g.bounds.max + 1e-5);
        for child in &out.object.children {
            let geom = child.geometry.as_ref().unwrap();
            for p in geom.lock().positions() {
                assert!(slack.contains(*p));
            }
        }
    }

    #[test]
    fn test_update_always_requires_rebuild() {
        let mut renderer = ContourRenderer::new();
        let g = grid(8);
        let mut out = renderer.render(&g).unwrap();
        // Identical grid, identical resolution: still a rebuild by contract
        assert_eq!(
            renderer.update(&g, &mut out.object),
            UpdateOutcome::RebuildRequired
        );
        assert_eq!(
            renderer.update(&grid(16), &mut out.object),
            UpdateOutcome::RebuildRequired
        );
    }

    #[test]
    fn test_flat_field_still_produces_children() {
        let mut g = grid(8);
        for s in &mut g.samples {
            s.metric_deviation = 0.0;
        }
        g.max_deviation = 0.0;
        let mut renderer = ContourRenderer::new();
        let out = renderer.render(&g).unwrap();
        // Levels collapse to zero crossings but the children still exist
        assert!(!out.object.children.is_empty());
    }
}
