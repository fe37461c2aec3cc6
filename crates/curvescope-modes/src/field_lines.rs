//! Field line render mode.
//!
//! Seeds a coarse sub-lattice across the grid and traces a polyline from each
//! seed along the trilinearly interpolated tidal tensor direction. Line count
//! and path length depend on the field data, not just the resolution, so
//! in-place updates are never attempted; every update is a full rebuild by
//! contract.

use curvescope_core::{CurvatureGrid, RenderMode, Result};
use curvescope_render::{
    sample_color_map, Geometry, GeometryHandle, Material, MaterialHandle, ObjectKind,
    ResourceTracker, SceneObject, UniformValue,
};
use glam::Vec3;

use crate::sampling::tensor_at;
use crate::{ModeRenderer, RenderOutput, UpdateOutcome};

/// Maximum integration steps per traced line.
const MAX_STEPS: usize = 32;

/// Directions shorter than this terminate a trace.
const MIN_DIRECTION: f32 = 1e-6;

/// Renders the curvature grid as traced tensor-flow field lines.
#[derive(Debug, Default)]
pub struct FieldLinesRenderer;

impl FieldLinesRenderer {
    /// Creates a field-lines renderer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Seed nodes on a coarse sub-lattice of the grid.
    fn seeds(grid: &CurvatureGrid) -> Vec<Vec3> {
        let r = grid.resolution;
        let stride = (r / 4).max(1);
        let mut seeds = Vec::new();
        let mut z = stride / 2;
        while z < r {
            let mut y = stride / 2;
            while y < r {
                let mut x = stride / 2;
                while x < r {
                    seeds.push(grid.sample(x, y, z).position);
                    x += stride;
                }
                y += stride;
            }
            z += stride;
        }
        seeds
    }

    /// Traces one polyline from a seed along the local tensor direction.
    fn trace(grid: &CurvatureGrid, seed: Vec3) -> Vec<Vec3> {
        let step = grid.spacing().min_element() * 0.5;
        let mut points = vec![seed];
        let mut p = seed;

        for _ in 0..MAX_STEPS {
            let direction = tensor_at(grid, p);
            if direction.length() < MIN_DIRECTION {
                break;
            }
            p += direction.normalize() * step;
            if !grid.bounds.contains(p) {
                break;
            }
            points.push(p);
        }
        points
    }
}

impl ModeRenderer for FieldLinesRenderer {
    fn mode(&self) -> RenderMode {
        RenderMode::FieldLines
    }

    fn render(&mut self, grid: &CurvatureGrid) -> Result<RenderOutput> {
        grid.validate()?;

        let mut resources = ResourceTracker::new();
        let mut root = SceneObject::group(RenderMode::FieldLines.object_name());

        let mut material = Material::new("field-lines");
        material.set_uniform("uLineColor", UniformValue::Vec4(sample_color_map(0.8)));
        let material = resources.track_material(MaterialHandle::new(material));

        let seeds = Self::seeds(grid);
        log::debug!(
            "tracing field lines from {} seeds at resolution {}",
            seeds.len(),
            grid.resolution
        );

        let mut traced = 0;
        for seed in seeds {
            let points = Self::trace(grid, seed);
            if points.len() < 2 {
                continue;
            }
            let count = points.len();
            let colors = (0..count)
                .map(|i| sample_color_map(i as f32 / (count - 1) as f32))
                .collect();
            let normals = vec![Vec3::Y; count];
            let indices = (0..count as u32).collect();

            let label = format!("field-line-{traced}");
            let mut geometry = Geometry::new(label.clone());
            geometry.write_vertices(points, normals, colors);
            geometry.write_indices(indices);
            let geometry = resources.track_geometry(GeometryHandle::new(geometry));

            root.add_child(SceneObject::with_geometry(
                label,
                ObjectKind::LineStrip,
                geometry,
                material.clone(),
            ));
            traced += 1;
        }

        // A vanishing tensor field traces nothing; keep the container non-empty
        // so callers can rely on at least one child being present.
        if root.children.is_empty() {
            let geometry =
                resources.track_geometry(GeometryHandle::new(Geometry::new("field-line-0")));
            root.add_child(SceneObject::with_geometry(
                "field-line-0",
                ObjectKind::LineStrip,
                geometry,
                material.clone(),
            ));
        }

        Ok(RenderOutput {
            object: root,
            resources,
        })
    }

    /// Always a full rebuild: traced line count and length are data-dependent.
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
    fn test_render_produces_line_children() {
        let mut renderer = FieldLinesRenderer::new();
        let out = renderer.render(&grid(12)).unwrap();
        assert_eq!(out.object.name, "field-lines");
        assert!(!out.object.children.is_empty());
        assert!(!out.resources.geometries.is_empty());
        assert_eq!(out.resources.materials.len(), 1);

        for child in &out.object.children {
            assert_eq!(child.kind, ObjectKind::LineStrip);
            assert!(child.geometry.is_some());
        }
    }

    #[test]
    fn test_traced_points_stay_in_bounds() {
        let g = grid(10);
        let mut renderer = FieldLinesRenderer::new();
        let out = renderer.render(&g).unwrap();
        for child in &out.object.children {
            for p in child.geometry.as_ref().unwrap().lock().positions() {
                assert!(g.bounds.contains(*p));
            }
        }
    }

    #[test]
    fn test_zero_field_still_produces_a_child() {
        let mut g = grid(8);
        for s in &mut g.samples {
            s.tidal_tensor = Vec3::ZERO;
        }
        let mut renderer = FieldLinesRenderer::new();
        let out = renderer.render(&g).unwrap();
        assert_eq!(out.object.children.len(), 1);
        assert_eq!(
            out.object.children[0]
                .geometry
                .as_ref()
                .unwrap()
                .lock()
                .vertex_count(),
            0
        );
    }

    #[test]
    fn test_update_always_requires_rebuild() {
        let g = grid(8);
        let mut renderer = FieldLinesRenderer::new();
        let mut out = renderer.render(&g).unwrap();
        assert_eq!(
            renderer.update(&g, &mut out.object),
            UpdateOutcome::RebuildRequired
        );
    }
}
