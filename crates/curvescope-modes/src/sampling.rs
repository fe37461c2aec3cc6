//! Shared field-sampling helpers for the mode renderers.

use curvescope_core::CurvatureGrid;
use glam::Vec3;

/// Index of the mid-height slice the surface modes visualize.
pub fn mid_slice(grid: &CurvatureGrid) -> u32 {
    grid.resolution / 2
}

/// Scalar deviation at node `(x, mid, z)`.
pub fn mid_slice_deviation(grid: &CurvatureGrid, x: u32, z: u32) -> f32 {
    grid.sample(x, mid_slice(grid), z).metric_deviation
}

/// World position of node `(x, mid, z)`.
pub fn mid_slice_position(grid: &CurvatureGrid, x: u32, z: u32) -> Vec3 {
    grid.sample(x, mid_slice(grid), z).position
}

/// Trilinearly interpolated tidal tensor at an arbitrary world point.
///
/// The point is clamped to the grid bounds before sampling.
pub fn tensor_at(grid: &CurvatureGrid, p: Vec3) -> Vec3 {
    let r = grid.resolution;
    let spacing = grid.spacing();
    let local = (p.clamp(grid.bounds.min, grid.bounds.max) - grid.bounds.min) / spacing;

    let max_cell = (r - 2) as f32;
    let base = local.floor().clamp(Vec3::ZERO, Vec3::splat(max_cell));
    let frac = (local - base).clamp(Vec3::ZERO, Vec3::ONE);
    let (x0, y0, z0) = (base.x as u32, base.y as u32, base.z as u32);

    let corner = |dx: u32, dy: u32, dz: u32| grid.sample(x0 + dx, y0 + dy, z0 + dz).tidal_tensor;

    let c00 = corner(0, 0, 0).lerp(corner(1, 0, 0), frac.x);
    let c10 = corner(0, 1, 0).lerp(corner(1, 1, 0), frac.x);
    let c01 = corner(0, 0, 1).lerp(corner(1, 0, 1), frac.x);
    let c11 = corner(0, 1, 1).lerp(corner(1, 1, 1), frac.x);
    let c0 = c00.lerp(c10, frac.y);
    let c1 = c01.lerp(c11, frac.y);
    c0.lerp(c1, frac.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use curvescope_core::GridBounds;

    fn grid() -> CurvatureGrid {
        CurvatureGrid::synthetic(6, GridBounds::from_array([-1.0, -1.0, -1.0, 1.0, 1.0, 1.0]))
            .unwrap()
    }

    #[test]
    fn test_tensor_at_node_matches_sample() {
        let g = grid();
        let node = g.sample(2, 3, 1);
        let interpolated = tensor_at(&g, node.position);
        assert!((interpolated - node.tidal_tensor).length() < 1e-4);
    }

    #[test]
    fn test_tensor_outside_bounds_is_clamped() {
        let g = grid();
        let far = Vec3::splat(100.0);
        let at_corner = tensor_at(&g, g.bounds.max);
        let clamped = tensor_at(&g, far);
        assert!((clamped - at_corner).length() < 1e-5);
    }
}
