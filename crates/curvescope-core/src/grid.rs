//! Curvature grid data model.
//!
//! A [`CurvatureGrid`] is the immutable input to every mode renderer: a regular
//! `resolution x resolution x resolution` lattice of field samples produced by an
//! external physics/sampling component, plus the metadata the renderers need
//! (bounding box and the field's maximum absolute deviation).

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{CurvescopeError, Result};

/// One field sample at a grid node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSample {
    /// World-space position of the grid node.
    pub position: Vec3,
    /// Scalar metric deviation at this node.
    pub metric_deviation: f32,
    /// Reduced tidal tensor (3 derived components) at this node.
    pub tidal_tensor: Vec3,
}

/// Axis-aligned bounding box of the sampled region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridBounds {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl GridBounds {
    /// Creates bounds from min/max corners.
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Creates bounds from a flat `[x_min, y_min, z_min, x_max, y_max, z_max]` array.
    #[must_use]
    pub fn from_array(b: [f32; 6]) -> Self {
        Self {
            min: Vec3::new(b[0], b[1], b[2]),
            max: Vec3::new(b[3], b[4], b[5]),
        }
    }

    /// Returns the extent of the box on each axis.
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Returns the center of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Returns true if the point lies inside or on the boundary of the box.
    #[must_use]
    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Returns true if any axis has zero or negative extent.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let size = self.size();
        size.x <= 0.0 || size.y <= 0.0 || size.z <= 0.0
    }
}

/// A regular 3D grid of curvature field samples.
///
/// Samples are stored in z-major order: the sample for node `(x, y, z)` is at
/// linear index `(z * resolution + y) * resolution + x`, for `resolution^3`
/// entries total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurvatureGrid {
    /// Field samples, one per grid node, in z-major order.
    pub samples: Vec<GridSample>,
    /// Number of nodes along each axis.
    pub resolution: u32,
    /// Bounding box of the sampled region; contains every sample position.
    pub bounds: GridBounds,
    /// Maximum absolute metric deviation present in `samples`, for normalization.
    pub max_deviation: f32,
}

impl CurvatureGrid {
    /// Creates a grid from pre-sampled data, validating the size invariant.
    pub fn new(
        samples: Vec<GridSample>,
        resolution: u32,
        bounds: GridBounds,
        max_deviation: f32,
    ) -> Result<Self> {
        let grid = Self {
            samples,
            resolution,
            bounds,
            max_deviation,
        };
        grid.validate()?;
        Ok(grid)
    }

    /// Checks the grid invariants.
    ///
    /// Returns an error if the sample count is not `resolution^3`, the
    /// resolution is below 2, or the bounds are degenerate.
    pub fn validate(&self) -> Result<()> {
        if self.resolution < 2 {
            return Err(CurvescopeError::EmptyGrid(self.resolution));
        }
        let expected = (self.resolution as usize).pow(3);
        if self.samples.len() != expected {
            return Err(CurvescopeError::SampleCountMismatch {
                expected,
                actual: self.samples.len(),
            });
        }
        if self.bounds.is_degenerate() {
            return Err(CurvescopeError::DegenerateBounds {
                min: self.bounds.min.to_array(),
                max: self.bounds.max.to_array(),
            });
        }
        Ok(())
    }

    /// Flattens a 3D node index to a linear index (z-major order).
    #[must_use]
    pub fn sample_index(&self, x: u32, y: u32, z: u32) -> usize {
        ((z as usize * self.resolution as usize) + y as usize) * self.resolution as usize
            + x as usize
    }

    /// Returns the sample at the given 3D node index.
    #[must_use]
    pub fn sample(&self, x: u32, y: u32, z: u32) -> &GridSample {
        &self.samples[self.sample_index(x, y, z)]
    }

    /// Returns the distance between adjacent nodes on each axis.
    #[must_use]
    pub fn spacing(&self) -> Vec3 {
        let cells = (self.resolution.saturating_sub(1)).max(1) as f32;
        self.bounds.size() / cells
    }

    /// Returns the world position of the node at the given 3D index.
    #[must_use]
    pub fn position_of_node(&self, x: u32, y: u32, z: u32) -> Vec3 {
        let cells = (self.resolution.saturating_sub(1)).max(1) as f32;
        let t = Vec3::new(x as f32, y as f32, z as f32) / cells;
        self.bounds.min + t * self.bounds.size()
    }

    /// Normalizes a deviation value to `[0, 1]` against `max_deviation`.
    #[must_use]
    pub fn normalized_deviation(&self, deviation: f32) -> f32 {
        if self.max_deviation > 0.0 {
            (deviation.abs() / self.max_deviation).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Builds a deterministic synthetic grid, useful for demos and tests.
    ///
    /// The scalar field is a smooth radial deviation peaking at the grid
    /// center; the tensor field circulates around the vertical axis.
    pub fn synthetic(resolution: u32, bounds: GridBounds) -> Result<Self> {
        if resolution < 2 {
            return Err(CurvescopeError::EmptyGrid(resolution));
        }
        if bounds.is_degenerate() {
            return Err(CurvescopeError::DegenerateBounds {
                min: bounds.min.to_array(),
                max: bounds.max.to_array(),
            });
        }

        let cells = (resolution - 1) as f32;
        let center = bounds.center();
        let half_extent = bounds.size().length() * 0.5;
        let mut samples = Vec::with_capacity((resolution as usize).pow(3));
        let mut max_deviation = 0.0_f32;

        for z in 0..resolution {
            for y in 0..resolution {
                for x in 0..resolution {
                    let t = Vec3::new(x as f32, y as f32, z as f32) / cells;
                    let position = bounds.min + t * bounds.size();
                    let offset = position - center;
                    let r = offset.length() / half_extent.max(f32::EPSILON);
                    let metric_deviation = (1.0 - r).max(0.0).powi(2);
                    // Circulation about the y axis, weakening with radius
                    let tidal_tensor = Vec3::new(-offset.z, 0.2 * metric_deviation, offset.x)
                        * (1.0 - r).max(0.05);
                    max_deviation = max_deviation.max(metric_deviation.abs());
                    samples.push(GridSample {
                        position,
                        metric_deviation,
                        tidal_tensor,
                    });
                }
            }
        }

        Self::new(samples, resolution, bounds, max_deviation)
    }
}
