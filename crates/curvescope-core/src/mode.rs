//! Render mode identifiers.
//!
//! The four modes are a closed set; lookup by string id fails fast for
//! anything outside it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CurvescopeError;

/// One of the four interchangeable strategies for visualizing a curvature grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenderMode {
    /// Deviation-displaced surface mesh.
    Mesh,
    /// Iso-contour line extraction.
    Contour,
    /// Tensor-flow field line tracing.
    FieldLines,
    /// Shader-animated gravitational wave surface.
    GravitationalWaves,
}

impl RenderMode {
    /// All modes, in registry order.
    pub const ALL: [RenderMode; 4] = [
        RenderMode::Mesh,
        RenderMode::Contour,
        RenderMode::FieldLines,
        RenderMode::GravitationalWaves,
    ];

    /// Returns the string identifier for this mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RenderMode::Mesh => "mesh",
            RenderMode::Contour => "contour",
            RenderMode::FieldLines => "fieldLines",
            RenderMode::GravitationalWaves => "gravitationalWaves",
        }
    }

    /// Returns the fixed name of the top-level scene object this mode produces.
    #[must_use]
    pub fn object_name(self) -> &'static str {
        match self {
            RenderMode::Mesh => "curvature-mesh",
            RenderMode::Contour => "contour-grid",
            RenderMode::FieldLines => "field-lines",
            RenderMode::GravitationalWaves => "gravitational-waves",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderMode {
    type Err = CurvescopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mesh" => Ok(RenderMode::Mesh),
            "contour" => Ok(RenderMode::Contour),
            "fieldLines" => Ok(RenderMode::FieldLines),
            "gravitationalWaves" => Ok(RenderMode::GravitationalWaves),
            other => Err(CurvescopeError::UnknownMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_ids_round_trip() {
        for mode in RenderMode::ALL {
            assert_eq!(mode.as_str().parse::<RenderMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_unknown_mode_fails() {
        let err = "wireframe".parse::<RenderMode>().unwrap_err();
        assert!(matches!(err, CurvescopeError::UnknownMode(s) if s == "wireframe"));
    }

    #[test]
    fn test_object_names_are_non_empty() {
        for mode in RenderMode::ALL {
            assert!(!mode.object_name().is_empty());
        }
    }
}
