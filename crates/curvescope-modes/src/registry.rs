//! Mode registry.
//!
//! The mode set is closed, so the registry is a fixed struct with one field
//! per variant and exhaustive `match` dispatch; adding a mode without wiring
//! it here fails to compile. String lookup fails fast for unknown ids.

use curvescope_core::{RenderMode, Result};

use crate::{
    ContourRenderer, FieldLinesRenderer, GravitationalWavesRenderer, MeshRenderer, ModeRenderer,
};

/// Fixed mapping from render mode to its renderer instance.
///
/// Each registry owns one freshly constructed renderer per mode; renderer
/// state (such as wave parameters) is per-registry.
#[derive(Debug, Default)]
pub struct ModeRegistry {
    mesh: MeshRenderer,
    contour: ContourRenderer,
    field_lines: FieldLinesRenderer,
    gravitational_waves: GravitationalWavesRenderer,
}

impl ModeRegistry {
    /// Creates a registry with a fresh renderer for each of the four modes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the renderer for a mode.
    #[must_use]
    pub fn renderer(&self, mode: RenderMode) -> &dyn ModeRenderer {
        match mode {
            RenderMode::Mesh => &self.mesh,
            RenderMode::Contour => &self.contour,
            RenderMode::FieldLines => &self.field_lines,
            RenderMode::GravitationalWaves => &self.gravitational_waves,
        }
    }

    /// Returns the renderer for a mode, mutably.
    pub fn renderer_mut(&mut self, mode: RenderMode) -> &mut dyn ModeRenderer {
        match mode {
            RenderMode::Mesh => &mut self.mesh,
            RenderMode::Contour => &mut self.contour,
            RenderMode::FieldLines => &mut self.field_lines,
            RenderMode::GravitationalWaves => &mut self.gravitational_waves,
        }
    }

    /// Looks up a renderer by string identifier.
    ///
    /// Fails with [`CurvescopeError::UnknownMode`] for anything outside the
    /// closed four-id set.
    ///
    /// [`CurvescopeError::UnknownMode`]: curvescope_core::CurvescopeError::UnknownMode
    pub fn renderer_by_id(&mut self, id: &str) -> Result<&mut dyn ModeRenderer> {
        let mode: RenderMode = id.parse()?;
        Ok(self.renderer_mut(mode))
    }

    /// Typed access to the wave renderer for parameter control.
    pub fn gravitational_waves_mut(&mut self) -> &mut GravitationalWavesRenderer {
        &mut self.gravitational_waves
    }

    /// Number of registered modes.
    #[must_use]
    pub fn len(&self) -> usize {
        RenderMode::ALL.len()
    }

    /// A registry is never empty; the mode set is fixed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Constructs a fresh standalone renderer for a mode.
#[must_use]
pub fn create_mode_renderer(mode: RenderMode) -> Box<dyn ModeRenderer> {
    match mode {
        RenderMode::Mesh => Box::new(MeshRenderer::new()),
        RenderMode::Contour => Box::new(ContourRenderer::new()),
        RenderMode::FieldLines => Box::new(FieldLinesRenderer::new()),
        RenderMode::GravitationalWaves => Box::new(GravitationalWavesRenderer::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curvescope_core::CurvescopeError;

    #[test]
    fn test_registry_covers_all_modes() {
        let registry = ModeRegistry::new();
        assert_eq!(registry.len(), 4);
        assert!(!registry.is_empty());
        for mode in RenderMode::ALL {
            assert_eq!(registry.renderer(mode).mode(), mode);
        }
    }

    #[test]
    fn test_lookup_by_id() {
        let mut registry = ModeRegistry::new();
        for mode in RenderMode::ALL {
            let renderer = registry.renderer_by_id(mode.as_str()).unwrap();
            assert_eq!(renderer.mode(), mode);
        }
    }

    #[test]
    fn test_unknown_id_fails_fast() {
        let mut registry = ModeRegistry::new();
        let err = registry.renderer_by_id("volumetric").unwrap_err();
        assert!(matches!(err, CurvescopeError::UnknownMode(s) if s == "volumetric"));
    }

    #[test]
    fn test_create_mode_renderer_matches_mode() {
        for mode in RenderMode::ALL {
            assert_eq!(create_mode_renderer(mode).mode(), mode);
        }
    }
}
