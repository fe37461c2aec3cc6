//! Integration tests for GPU-resource ownership and disposal across repeated
//! renders.

use curvescope::*;

fn test_grid(resolution: u32) -> CurvatureGrid {
    let bounds = GridBounds::from_array([-1.0, -1.0, -1.0, 1.0, 1.0, 1.0]);
    CurvatureGrid::synthetic(resolution, bounds).expect("synthetic grid")
}

#[test]
fn test_empty_tracker_dispose_is_a_no_op() {
    let mut tracker = ResourceTracker::new();
    assert!(tracker.is_empty());
    tracker.dispose();
    tracker.dispose();
    assert!(tracker.is_empty());
}

#[test]
fn test_dispose_empties_every_sequence_for_all_modes() {
    let mut registry = ModeRegistry::new();
    let grid = test_grid(12);

    for mode in RenderMode::ALL {
        let mut output = registry.renderer_mut(mode).render(&grid).unwrap();
        assert!(!output.resources.is_empty());

        output.resources.dispose();
        assert_eq!(output.resources.geometries.len(), 0);
        assert_eq!(output.resources.materials.len(), 0);
        assert_eq!(output.resources.textures.len(), 0);

        // Idempotent
        output.resources.dispose();
        assert!(output.resources.is_empty());
    }
}

#[test]
fn test_dispose_releases_scene_object_backing_stores() {
    let mut registry = ModeRegistry::new();
    let mut output = registry
        .renderer_mut(RenderMode::Contour)
        .render(&test_grid(12))
        .unwrap();

    // The scene object aliases the tracked handles
    let child_geometry = output.object.children[0].geometry.clone().unwrap();
    assert!(!child_geometry.is_disposed());

    output.resources.dispose();
    assert!(child_geometry.is_disposed());
    assert_eq!(child_geometry.lock().vertex_count(), 0);
}

#[test]
fn test_repeated_renders_produce_fresh_trackers() {
    let mut registry = ModeRegistry::new();
    let grid = test_grid(8);
    let renderer = registry.renderer_mut(RenderMode::Mesh);

    let first = renderer.render(&grid).unwrap();
    let second = renderer.render(&grid).unwrap();

    // No aliasing between render calls
    assert!(!first.resources.geometries[0].same_resource(&second.resources.geometries[0]));

    // Disposing the first render leaves the second untouched
    let mut first = first;
    first.resources.dispose();
    assert!(!second.resources.geometries[0].is_disposed());
    assert!(second.resources.geometries[0].lock().vertex_count() > 0);
}

#[test]
fn test_in_place_update_keeps_resources_alive() {
    let mut registry = ModeRegistry::new();
    let renderer = registry.renderer_mut(RenderMode::GravitationalWaves);
    let mut output = renderer.render(&test_grid(8)).unwrap();

    assert!(renderer.update(&test_grid(8), &mut output.object).is_updated());
    for geometry in &output.resources.geometries {
        assert!(!geometry.is_disposed());
    }
    for material in &output.resources.materials {
        assert!(!material.is_disposed());
    }
}

#[test]
fn test_setting_wave_parameters_after_dispose_is_safe() {
    let mut registry = ModeRegistry::new();
    let waves = registry.gravitational_waves_mut();
    let mut output = waves.render(&test_grid(8)).unwrap();
    output.resources.dispose();

    // The renderer still holds the (now disposed) material handle; the setter
    // must not resurrect it or panic
    waves.set_wave_parameters(WaveParameterUpdate::new().with_amplitude(1.0));
    assert_eq!(waves.wave_parameters().amplitude, 1.0);

    let material = output
        .object
        .find_child("wave-mesh")
        .and_then(|c| c.material.clone())
        .unwrap();
    assert!(material.is_disposed());
    assert_eq!(material.lock().uniform(U_AMPLITUDE), None);
}
