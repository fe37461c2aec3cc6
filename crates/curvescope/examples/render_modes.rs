//! Renders a synthetic curvature grid with all four modes and prints a
//! summary of the produced scene objects.
//!
//! Run with: `RUST_LOG=debug cargo run --example render_modes`

use curvescope::*;

fn main() -> Result<()> {
    env_logger::init();

    let bounds = GridBounds::from_array([-2.0, -2.0, -2.0, 2.0, 2.0, 2.0]);
    let grid = CurvatureGrid::synthetic(24, bounds)?;
    println!(
        "grid: resolution {}, {} samples, max deviation {:.4}",
        grid.resolution,
        grid.samples.len(),
        grid.max_deviation
    );

    let mut registry = ModeRegistry::new();
    registry.gravitational_waves_mut().set_wave_parameters(
        WaveParameterUpdate::new()
            .with_amplitude(1.2)
            .with_frequency(2.5),
    );

    for mode in RenderMode::ALL {
        let renderer = registry.renderer_mut(mode);
        let mut output = renderer.render(&grid)?;
        println!(
            "{:>20}: object '{}', {} children, {} geometries / {} materials / {} textures",
            mode.to_string(),
            output.object.name,
            output.object.children.len(),
            output.resources.geometries.len(),
            output.resources.materials.len(),
            output.resources.textures.len(),
        );

        if let Some(geometry) = &output.object.geometry {
            let packed = geometry.lock().interleaved();
            println!(
                "{:>20}  upload size: {} bytes",
                "",
                as_bytes(&packed).len()
            );
        }

        // Same-resolution refresh: mesh and waves update in place, the rest
        // ask for a rebuild
        let outcome = renderer.update(&grid, &mut output.object);
        println!("{:>20}  refresh outcome: {outcome:?}", "");

        output.resources.dispose();
    }

    Ok(())
}
