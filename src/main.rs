//! castlewave - headless driver for the castle and water scene.
//!
//! Assembles the scene, runs the per-frame update at a fixed simulated
//! refresh rate, and reports what a renderer would have drawn.

use clap::Parser;
use log::{debug, error, info};

use castlewave::cli::Args;
use castlewave::params::StructurePalette;
use castlewave::scene::{SceneAssembly, SceneSink};
use castlewave::structure::SceneNode;
use castlewave::wave::{save_heightmap, WaveUniforms};

/// Sink that only counts what it receives
#[derive(Default)]
struct TallySink {
    primitives: usize,
    uniform_bytes: usize,
}

impl SceneSink for TallySink {
    fn submit_node(&mut self, node: &SceneNode, _palette: &StructurePalette) {
        self.primitives += node.primitive_count();
    }

    fn upload_wave_uniforms(&mut self, uniforms: &WaveUniforms) {
        self.uniform_bytes += uniforms.as_bytes().len();
    }
}

fn run(args: &Args) -> castlewave::Result<()> {
    let params = args.scene_params()?;
    let mut scene = SceneAssembly::assemble(&params)?;

    if let Some(path) = &args.dump_scene {
        std::fs::write(path, scene.to_json()?)?;
        info!("Wrote scene to {}", path.display());
    }

    let mut sink = TallySink::default();
    scene.submit_static(&mut sink);

    for frame in 1..=args.frames {
        let update = scene.frame(&mut sink, params.render.frame_time_ms(frame))?;
        if update.frame % u64::from(params.render.fps) == 0 {
            debug!(
                "frame {} t={:.2}s water t={:.3}",
                update.frame, update.time_s, update.wave_uniforms.time
            );
        }
    }

    if let Some(path) = &args.heightmap {
        save_heightmap(
            path,
            &scene.water,
            params.wave.surface_size_m,
            args.heightmap_size,
        )?;
        info!("Wrote heightmap to {}", path.display());
    }

    println!("Frames:            {}", scene.frames_rendered());
    println!("Scene primitives:  {}", scene.primitive_count());
    println!("Labels:            {}", scene.labels.len());
    if let Some(bounds) = scene.castle_bounds() {
        println!("Castle bounds:     {} .. {}", bounds.min, bounds.max);
    }
    if let Some(footprint) = scene.castle.wall_footprint() {
        println!("Wall footprint:    {} .. {}", footprint.min, footprint.max);
    }
    println!("Water time:        {:.3}", scene.water.elapsed_time());
    println!(
        "Water height @0,0: {:.3}",
        scene.water_level() + scene.water.height_at(0.0, 0.0)
    );
    println!("Submitted prims:   {}", sink.primitives);
    println!("Uniform bytes:     {}", sink.uniform_bytes);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        error!("{e}");
        std::process::exit(1);
    }
}
