//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;
use log::info;

use crate::error::Result;
use crate::params::{SceneParams, ShadingMode};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "castlewave")]
#[command(about = "Procedural castle with an animated water surface", long_about = None)]
pub struct Args {
    /// JSON scene parameters (missing fields keep their defaults)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(long, value_name = "N", default_value_t = 600)]
    pub frames: u64,

    /// Simulated display refresh rate
    #[arg(long, value_name = "HZ")]
    pub fps: Option<u32>,

    /// Water time scale
    #[arg(long, value_name = "SCALE")]
    pub wave_speed: Option<f32>,

    /// Water amplitude (meters)
    #[arg(long, value_name = "METERS")]
    pub amplitude: Option<f32>,

    /// Water spatial frequency (radians per meter)
    #[arg(long, value_name = "RAD_PER_M")]
    pub frequency: Option<f32>,

    /// Shade water with the view-dependent Fresnel blend instead of flat color
    #[arg(long)]
    pub fresnel: bool,

    /// Write the assembled scene as JSON
    #[arg(long, value_name = "PATH")]
    pub dump_scene: Option<PathBuf>,

    /// Write the final water height field as a grayscale PNG
    #[arg(long, value_name = "PATH")]
    pub heightmap: Option<PathBuf>,

    /// Heightmap edge length (pixels)
    #[arg(long, value_name = "PX", default_value_t = 256)]
    pub heightmap_size: u32,
}

impl Args {
    /// Load the config file (or defaults) and apply command-line overrides
    pub fn scene_params(&self) -> Result<SceneParams> {
        let mut params = match &self.config {
            Some(path) => SceneParams::load(path)?,
            None => SceneParams::default(),
        };

        if let Some(fps) = self.fps {
            params.render.fps = fps;
        }
        if let Some(speed) = self.wave_speed {
            params.wave.speed = speed;
        }
        if let Some(amplitude) = self.amplitude {
            params.wave.amplitude_m = amplitude;
        }
        if let Some(frequency) = self.frequency {
            params.wave.frequency = frequency;
        }
        if self.fresnel {
            info!("Water shading: Fresnel");
            params.wave.shading = ShadingMode::Fresnel;
        }

        params.validate()?;
        Ok(params)
    }
}
