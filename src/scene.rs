//! Scene assembly and the per-frame update.
//!
//! [`SceneAssembly`] owns everything the host needs: static castle and prop
//! nodes, the water surface, billboard labels, lights, and the camera. The host
//! calls [`SceneAssembly::frame`] once per display refresh.

use std::f32::consts::FRAC_PI_2;

use glam::{EulerRot, Quat, Vec3};
use log::{debug, info};
use serde::Serialize;

use crate::camera::{Camera, Fog};
use crate::color::Rgb;
use crate::error::{ensure_finite, Result};
use crate::labels::{face_camera, LabelSet};
use crate::lighting::LightRig;
use crate::params::{PropParams, SceneParams, ShadingMode, StructurePalette};
use crate::structure::{
    build_castle, Aabb, Castle, MaterialRef, Primitive, SceneNode, Shape, Transform,
};
use crate::wave::{WaveGrid, WaveSurfaceState, WaveUniforms};

/// Receives scene data on the host side (renderer, recorder, test double)
pub trait SceneSink {
    /// Add or replace a node tree
    fn submit_node(&mut self, node: &SceneNode, palette: &StructurePalette);

    /// Push this frame's water uniforms to the device
    fn upload_wave_uniforms(&mut self, uniforms: &WaveUniforms);
}

/// External model loaded by the host
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelRef {
    pub model: String,
    pub materials: String,
    pub transform: Transform,
}

/// Decorations around the castle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Props {
    pub floor: SceneNode,
    pub cube: SceneNode,
    pub sphere: SceneNode,
    /// Rotated every frame
    pub spinner: SceneNode,
    pub tree: ModelRef,
    /// Texture repeat count per floor axis
    pub floor_texture_repeat: f32,
}

impl Props {
    pub fn from_params(p: &PropParams) -> Result<Self> {
        let floor = SceneNode::new(
            "floor",
            Transform::IDENTITY.with_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
        )
        .with_primitive(Primitive::new(
            Shape::Plane {
                width: p.floor_size_m,
                height: p.floor_size_m,
            },
            Vec3::ZERO,
            MaterialRef::Textured(p.floor_texture.clone()),
        ));

        let cube = SceneNode::new(
            "cube",
            Transform::from_translation(Vec3::new(p.cube_size_m + 1.0, p.cube_size_m / 2.0, 0.0)),
        )
        .with_primitive(Primitive::new(
            Shape::cube(p.cube_size_m),
            Vec3::ZERO,
            MaterialRef::Color(Rgb::from_hex(&p.cube_color)?),
        ));

        let r = p.sphere_radius_m;
        let sphere = SceneNode::new(
            "sphere",
            Transform::from_translation(Vec3::new(r - 1.0, r + 2.0, -9.0)),
        )
        .with_primitive(Primitive::new(
            Shape::Sphere {
                radius: r,
                width_segments: 32,
                height_segments: 16,
            },
            Vec3::ZERO,
            MaterialRef::Color(Rgb::from_hex(&p.sphere_color)?),
        ));

        let spinner = SceneNode::new(
            "spinner",
            Transform::from_translation(Vec3::new(0.0, p.spinner_size_m / 2.0, 0.0)),
        )
        .with_primitive(Primitive::new(
            Shape::cube(p.spinner_size_m),
            Vec3::ZERO,
            MaterialRef::Textured(p.spinner_texture.clone()),
        ));

        let tree = ModelRef {
            model: p.tree_model.clone(),
            materials: p.tree_materials.clone(),
            transform: Transform::from_translation(Vec3::from_array(p.tree_position))
                .with_scale(Vec3::splat(p.tree_scale)),
        };

        Ok(Self {
            floor,
            cube,
            sphere,
            spinner,
            tree,
            floor_texture_repeat: p.floor_size_m / 2.0,
        })
    }

    pub fn nodes(&self) -> impl Iterator<Item = &SceneNode> {
        [&self.floor, &self.cube, &self.sphere, &self.spinner].into_iter()
    }
}

/// Spinning cube orientation at host time `t` seconds: x turns at 1 rad/s, y at 0.5
pub fn spinner_rotation(t: f32) -> Quat {
    Quat::from_euler(EulerRot::XYZ, t, t * 0.5, 0.0)
}

/// Converts host timestamps into frame deltas
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: f64,
}

impl FrameClock {
    /// Delta in seconds since the previous call (or since time zero). A clock
    /// that runs backwards yields zero, so water time never decreases.
    pub fn tick(&mut self, time_ms: f64) -> f32 {
        let dt_s = self.delta(time_ms);
        self.commit(time_ms);
        dt_s
    }

    /// Delta [`tick`](Self::tick) would return, without moving the clock
    pub fn delta(&self, time_ms: f64) -> f32 {
        ((time_ms - self.last_ms).max(0.0) * 0.001) as f32
    }

    fn commit(&mut self, time_ms: f64) {
        self.last_ms = self.last_ms.max(time_ms);
    }
}

/// Result of one frame update
#[derive(Debug, Clone, Copy)]
pub struct FrameUpdate {
    pub frame: u64,
    pub dt_s: f32,
    /// Host time in seconds
    pub time_s: f32,
    pub spinner_rotation: Quat,
    pub wave_uniforms: WaveUniforms,
}

/// The assembled scene
pub struct SceneAssembly {
    pub castle: Castle,
    pub props: Props,
    /// Cube map face paths
    pub skybox: [String; 6],
    pub water: WaveSurfaceState,
    pub water_grid: WaveGrid,
    pub shading: ShadingMode,
    pub labels: LabelSet,
    pub lights: LightRig,
    pub camera: Camera,
    pub fog: Fog,
    pub palette: StructurePalette,
    clock: FrameClock,
    frame: u64,
}

#[derive(Serialize)]
struct SceneSnapshot<'a> {
    castle: &'a Castle,
    props: &'a Props,
    skybox: &'a [String; 6],
    water: &'a WaveSurfaceState,
    shading: ShadingMode,
    water_level: f32,
    labels: &'a LabelSet,
    lights: &'a LightRig,
    camera: &'a Camera,
    fog: &'a Fog,
    palette: &'a StructurePalette,
}

impl SceneAssembly {
    pub fn assemble(params: &SceneParams) -> Result<Self> {
        params.validate()?;

        let mut labels = LabelSet::new();
        let castle = build_castle(&params.castle, &mut labels)?;
        let props = Props::from_params(&params.props)?;

        let w = &params.wave;
        let water = WaveSurfaceState::from_params(w)?;
        let water_grid = WaveGrid::new(w.surface_size_m, w.grid_segments, w.level_m)?;

        let camera = Camera::from_params(
            &params.camera,
            (params.render.width, params.render.height),
        )?;
        face_camera(&mut labels, camera.position);

        let scene = Self {
            castle,
            props,
            skybox: params.props.skybox_faces.clone(),
            water,
            water_grid,
            shading: w.shading,
            labels,
            lights: LightRig::from_params(&params.lighting)?,
            camera,
            fog: Fog::from_params(&params.fog)?,
            palette: params.castle.palette,
            clock: FrameClock::default(),
            frame: 0,
        };
        info!(
            "Assembled scene: {} primitives, {} labels, water grid {} vertices",
            scene.primitive_count(),
            scene.labels.len(),
            scene.water_grid.vertices.len()
        );
        Ok(scene)
    }

    /// Nodes that never change after assembly
    pub fn static_nodes(&self) -> impl Iterator<Item = &SceneNode> {
        self.castle
            .nodes()
            .chain([&self.props.floor, &self.props.cube, &self.props.sphere])
    }

    pub fn primitive_count(&self) -> usize {
        self.castle.primitive_count()
            + self
                .props
                .nodes()
                .map(SceneNode::primitive_count)
                .sum::<usize>()
    }

    pub fn castle_bounds(&self) -> Option<Aabb> {
        self.castle.bounds()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frame
    }

    pub fn water_level(&self) -> f32 {
        self.water_grid.level()
    }

    /// Track the display size; returns true if the camera aspect changed
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        let resized = self.camera.resize(width, height);
        if resized {
            debug!("Viewport resized to {width}x{height}");
        }
        resized
    }

    /// Advance every animated value to host time `time_ms`
    pub fn tick(&mut self, time_ms: f64) -> Result<FrameUpdate> {
        let time_s = ensure_finite("time_ms", time_ms as f32)? * 0.001;
        let dt_s = self.clock.delta(time_ms);

        // Nothing moves unless the water step succeeds
        self.water = self.water.advance(dt_s)?;
        self.clock.commit(time_ms);

        let rotation = spinner_rotation(time_s);
        self.props.spinner.transform.rotation = rotation;

        face_camera(&mut self.labels, self.camera.position);

        let wave_uniforms = WaveUniforms::sync(
            &self.water,
            &self.camera,
            self.shading,
            self.water_level(),
        );

        self.frame += 1;
        Ok(FrameUpdate {
            frame: self.frame,
            dt_s,
            time_s,
            spinner_rotation: rotation,
            wave_uniforms,
        })
    }

    /// Push every static node to the sink once, after assembly
    pub fn submit_static(&self, sink: &mut dyn SceneSink) {
        for node in self.static_nodes() {
            sink.submit_node(node, &self.palette);
        }
    }

    /// Tick, then push the moving parts and the water uniforms
    pub fn frame(&mut self, sink: &mut dyn SceneSink, time_ms: f64) -> Result<FrameUpdate> {
        let update = self.tick(time_ms)?;
        sink.submit_node(&self.props.spinner, &self.palette);
        sink.upload_wave_uniforms(&update.wave_uniforms);
        Ok(update)
    }

    /// Evaluate the height field into the CPU grid
    pub fn displace_water_grid(&mut self) {
        self.water_grid.displace(&self.water);
    }

    /// Debug export of the assembled scene
    pub fn to_json(&self) -> Result<String> {
        let snapshot = SceneSnapshot {
            castle: &self.castle,
            props: &self.props,
            skybox: &self.skybox,
            water: &self.water,
            shading: self.shading,
            water_level: self.water_level(),
            labels: &self.labels,
            lights: &self.lights,
            camera: &self.camera,
            fog: &self.fog,
            palette: &self.palette,
        };
        Ok(serde_json::to_string_pretty(&snapshot)?)
    }
}
