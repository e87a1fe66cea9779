//! End-to-end castle assembly and frame loop.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use castlewave::labels::LabelSet;
use castlewave::params::{CastleLayout, SceneParams};
use castlewave::scene::SceneAssembly;
use castlewave::structure::{build_castle, build_tower, build_wall, Aabb, SceneNode};

const EPS: f32 = 1e-3;

fn assert_near(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_corner_towers_and_walls_enclose_square() {
    let (h, wall_h) = (15.0, 10.0);
    let mut nodes: Vec<SceneNode> = Vec::new();
    for (x, z) in [(45.0, 45.0), (-45.0, 45.0), (-45.0, -45.0), (45.0, -45.0)] {
        nodes.push(build_tower(h, Vec3::new(x, 0.0, z)).unwrap());
    }
    let walls = [
        build_wall(90.0, wall_h, Vec3::new(0.0, wall_h / 2.0, -45.0), 0.0).unwrap(),
        build_wall(90.0, wall_h, Vec3::new(0.0, wall_h / 2.0, 45.0), 0.0).unwrap(),
        build_wall(90.0, wall_h, Vec3::new(45.0, wall_h / 2.0, 0.0), FRAC_PI_2).unwrap(),
        build_wall(90.0, wall_h, Vec3::new(-45.0, wall_h / 2.0, 0.0), FRAC_PI_2).unwrap(),
    ];

    // Curtain walls: 45 offset plus half the fixed depth of 4
    let footprint = Aabb::union_all(walls.iter().filter_map(SceneNode::world_bounds)).unwrap();
    assert_near(footprint.min.x, -47.0);
    assert_near(footprint.min.z, -47.0);
    assert_near(footprint.max.x, 47.0);
    assert_near(footprint.max.z, 47.0);

    // Tower bodies alone reach 45 + 2.5
    for tower in &nodes {
        let body = tower.primitives[0].shape.local_bounds();
        assert_near(body.max.x, 2.5);
    }

    // Battlements (3.5 + 0.75) stick out furthest
    nodes.extend(walls);
    let all = Aabb::union_all(nodes.iter().filter_map(SceneNode::world_bounds)).unwrap();
    assert_near(all.max.x, 49.25);
    assert_near(all.min.z, -49.25);
    assert_near(all.min.y, 0.0);
    assert_near(all.max.y, h + 6.0);
}

#[test]
fn test_castle_layout_matches_manual_assembly() {
    let layout = CastleLayout {
        keep: None,
        ..CastleLayout::default()
    };
    let mut labels = LabelSet::new();
    let castle = build_castle(&layout, &mut labels).unwrap();

    let footprint = castle.wall_footprint().unwrap();
    assert_near(footprint.min.x, -47.0);
    assert_near(footprint.max.z, 47.0);
    assert_near(footprint.max.y, layout.wall_height_m);

    let bounds = castle.bounds().unwrap();
    assert_near(bounds.max.x, 49.25);
    assert_near(bounds.max.y, layout.tower_height_m + 6.0);
    assert_eq!(labels.len(), 4);
    assert_eq!(castle.primitive_count(), 4 * 6 + 4);
}

#[test]
fn test_castle_is_offset_by_origin() {
    let layout = CastleLayout {
        origin: [100.0, 0.0, -20.0],
        ..CastleLayout::default()
    };
    let mut labels = LabelSet::new();
    let castle = build_castle(&layout, &mut labels).unwrap();
    let footprint = castle.wall_footprint().unwrap();

    assert_near(footprint.center().x, 100.0);
    assert_near(footprint.center().z, -20.0);
}

#[test]
fn test_sixty_frames_at_sixty_hz_advance_one_second_of_water() {
    let mut params = SceneParams::default();
    params.wave.speed = 1.5;
    let mut scene = SceneAssembly::assemble(&params).unwrap();

    for frame in 1..=60 {
        scene.tick(params.render.frame_time_ms(frame)).unwrap();
    }

    assert_eq!(scene.frames_rendered(), 60);
    assert!((scene.water.elapsed_time() - 1.5).abs() < 1e-4);
}

#[test]
fn test_flat_water_stays_at_level() {
    let mut params = SceneParams::default();
    params.wave.amplitude_m = 0.0;
    let mut scene = SceneAssembly::assemble(&params).unwrap();
    scene.tick(1234.0).unwrap();
    scene.displace_water_grid();

    let level = scene.water_level();
    assert_eq!(scene.water_grid.height_range(), (level, level));
}
