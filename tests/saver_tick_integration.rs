//! Saver tick integration tests for movement, respawn, animation, and scene
//! population.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;
use std::path::PathBuf;

use swarmsaver::components::animcursor::AnimationCursor;
use swarmsaver::components::mapposition::MapPosition;
use swarmsaver::components::onscene::OnScene;
use swarmsaver::components::velocity::Velocity;
use swarmsaver::game::populate_scenes;
use swarmsaver::resources::entropy::{RandomSource, ScriptedEntropy};
use swarmsaver::resources::frametiming::FrameTiming;
use swarmsaver::resources::saverconfig::SaverConfig;
use swarmsaver::resources::scenelayout::{SceneLayout, SceneRect};
use swarmsaver::resources::worldtime::WorldTime;
use swarmsaver::systems::animation::animation;
use swarmsaver::systems::movement::movement;
use swarmsaver::systems::respawn::{GAP, respawn_out_of_bounds};
use swarmsaver::systems::time::update_world_time;

const EPSILON: f32 = 1e-6;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn test_config(frame_count: u32, thing_count: u32) -> SaverConfig {
    SaverConfig {
        frame_format: "./frames/frame%d.png".to_string(),
        frame_count,
        frame_delay_ms: 100,
        thing_count,
        config_path: PathBuf::from("./swarmsaver.ini"),
    }
}

fn make_world(script: &[u8]) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(FrameTiming::uniform(4, 100));
    world.insert_resource(SceneLayout::new(vec![SceneRect {
        x: 0.0,
        y: 0.0,
        w: 1920.0,
        h: 1080.0,
    }]));
    world.insert_resource(test_config(4, 8));
    world.insert_resource(RandomSource::new(ScriptedEntropy::new(script.to_vec())));
    world
}

fn tick_movement(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(movement);
    schedule.run(world);
}

fn tick_respawn(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(respawn_out_of_bounds);
    schedule.run(world);
}

fn tick_animation(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(animation);
    schedule.run(world);
}

#[test]
fn movement_adds_velocity_each_tick() {
    let mut world = make_world(&[0]);
    let entity = world
        .spawn((
            OnScene::new(0),
            MapPosition::new(100.0, 200.0),
            Velocity::new(0.5, -0.25),
        ))
        .id();

    tick_movement(&mut world);
    tick_movement(&mut world);

    let pos = world.get::<MapPosition>(entity).unwrap().pos;
    assert!(approx_eq(pos.x, 101.0));
    assert!(approx_eq(pos.y, 199.5));
}

#[test]
fn in_bounds_thing_is_left_alone() {
    let mut world = make_world(&[0xFF]);
    let entity = world
        .spawn((
            OnScene::new(0),
            MapPosition::new(960.0, 540.0),
            Velocity::new(0.1, 0.1),
        ))
        .id();

    tick_respawn(&mut world);

    let pos = world.get::<MapPosition>(entity).unwrap().pos;
    assert!(approx_eq(pos.x, 960.0));
    assert!(approx_eq(pos.y, 540.0));
    let vel = world.get::<Velocity>(entity).unwrap().vel;
    assert!(approx_eq(vel.x, 0.1));
    assert!(approx_eq(vel.y, 0.1));
}

#[test]
fn zero_velocity_thing_persists_unchanged() {
    // A parked thing never crosses a boundary, so it is never re-randomized.
    let mut world = make_world(&[0x5A]);
    let entity = world
        .spawn((
            OnScene::new(0),
            MapPosition::new(300.0, 400.0),
            Velocity::new(0.0, 0.0),
        ))
        .id();

    for _ in 0..10 {
        tick_movement(&mut world);
        tick_respawn(&mut world);
    }

    assert_eq!(
        *world.get::<MapPosition>(entity).unwrap(),
        MapPosition::new(300.0, 400.0)
    );
    assert_eq!(
        *world.get::<Velocity>(entity).unwrap(),
        Velocity::new(0.0, 0.0)
    );
}

#[test]
fn past_right_margin_respawns_on_left_edge() {
    // Script: edge byte 0 (left), perpendicular u32 = 500 (little endian),
    // vx byte -100 (abs forced inward to +0.5), vy byte 50 (+0.25).
    let script = [0x00, 0xF4, 0x01, 0x00, 0x00, 0x9C, 0x32];
    let mut world = make_world(&script);
    let entity = world
        .spawn((
            OnScene::new(0),
            MapPosition::new(1981.0, 500.0),
            Velocity::new(0.0, 0.0),
        ))
        .id();

    tick_respawn(&mut world);

    let pos = world.get::<MapPosition>(entity).unwrap().pos;
    assert!(approx_eq(pos.x, -(GAP / 2.0)));
    assert!(approx_eq(pos.x, -25.0));
    assert!(approx_eq(pos.y, 500.0));

    let vel = world.get::<Velocity>(entity).unwrap().vel;
    assert!(approx_eq(vel.x, 0.5));
    assert!(vel.x >= 0.0, "left-edge respawn must drift rightwards");
    assert!(approx_eq(vel.y, 0.25));
}

#[test]
fn respawn_lands_inside_margins_on_every_edge() {
    // Varied script so all four edges and a spread of coordinates come up.
    let script: Vec<u8> = (0u16..251).map(|b| (b * 7 % 256) as u8).collect();
    let mut world = make_world(&script);
    let entity = world
        .spawn((
            OnScene::new(0),
            MapPosition::new(0.0, 0.0),
            Velocity::new(0.0, 0.0),
        ))
        .id();

    for _ in 0..64 {
        {
            let mut pos = world.get_mut::<MapPosition>(entity).unwrap();
            pos.pos = Vector2 {
                x: 10_000.0,
                y: 10_000.0,
            };
        }
        tick_respawn(&mut world);

        let pos = world.get::<MapPosition>(entity).unwrap().pos;
        assert!(pos.x >= -GAP && pos.x <= 1920.0 + GAP, "x = {}", pos.x);
        assert!(pos.y >= -GAP && pos.y <= 1080.0 + GAP, "y = {}", pos.y);
        // Never out past two opposite edges at once: at most one coordinate
        // sits in the off-screen margin, and only on one side.
        let x_off = pos.x < 0.0 || pos.x >= 1920.0;
        let y_off = pos.y < 0.0 || pos.y >= 1080.0;
        assert!(!(x_off && y_off), "respawned into a corner: {pos:?}");

        // The inward velocity component points back across the screen.
        let vel = world.get::<Velocity>(entity).unwrap().vel;
        if pos.x < 0.0 {
            assert!(vel.x >= 0.0);
        } else if pos.x >= 1920.0 {
            assert!(vel.x <= 0.0);
        } else if pos.y < 0.0 {
            assert!(vel.y >= 0.0);
        } else {
            assert!(vel.y <= 0.0);
        }
    }
}

#[test]
fn animation_advances_with_world_time() {
    let mut world = make_world(&[0]);
    let entity = world
        .spawn((OnScene::new(0), AnimationCursor::starting_at(0)))
        .id();

    update_world_time(&mut world, 0.25);
    tick_animation(&mut world);

    let cursor = world.get::<AnimationCursor>(entity).unwrap();
    assert_eq!(cursor.frame_index, 2);
    assert_eq!(cursor.elapsed_ms, 50);
}

#[test]
fn animation_split_ticks_match_one_big_tick() {
    let mut split = make_world(&[0]);
    let split_entity = split
        .spawn((OnScene::new(0), AnimationCursor::starting_at(1)))
        .id();
    let mut whole = make_world(&[0]);
    let whole_entity = whole
        .spawn((OnScene::new(0), AnimationCursor::starting_at(1)))
        .id();

    for _ in 0..10 {
        update_world_time(&mut split, 0.025);
        tick_animation(&mut split);
    }
    update_world_time(&mut whole, 0.25);
    tick_animation(&mut whole);

    assert_eq!(
        split.get::<AnimationCursor>(split_entity).unwrap(),
        whole.get::<AnimationCursor>(whole_entity).unwrap()
    );
}

fn collect_things(world: &mut World) -> Vec<(usize, Vector2, Vector2, usize, u32)> {
    let mut query = world.query::<(&OnScene, &MapPosition, &Velocity, &AnimationCursor)>();
    query
        .iter(world)
        .map(|(scene, pos, vel, cursor)| {
            (
                scene.index,
                pos.pos,
                vel.vel,
                cursor.frame_index,
                cursor.elapsed_ms,
            )
        })
        .collect()
}

#[test]
fn population_is_reproducible_from_a_fixed_script() {
    let script: Vec<u8> = (0u16..256).map(|b| b as u8).collect();
    let mut a = make_world(&script);
    let mut b = make_world(&script);

    populate_scenes(&mut a);
    populate_scenes(&mut b);

    let things_a = collect_things(&mut a);
    let things_b = collect_things(&mut b);
    assert_eq!(things_a.len(), 8);
    assert_eq!(things_a, things_b);
}

#[test]
fn population_stays_inside_scene_and_frame_range() {
    let script: Vec<u8> = (0u16..256).map(|b| (255 - b) as u8).collect();
    let mut world = make_world(&script);

    populate_scenes(&mut world);

    for (scene, pos, vel, frame, elapsed) in collect_things(&mut world) {
        assert_eq!(scene, 0);
        assert!(pos.x >= 0.0 && pos.x < 1920.0);
        assert!(pos.y >= 0.0 && pos.y < 1080.0);
        assert!(vel.x.abs() <= 128.0 / 200.0 + EPSILON);
        assert!(vel.y.abs() <= 128.0 / 200.0 + EPSILON);
        assert!(frame < 4);
        assert_eq!(elapsed, 0);
    }
}

#[test]
fn population_staggers_start_frames() {
    // An incrementing script makes consecutive things start on different
    // frames; all that matters is that not everything starts at frame 0.
    let script: Vec<u8> = (0u16..256).map(|b| b as u8).collect();
    let mut world = make_world(&script);

    populate_scenes(&mut world);

    let frames: Vec<usize> = collect_things(&mut world)
        .into_iter()
        .map(|(_, _, _, frame, _)| frame)
        .collect();
    assert!(frames.iter().any(|&f| f != frames[0]));
}
