//! swarmsaver main entry point.
//!
//! A multi-monitor fullscreen screensaver built on:
//! - **raylib** for windowing, monitor enumeration, and rendering
//! - **bevy_ecs** for the per-thing simulation state and systems
//!
//! Every monitor becomes one scene inside a single borderless window that
//! spans the whole virtual desktop. Each scene owns its copy of the frame
//! textures and a swarm of drifting, animating things.
//!
//! # Main Loop
//!
//! 1. Load and validate the INI configuration (exit code 1 on failure)
//! 2. Acquire the OS entropy source and create the raylib window
//! 3. Enumerate monitors, size the spanning window, load frame textures
//! 4. Populate scenes and run the loop: poll input, advance time, run the
//!    movement/respawn/animation schedule, render every scene
//! 5. Exit with code 0 on any key press, mouse button release, or window
//!    close request
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./swarmsaver.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod game;
mod resources;
mod systems;

use bevy_ecs::prelude::*;
use clap::Parser;
use raylib::ffi;
use raylib::prelude::*;
use std::path::PathBuf;

use crate::resources::entropy::{OsEntropy, RandomSource};
use crate::resources::frametiming::FrameTiming;
use crate::resources::saverconfig::SaverConfig;
use crate::resources::scenelayout::SceneLayout;
use crate::resources::scenestore::{FrameSet, SceneStore};
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animation;
use crate::systems::movement::movement;
use crate::systems::render::render_frame;
use crate::systems::respawn::respawn_out_of_bounds;
use crate::systems::time::update_world_time;

/// Animated sprite swarm screensaver
#[derive(Parser)]
#[command(version, about = "Drifting sprite swarm across every monitor")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./swarmsaver.ini")]
    config: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Config errors are fatal before any window exists.
    let config = match SaverConfig::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let entropy = OsEntropy::probe().expect("Failed to acquire OS entropy source");
    let rng = RandomSource::new(entropy);

    // --------------- Raylib window ---------------
    // Monitor geometry is only available once a window exists, so start tiny
    // and stretch over the virtual desktop afterwards.
    let (mut rl, thread) = raylib::init()
        .size(640, 360)
        .title("swarmsaver")
        .undecorated()
        .vsync()
        .build();
    rl.set_target_fps(120);
    rl.hide_cursor();

    let mut monitors = enumerate_monitors();
    if monitors.is_empty() {
        log::warn!("Monitor enumeration returned nothing, using the current window");
        monitors.push((0, 0, rl.get_screen_width(), rl.get_screen_height()));
    }
    log::info!("Found {} monitor(s)", monitors.len());
    let (layout, span) = SceneLayout::from_monitors(&monitors);
    rl.set_window_size(span.w, span.h);
    rl.set_window_position(span.x, span.y);

    // --------------- Per-scene frame textures ---------------
    let mut scenes = Vec::with_capacity(layout.scene_count());
    for _ in 0..layout.scene_count() {
        let mut frames = Vec::with_capacity(config.frame_count as usize);
        for index in 1..=config.frame_count {
            let path = config.frame_path(index);
            match rl.load_texture(&thread, &path) {
                Ok(tex) => frames.push(tex),
                Err(e) => {
                    log::error!("Failed to load frame image {path}: {e}");
                    std::process::exit(1);
                }
            }
        }
        scenes.push(FrameSet::new(frames));
    }

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(FrameTiming::uniform(
        config.frame_count as usize,
        config.frame_delay_ms,
    ));
    world.insert_resource(layout);
    world.insert_resource(config);
    world.insert_resource(rng);
    world.insert_non_send_resource(SceneStore::new(scenes));
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    game::populate_scenes(&mut world);

    let mut update = Schedule::default();
    update.add_systems(movement);
    update.add_systems(respawn_out_of_bounds.after(movement));
    update.add_systems(animation.after(respawn_out_of_bounds));
    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    loop {
        let (quit, frame_seconds) = {
            let mut rl = world.non_send_resource_mut::<RaylibHandle>();
            let quit = rl.window_should_close()
                || rl.get_key_pressed().is_some()
                || rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT)
                || rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_RIGHT)
                || rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_MIDDLE);
            (quit, rl.get_frame_time())
        };
        if quit {
            break;
        }

        update_world_time(&mut world, frame_seconds);
        update.run(&mut world);
        render_frame(&mut world);
        world.clear_trackers();
    }

    log::info!("Shutting down");
}

/// Absolute rectangle `(x, y, w, h)` of every connected monitor.
fn enumerate_monitors() -> Vec<(i32, i32, i32, i32)> {
    let count = unsafe { ffi::GetMonitorCount() };
    (0..count)
        .map(|m| {
            let pos = unsafe { ffi::GetMonitorPosition(m) };
            let w = unsafe { ffi::GetMonitorWidth(m) };
            let h = unsafe { ffi::GetMonitorHeight(m) };
            (pos.x as i32, pos.y as i32, w, h)
        })
        .collect()
}
