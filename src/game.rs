//! Scene population.
//!
//! Spawns the configured number of things into every scene. Each thing gets
//! a uniformly random position inside its scene, a random drift velocity of
//! roughly ±0.635 pixels per tick on each axis, and a random starting frame
//! so things sharing one frame set animate out of phase.
//!
//! Randomness is drawn in a fixed order per thing — x, y, vx, vy, start
//! frame — so a scripted entropy backend reproduces identical scenes.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::animcursor::AnimationCursor;
use crate::components::mapposition::MapPosition;
use crate::components::onscene::OnScene;
use crate::components::velocity::Velocity;
use crate::resources::entropy::RandomSource;
use crate::resources::saverconfig::SaverConfig;
use crate::resources::scenelayout::SceneLayout;
use crate::systems::respawn::SPEED_SCALE;

/// Spawn `thing_count` things into every scene in the layout.
pub fn populate_scenes(world: &mut World) {
    let layout = world.resource::<SceneLayout>().clone();
    let config = world.resource::<SaverConfig>().clone();
    let frame_count = config.frame_count as usize;

    // Roll all spawn parameters before spawning; the random source holds a
    // mutable borrow of the world while it is being drawn from.
    let mut spawns = Vec::with_capacity(layout.scene_count() * config.thing_count as usize);
    {
        let mut rng = world.resource_mut::<RandomSource>();
        for (index, rect) in layout.scenes.iter().enumerate() {
            for _ in 0..config.thing_count {
                let x = (rng.next_u32() % rect.w as u32) as f32;
                let y = (rng.next_u32() % rect.h as u32) as f32;
                let vx = f32::from(rng.next_i8()) / SPEED_SCALE;
                let vy = f32::from(rng.next_i8()) / SPEED_SCALE;
                let frame = rng.next_u8() as usize % frame_count;
                spawns.push((index, x, y, vx, vy, frame));
            }
        }
    }

    for (index, x, y, vx, vy, frame) in spawns {
        world.spawn((
            OnScene::new(index),
            MapPosition::new(x, y),
            Velocity::new(vx, vy),
            AnimationCursor::starting_at(frame),
        ));
    }

    info!(
        "Spawned {} things across {} scene(s)",
        config.thing_count as usize * layout.scene_count(),
        layout.scene_count()
    );
}
