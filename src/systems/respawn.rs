//! Off-screen detection and edge respawn.
//!
//! A thing that drifts further than [`GAP`] pixels past any side of its scene
//! is respawned on a uniformly chosen edge, half the gap outside the visible
//! area, with a fresh random velocity whose inward component is forced to
//! point back across the screen. A thing that never leaves bounds keeps its
//! velocity forever; a zero-velocity thing parked inside the scene simply
//! stays there.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::mapposition::MapPosition;
use crate::components::onscene::OnScene;
use crate::components::velocity::Velocity;
use crate::resources::entropy::RandomSource;
use crate::resources::scenelayout::SceneLayout;

/// Margin past the scene edge before a thing counts as gone, in pixels.
pub const GAP: f32 = 50.0;

/// Divisor turning a signed random byte into a per-tick velocity component.
pub const SPEED_SCALE: f32 = 200.0;

pub fn respawn_out_of_bounds(
    mut query: Query<(&OnScene, &mut MapPosition, &mut Velocity)>,
    layout: Res<SceneLayout>,
    mut rng: ResMut<RandomSource>,
) {
    for (scene, mut position, mut velocity) in query.iter_mut() {
        let Some(rect) = layout.scenes.get(scene.index) else {
            continue;
        };
        let (w, h) = (rect.w, rect.h);
        let pos = position.pos;
        let gone = pos.x > w + GAP || pos.x < -GAP || pos.y > h + GAP || pos.y < -GAP;
        if !gone {
            continue;
        }

        let component = |rng: &mut RandomSource| f32::from(rng.next_i8()) / SPEED_SCALE;
        match rng.next_u8() % 4 {
            // left
            0 => {
                position.pos = Vector2 {
                    x: -(GAP / 2.0),
                    y: (rng.next_u32() % h as u32) as f32,
                };
                velocity.vel = Vector2 {
                    x: component(&mut rng).abs(),
                    y: component(&mut rng),
                };
            }
            // top
            1 => {
                position.pos = Vector2 {
                    x: (rng.next_u32() % w as u32) as f32,
                    y: -(GAP / 2.0),
                };
                velocity.vel = Vector2 {
                    x: component(&mut rng),
                    y: component(&mut rng).abs(),
                };
            }
            // right
            2 => {
                position.pos = Vector2 {
                    x: w + GAP / 2.0,
                    y: (rng.next_u32() % h as u32) as f32,
                };
                velocity.vel = Vector2 {
                    x: -component(&mut rng).abs(),
                    y: component(&mut rng),
                };
            }
            // bottom
            _ => {
                position.pos = Vector2 {
                    x: (rng.next_u32() % w as u32) as f32,
                    y: h + GAP / 2.0,
                };
                velocity.vel = Vector2 {
                    x: component(&mut rng),
                    y: -component(&mut rng).abs(),
                };
            }
        }
    }
}
