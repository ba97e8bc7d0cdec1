//! Drift velocity component.
//!
//! Velocity is expressed in pixels **per tick**, not per second. A thing's
//! velocity is rolled once from the random source (roughly ±0.635 on each
//! axis) and only changes when the thing leaves the scene and is respawned
//! on an edge, so scaling it by the frame delta would change the look of the
//! drift without making it more correct.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Per-tick drift applied to [`MapPosition`](super::mapposition::MapPosition).
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Velocity {
    pub vel: Vector2,
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            vel: Vector2 { x, y },
        }
    }
}
