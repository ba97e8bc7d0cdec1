//! Time update system.
//!
//! Folds raylib's per-frame delta (fractional seconds) into the shared
//! [`WorldTime`](crate::resources::worldtime::WorldTime) millisecond clock
//! once per frame, before the schedule runs.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Advance the millisecond clock by one frame's duration.
pub fn update_world_time(world: &mut World, frame_seconds: f32) {
    world.resource_mut::<WorldTime>().advance(frame_seconds);
}
