use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::velocity::Velocity;

/// Integrate positions from velocities.
///
/// Velocity is in pixels per tick (see
/// [`Velocity`](crate::components::velocity::Velocity)), so this is a plain
/// addition with no delta-time scaling.
pub fn movement(mut query: Query<(&mut MapPosition, &Velocity)>) {
    for (mut position, velocity) in query.iter_mut() {
        position.pos = position.pos + velocity.vel;
    }
}
