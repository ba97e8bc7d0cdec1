use bevy_ecs::prelude::*;

use crate::components::animcursor::AnimationCursor;
use crate::resources::frametiming::FrameTiming;
use crate::resources::worldtime::WorldTime;

/// Advance every playback cursor by the frame's elapsed milliseconds.
///
/// Runs for every thing each tick, whether or not it was respawned this
/// frame. The actual stepping logic lives on
/// [`AnimationCursor::advance`](crate::components::animcursor::AnimationCursor::advance).
pub fn animation(
    mut query: Query<&mut AnimationCursor>,
    timing: Res<FrameTiming>,
    time: Res<WorldTime>,
) {
    if time.delta_ms == 0 {
        return;
    }
    for mut cursor in query.iter_mut() {
        cursor.advance(time.delta_ms, &timing);
    }
}
