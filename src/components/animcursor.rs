//! Per-thing animation playback cursor.
//!
//! The cursor is a view into the shared frame timing table
//! ([`FrameTiming`](crate::resources::frametiming::FrameTiming)): it records
//! which frame a thing is currently showing and how long that frame has been
//! on screen. Frame textures and durations are owned elsewhere, so many things
//! can play the same animation out of phase.

use bevy_ecs::prelude::Component;

use crate::resources::frametiming::FrameTiming;

/// Playback position into a shared frame set.
///
/// Invariant: `frame_index` stays in `[0, frame_count)` as long as `advance`
/// is the only mutator.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationCursor {
    /// Index of the frame currently displayed.
    pub frame_index: usize,
    /// Time the current frame has been displayed, in milliseconds.
    pub elapsed_ms: u32,
}

impl AnimationCursor {
    /// Start playback at `frame_index` with zero elapsed time.
    pub fn starting_at(frame_index: usize) -> Self {
        Self {
            frame_index,
            elapsed_ms: 0,
        }
    }

    /// Advance playback by `delta_ms`.
    ///
    /// Loops while the accumulated time exceeds the current frame's duration,
    /// so a single large delta can step over several short frames. Additive:
    /// advancing by `a` then `b` lands on the same state as advancing by
    /// `a + b` once.
    pub fn advance(&mut self, delta_ms: u32, timing: &FrameTiming) {
        let count = timing.frame_count();
        if count == 0 || timing.total_ms() == 0 {
            return;
        }
        self.elapsed_ms += delta_ms;
        while self.elapsed_ms > timing.delay_ms(self.frame_index) {
            self.elapsed_ms -= timing.delay_ms(self.frame_index);
            self.frame_index = (self.frame_index + 1) % count;
        }
    }
}
