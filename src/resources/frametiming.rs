//! Shared per-frame display durations.
//!
//! One timing table serves every scene and every thing: frame textures are
//! per-scene (GPU resources), but the playback rhythm of the animation is a
//! single shared table indexed identically to the frame list.

use bevy_ecs::prelude::Resource;

/// Ordered per-frame display durations, in milliseconds.
///
/// Invariant: the table has the same length as each scene's frame list.
#[derive(Resource, Clone, Debug)]
pub struct FrameTiming {
    delays_ms: Vec<u32>,
}

impl FrameTiming {
    pub fn new(delays_ms: Vec<u32>) -> Self {
        Self { delays_ms }
    }

    /// A table of `frame_count` frames all shown for `delay_ms`.
    pub fn uniform(frame_count: usize, delay_ms: u32) -> Self {
        Self {
            delays_ms: vec![delay_ms; frame_count],
        }
    }

    pub fn frame_count(&self) -> usize {
        self.delays_ms.len()
    }

    /// Display duration of frame `index`, in milliseconds.
    pub fn delay_ms(&self, index: usize) -> u32 {
        self.delays_ms[index]
    }

    /// Sum of all frame durations; zero means playback cannot advance.
    pub fn total_ms(&self) -> u32 {
        self.delays_ms.iter().sum()
    }
}
