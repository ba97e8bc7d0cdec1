//! Frame timing resource.
//!
//! All durations in the saver share one unit: milliseconds. Frame delays are
//! configured in milliseconds and the per-tick delta is delivered in
//! milliseconds, so there is no hidden scale factor between the two. raylib
//! reports the frame delta as fractional seconds; the sub-millisecond
//! remainder is carried across ticks instead of being truncated away.

use bevy_ecs::prelude::Resource;

/// Wall-clock time state, advanced once per frame.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Total whole milliseconds since startup.
    pub elapsed_ms: u64,
    /// Whole milliseconds elapsed during the last frame.
    pub delta_ms: u32,
    /// Fractional milliseconds not yet handed out.
    carry_ms: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        Self {
            elapsed_ms: 0,
            delta_ms: 0,
            carry_ms: 0.0,
        }
    }
}

impl WorldTime {
    /// Fold one frame's duration (in seconds, as raylib reports it) into the
    /// millisecond clock.
    pub fn advance(&mut self, frame_seconds: f32) {
        self.carry_ms += frame_seconds.max(0.0) * 1000.0;
        let whole = self.carry_ms.floor();
        self.carry_ms -= whole;
        self.delta_ms = whole as u32;
        self.elapsed_ms += u64::from(self.delta_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_convert_to_whole_milliseconds() {
        let mut time = WorldTime::default();
        time.advance(0.25);
        assert_eq!(time.delta_ms, 250);
        assert_eq!(time.elapsed_ms, 250);
    }

    #[test]
    fn sub_millisecond_remainders_are_not_lost() {
        let mut time = WorldTime::default();
        // 0.4 ms per frame: the first two frames deliver nothing, the third
        // carries over the full millisecond.
        for _ in 0..3 {
            time.advance(0.0004);
        }
        assert_eq!(time.elapsed_ms, 1);
    }

    #[test]
    fn never_goes_backwards() {
        let mut time = WorldTime::default();
        time.advance(-0.5);
        assert_eq!(time.delta_ms, 0);
        assert_eq!(time.elapsed_ms, 0);
    }
}
