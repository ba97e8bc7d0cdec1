//! Saver systems.
//!
//! Submodules overview
//! - [`animation`] – advance per-thing playback cursors by elapsed time
//! - [`movement`] – integrate positions from per-tick velocities
//! - [`render`] – draw every scene into the spanning window using raylib
//! - [`respawn`] – detect off-screen things and respawn them on an edge
//! - [`time`] – update the shared millisecond clock and delta

pub mod animation;
pub mod movement;
pub mod render;
pub mod respawn;
pub mod time;
