//! Per-scene frame textures.
//!
//! Each scene owns its own copy of the animation's frame textures, mirroring
//! its entry in [`SceneLayout`](super::scenelayout::SceneLayout). Textures
//! are GPU resources tied to the main thread, so the store is inserted as a
//! non-send resource and only touched by the render pass.

use raylib::prelude::Texture2D;

/// Ordered frame textures for one scene.
///
/// Invariant: the list has the same length as the shared
/// [`FrameTiming`](super::frametiming::FrameTiming) table.
pub struct FrameSet {
    pub frames: Vec<Texture2D>,
}

impl FrameSet {
    pub fn new(frames: Vec<Texture2D>) -> Self {
        Self { frames }
    }
}

/// Frame sets for every scene, indexed by
/// [`OnScene`](crate::components::onscene::OnScene).
pub struct SceneStore {
    pub scenes: Vec<FrameSet>,
}

impl SceneStore {
    pub fn new(scenes: Vec<FrameSet>) -> Self {
        Self { scenes }
    }
}
