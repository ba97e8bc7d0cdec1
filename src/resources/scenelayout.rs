//! Per-display scene geometry.
//!
//! raylib drives a single OS window, so multi-monitor output is one
//! borderless window spanning the union of all monitor rectangles. Each
//! monitor becomes one scene: a rectangle in window coordinates that things
//! drift inside of and that rendering scissors to.

use bevy_ecs::prelude::Resource;

/// One scene's rectangle, in pixels relative to the spanning window origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Bounding box of all monitors in OS virtual-desktop coordinates; the
/// spanning window is created with this position and size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSpan {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// Geometry of every scene, indexed by
/// [`OnScene`](crate::components::onscene::OnScene).
#[derive(Resource, Clone, Debug, Default)]
pub struct SceneLayout {
    pub scenes: Vec<SceneRect>,
}

impl SceneLayout {
    pub fn new(scenes: Vec<SceneRect>) -> Self {
        Self { scenes }
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Build the layout from absolute monitor rectangles `(x, y, w, h)`,
    /// translating them so the union's top-left corner lands at the window
    /// origin. Returns the layout and the spanning window bounds.
    pub fn from_monitors(monitors: &[(i32, i32, i32, i32)]) -> (Self, WindowSpan) {
        let min_x = monitors.iter().map(|m| m.0).min().unwrap_or(0);
        let min_y = monitors.iter().map(|m| m.1).min().unwrap_or(0);
        let max_x = monitors.iter().map(|m| m.0 + m.2).max().unwrap_or(0);
        let max_y = monitors.iter().map(|m| m.1 + m.3).max().unwrap_or(0);

        let scenes = monitors
            .iter()
            .map(|&(x, y, w, h)| SceneRect {
                x: (x - min_x) as f32,
                y: (y - min_y) as f32,
                w: w as f32,
                h: h as f32,
            })
            .collect();

        let span = WindowSpan {
            x: min_x,
            y: min_y,
            w: max_x - min_x,
            h: max_y - min_y,
        };
        (Self { scenes }, span)
    }
}
