use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Scene-local position of a thing, in pixels. The origin is the top-left
/// corner of the owning scene, not of the spanning window.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
