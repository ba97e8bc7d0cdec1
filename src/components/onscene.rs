use bevy_ecs::prelude::Component;

/// Binds a thing to one display scene.
///
/// The index selects the matching entries in
/// [`SceneLayout`](crate::resources::scenelayout::SceneLayout) and
/// [`SceneStore`](crate::resources::scenestore::SceneStore).
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct OnScene {
    pub index: usize,
}

impl OnScene {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}
