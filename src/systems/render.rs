//! Render pass.
//!
//! Draws every scene's things into the spanning window, one scissored region
//! per scene so a sprite drifting off one monitor never bleeds onto the
//! neighbor. ECS data is collected first; the raylib handle, thread token and
//! texture store are non-send resources that get taken out of the world for
//! the duration of the drawing scope and put back afterwards.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::animcursor::AnimationCursor;
use crate::components::mapposition::MapPosition;
use crate::components::onscene::OnScene;
use crate::resources::scenelayout::SceneLayout;
use crate::resources::scenestore::SceneStore;

/// Clear the window and draw one frame of every scene.
pub fn render_frame(world: &mut World) {
    let items: Vec<(usize, usize, Vector2)> = {
        let mut query = world.query::<(&OnScene, &AnimationCursor, &MapPosition)>();
        query
            .iter(world)
            .map(|(scene, cursor, position)| (scene.index, cursor.frame_index, position.pos))
            .collect()
    };
    let layout = world.resource::<SceneLayout>().clone();

    let mut rl = world
        .remove_non_send_resource::<RaylibHandle>()
        .expect("raylib handle in world");
    let thread = world
        .remove_non_send_resource::<RaylibThread>()
        .expect("raylib thread in world");
    let store = world
        .remove_non_send_resource::<SceneStore>()
        .expect("scene store in world");

    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);

        for (index, rect) in layout.scenes.iter().enumerate() {
            let mut sd = d.begin_scissor_mode(
                rect.x as i32,
                rect.y as i32,
                rect.w as i32,
                rect.h as i32,
            );
            for &(scene, frame, pos) in items.iter().filter(|(scene, _, _)| *scene == index) {
                if let Some(tex) = store.scenes.get(scene).and_then(|set| set.frames.get(frame)) {
                    sd.draw_texture_v(
                        tex,
                        Vector2 {
                            x: rect.x + pos.x,
                            y: rect.y + pos.y,
                        },
                        Color::WHITE,
                    );
                }
            }
        }
    }

    world.insert_non_send_resource(store);
    world.insert_non_send_resource(thread);
    world.insert_non_send_resource(rl);
}
