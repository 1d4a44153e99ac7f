use hecs::World;

use crate::{Arena, Paddle, PointerControlled};

/// Center pointer-controlled paddles on `target_y`, if there is one
pub fn apply_pointer_target(world: &mut World, arena: &Arena, target_y: Option<f32>) {
    // Without a usable pointer position the paddle stays put this frame
    let Some(target_y) = target_y.filter(|y| y.is_finite()) else {
        return;
    };

    for (_entity, (paddle, _)) in world.query_mut::<(&mut Paddle, &PointerControlled)>() {
        paddle.y = arena.clamp_top(target_y - paddle.height / 2.0, paddle.height);
    }
}
