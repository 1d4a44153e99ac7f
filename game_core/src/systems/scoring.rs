use hecs::World;

use crate::{Arena, Ball, Config, Events, Score, ServeRng, Side};

/// Serve a fresh ball when the current one crosses the left or right edge
pub fn check_out_of_bounds<R: ServeRng + ?Sized>(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut R,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let missed = if ball.pos.x - ball.radius < 0.0 {
            Side::Player
        } else if ball.pos.x + ball.radius > arena.width {
            Side::Ai
        } else {
            continue;
        };

        score.record_miss(missed);
        events.missed = Some(missed);

        ball.serve(
            arena.center(),
            config.ball_speed_initial,
            config.max_bounce_angle,
            rng,
        );

        log::info!(
            "{:?} missed, score {}-{}, serving at ({:.2}, {:.2})",
            missed,
            score.player,
            score.ai,
            ball.vel.x,
            ball.vel.y
        );
    }
}
