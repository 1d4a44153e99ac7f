use hecs::World;

use crate::{Arena, Ball, Config, Events, Paddle, Side};

/// Reflect the ball off the top and bottom edges
pub fn check_wall_bounce(world: &mut World, arena: &Arena, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y - ball.radius < 0.0 || ball.pos.y + ball.radius > arena.height {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}

/// Bounce the ball off any paddle whose bounding box it overlaps
///
/// This is a box-vs-box test on the ball's bounding square, not exact
/// circle geometry. Paddles are tested in side order, each against the ball
/// as left by the previous test.
pub fn check_paddle_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddles first so the ball can be borrowed mutably
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if !ball.bounds().overlaps(&paddle.bounds()) {
                continue;
            }

            // Push the ball clear of the paddle face so it cannot re-trigger
            ball.pos.x = match paddle.side {
                Side::Player => paddle.x + paddle.width + ball.radius,
                Side::Ai => paddle.x - ball.radius,
            };
            ball.bounce_off(paddle, config.max_bounce_angle, config.ball_speed_increment);
            events.record_hit(paddle.side);

            log::debug!(
                "Ball hit {:?} paddle, vel=({:.2}, {:.2}) speed now {:.1}",
                paddle.side,
                ball.vel.x,
                ball.vel.y,
                ball.speed
            );
        }
    }
}
