use hecs::World;

use crate::{AiTracker, Arena, Ball, Paddle};

/// Step AI paddles towards the ball, holding still inside the deadband
pub fn track_ball(world: &mut World, arena: &Arena) {
    let Some(ball_y) = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.pos.y)
    else {
        return;
    };

    for (_entity, (paddle, tracker)) in world.query_mut::<(&mut Paddle, &AiTracker)>() {
        let center = paddle.center_y();
        if ball_y < center - tracker.deadband {
            paddle.y -= tracker.step;
        } else if ball_y > center + tracker.deadband {
            paddle.y += tracker.step;
        }

        paddle.y = arena.clamp_top(paddle.y, paddle.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Config, Side};
    use glam::Vec2;

    fn setup(paddle_top: f32, ball_y: f32) -> (World, Arena) {
        let config = Config::new();
        let arena = Arena::from_config(&config);
        let mut world = World::new();
        create_paddle(&mut world, &config, Side::Ai, paddle_top);
        create_ball(
            &mut world,
            Ball::new(Vec2::new(400.0, ball_y), Vec2::new(5.0, 0.0), 12.0, 5.0),
        );
        (world, arena)
    }

    fn ai_y(world: &World) -> f32 {
        world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == Side::Ai)
            .map(|(_e, p)| p.y)
            .unwrap()
    }

    #[test]
    fn test_ai_moves_down_towards_ball() {
        // Center at 250, ball 16 below
        let (mut world, arena) = setup(200.0, 266.0);
        track_ball(&mut world, &arena);
        assert_eq!(ai_y(&world), 205.0);
    }

    #[test]
    fn test_ai_moves_up_towards_ball() {
        let (mut world, arena) = setup(200.0, 100.0);
        track_ball(&mut world, &arena);
        assert_eq!(ai_y(&world), 195.0);
    }

    #[test]
    fn test_ai_holds_inside_deadband() {
        for ball_y in [235.0, 250.0, 265.0] {
            let (mut world, arena) = setup(200.0, ball_y);
            track_ball(&mut world, &arena);
            assert_eq!(ai_y(&world), 200.0, "Ball at {ball_y} is inside deadband");
        }
    }

    #[test]
    fn test_ai_is_clamped_to_arena() {
        let (mut world, arena) = setup(2.0, 0.0);
        track_ball(&mut world, &arena);
        assert_eq!(ai_y(&world), 0.0, "Clamped at the top");

        let (mut world, arena) = setup(398.0, 500.0);
        track_ball(&mut world, &arena);
        assert_eq!(ai_y(&world), 400.0, "Clamped at the bottom");
    }

    #[test]
    fn test_ai_without_ball_is_idle() {
        let config = Config::new();
        let arena = Arena::from_config(&config);
        let mut world = World::new();
        create_paddle(&mut world, &config, Side::Ai, 120.0);

        track_ball(&mut world, &arena);

        assert_eq!(ai_y(&world), 120.0);
    }
}
