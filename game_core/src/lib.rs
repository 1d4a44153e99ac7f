pub mod components;
pub mod config;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use map::*;
pub use params::*;
pub use resources::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one frame of the deterministic Pong simulation
///
/// The phases run in a fixed order: player paddle, ball motion, wall bounce,
/// paddle hits, out-of-bounds serve, then AI tracking.
pub fn step<R: ServeRng + ?Sized>(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut R,
    player_target_y: Option<f32>,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Follow the pointer
    apply_pointer_target(world, arena, player_target_y);

    // 2. Move ball
    move_ball(world);

    // 3. Top/bottom walls
    check_wall_bounce(world, arena, events);

    // 4. Paddle hits, player first
    check_paddle_collisions(world, config, events);

    // 5. Serve again after a miss
    check_out_of_bounds(world, arena, config, score, events, rng);

    // 6. AI chases the ball
    track_ball(world, arena);
}

/// Helper to create a paddle entity with the controller for its side
pub fn create_paddle(world: &mut World, config: &Config, side: Side, y: f32) -> hecs::Entity {
    let paddle = Paddle::new(
        side,
        config.paddle_x(side),
        y,
        config.paddle_width,
        config.paddle_height,
    );
    match side {
        Side::Player => world.spawn((paddle, PointerControlled)),
        Side::Ai => world.spawn((paddle, AiTracker::new(config.ai_deadband, config.ai_step))),
    }
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}

/// A self-contained game: one world holding two paddles and a ball, plus
/// everything `step` needs
pub struct PongSimulator<R: ServeRng = GameRng> {
    world: World,
    arena: Arena,
    config: Config,
    score: Score,
    events: Events,
    rng: R,
    frame: u64,
}

impl<R: ServeRng> PongSimulator<R> {
    /// Paddles start vertically centered; the ball starts at the center
    /// heading down and to the right at the initial speed.
    pub fn new(config: Config, rng: R) -> Self {
        let arena = Arena::from_config(&config);
        let mut world = World::new();

        let paddle_y = arena.centered_top(config.paddle_height);
        create_paddle(&mut world, &config, Side::Player, paddle_y);
        create_paddle(&mut world, &config, Side::Ai, paddle_y);

        let speed = config.ball_speed_initial;
        create_ball(
            &mut world,
            Ball::new(
                arena.center(),
                Vec2::new(speed, speed),
                config.ball_radius,
                speed,
            ),
        );

        Self {
            world,
            arena,
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            frame: 0,
        }
    }

    /// Advance one frame. `player_target_y` is where the player wants the
    /// center of their paddle; `None` leaves it where it is.
    pub fn step(&mut self, player_target_y: Option<f32>) {
        step(
            &mut self.world,
            &self.arena,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
            player_target_y,
        );
        self.frame += 1;

        log::trace!("Frame {} done, events {:?}", self.frame, self.events);
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| *paddle)
    }

    pub fn player(&self) -> Option<Paddle> {
        self.paddle(Side::Player)
    }

    pub fn ai(&self) -> Option<Paddle> {
        self.paddle(Side::Ai)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    /// Replace the ball's state wholesale
    pub fn set_ball(&mut self, ball: Ball) {
        for (_entity, current) in self.world.query_mut::<&mut Ball>() {
            *current = ball;
        }
    }

    /// Move a paddle's top edge, clamped to the arena
    pub fn set_paddle_y(&mut self, side: Side, y: f32) {
        let arena = self.arena;
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            if paddle.side == side {
                paddle.y = arena.clamp_top(y, paddle.height);
            }
        }
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// What happened during the most recent frame
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn world(&self) -> &World {
        &self.world
    }
}

impl PongSimulator<GameRng> {
    /// Default tuning with a seeded random source
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Config::new(), GameRng::new(seed))
    }
}
