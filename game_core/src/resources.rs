use crate::Side;

/// In-memory rally tally, reset only by dropping the simulator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub ai: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit the side that did not miss
    pub fn record_miss(&mut self, missed: Side) {
        match missed.opponent() {
            Side::Player => self.player += 1,
            Side::Ai => self.ai += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Ai => self.ai,
        }
    }
}

/// Source of randomness for serving the ball
pub trait ServeRng {
    /// Uniform angle in `[-max_angle, max_angle]`
    fn serve_angle(&mut self, max_angle: f32) -> f32;

    /// Coin flip: serve towards the AI side
    fn serve_right(&mut self) -> bool;
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl ServeRng for GameRng {
    fn serve_angle(&mut self, max_angle: f32) -> f32 {
        use rand::Rng;
        self.0.gen_range(-max_angle..=max_angle)
    }

    fn serve_right(&mut self) -> bool {
        use rand::Rng;
        self.0.gen_bool(0.5)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub player_hit: bool,
    pub ai_hit: bool,
    pub missed: Option<Side>, // Side whose edge the ball crossed
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.player_hit = false;
        self.ai_hit = false;
        self.missed = None;
    }

    pub fn record_hit(&mut self, side: Side) {
        match side {
            Side::Player => self.player_hit = true,
            Side::Ai => self.ai_hit = true,
        }
    }
}
